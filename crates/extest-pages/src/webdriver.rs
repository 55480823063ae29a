use crate::error::PageError;
use fantoccini::{Client, ClientBuilder};
use serde_json::{Map, Value, json};
use std::path::Path;
use tracing::info;

/// Default ChromeDriver endpoint.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

#[derive(Clone)]
pub struct WebDriverClient {
    pub client: Client,
}

impl WebDriverClient {
    pub async fn connect(
        url: &str,
        capabilities: Option<Map<String, Value>>,
    ) -> Result<Self, PageError> {
        let mut caps = Map::new();
        if let Some(user_caps) = capabilities {
            for (k, v) in user_caps {
                caps.insert(k, v);
            }
        }

        info!("Connecting to WebDriver at {}...", url);
        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(url)
            .await
            .map_err(|source| PageError::Session {
                url: url.to_string(),
                source,
            })?;

        Ok(Self { client })
    }

    pub async fn close(self) -> Result<(), PageError> {
        self.client.close().await?;
        Ok(())
    }
}

/// Capabilities that make ChromeDriver launch the VS Code Electron binary
/// instead of a browser.
pub fn vscode_capabilities(binary: &Path, args: &[String]) -> Map<String, Value> {
    let mut caps = Map::new();
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({
            "binary": binary.to_string_lossy(),
            "args": args,
        }),
    );
    caps
}
