use extest_pages::webdriver::DEFAULT_WEBDRIVER_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtestConfig {
    /// VS Code version to resolve locators for. Detected from `code_path`
    /// when unset.
    #[serde(default)]
    pub code_version: Option<String>,
    /// VS Code executable, used for version detection and for `probe`.
    #[serde(default)]
    pub code_path: Option<PathBuf>,
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    /// Extra arguments passed to VS Code when ChromeDriver launches it.
    #[serde(default = "default_chrome_args")]
    pub chrome_args: Vec<String>,
}

impl Default for ExtestConfig {
    fn default() -> Self {
        Self {
            code_version: None,
            code_path: None,
            webdriver_url: default_webdriver_url(),
            chrome_args: default_chrome_args(),
        }
    }
}

fn default_webdriver_url() -> String {
    DEFAULT_WEBDRIVER_URL.to_string()
}

fn default_chrome_args() -> Vec<String> {
    vec![
        "--disable-extensions".to_string(),
        "--skip-welcome".to_string(),
        "--skip-release-notes".to_string(),
    ]
}
