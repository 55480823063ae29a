use crate::config::ExtestConfig;
use anyhow::{Context, Result};
use extest_locators::{
    LocatorContext, LocatorFactory, LocatorValue, Version, VersionedLocatorStore, session,
};
use extest_pages::PageContext;
use extest_pages::pages::{StatusBar, TitleBar};
use extest_pages::webdriver::vscode_capabilities;
use std::fmt::Write as _;
use tracing::info;

/// Base version and every version that carries a diff.
pub fn versions(store: &VersionedLocatorStore) -> String {
    let mut out = format!("{} (base)", store.base_version());
    for version in store.versions() {
        let leaves = store.diff(&version).map(|diff| diff.len()).unwrap_or(0);
        let _ = write!(out, "\n{version} ({leaves} changed)");
    }
    out
}

/// The resolved table as pretty JSON, optionally narrowed to one component.
pub fn resolve(
    store: &VersionedLocatorStore,
    version: Version,
    component: Option<&str>,
) -> Result<String> {
    let context = LocatorContext::for_version(store, version);
    let json = match component {
        Some(name) => serde_json::to_string_pretty(context.component(name)?)?,
        None => serde_json::to_string_pretty(context.locators())?,
    };
    Ok(json)
}

/// A single leaf. With `arg`, a factory leaf is invoked with it.
pub fn get(
    store: &VersionedLocatorStore,
    version: Version,
    component: &str,
    field: &str,
    arg: Option<&str>,
) -> Result<String> {
    let context = LocatorContext::for_version(store, version);
    if let Some(arg) = arg {
        return Ok(context.build(component, field, arg)?.to_string());
    }

    let rendered = match context.get(component, field)? {
        LocatorValue::Fixed(selector) => selector.to_string(),
        LocatorValue::Attribute(name) => name.clone(),
        LocatorValue::Factory(factory) => {
            format!("{} (factory)", factory.build(LocatorFactory::PLACEHOLDER))
        }
    };
    Ok(rendered)
}

/// Open VS Code through WebDriver and read a few workbench parts.
pub async fn probe(config: &ExtestConfig, version: Version) -> Result<String> {
    let locators = session::initialize(&version.to_string())?;

    let capabilities = config
        .code_path
        .as_deref()
        .map(|binary| vscode_capabilities(binary, &config.chrome_args));
    let ctx = PageContext::connect(&config.webdriver_url, capabilities, locators.clone())
        .await
        .context("Failed to open a VS Code session")?;
    info!("Session open, probing workbench");

    let title = TitleBar::new(&ctx).get_title().await;
    let language = StatusBar::new(&ctx).get_current_language().await;
    ctx.close().await?;

    let mut out = format!("VS Code {}", version);
    let _ = write!(out, "\ntitle: {}", title.context("Failed to read window title")?);
    let _ = write!(
        out,
        "\nlanguage: {}",
        language.context("Failed to read status bar language")?
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use extest_locators::builtin_store;

    #[test]
    fn test_versions_lists_base_first() {
        let out = versions(builtin_store().unwrap());
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("1.37.0 (base)"));
        assert!(out.contains("1.76.0 ("));
    }

    #[test]
    fn test_get_renders_each_kind() {
        let store = builtin_store().unwrap();
        let version = Version::new(1, 80, 0);

        assert_eq!(
            get(store, version, "StatusBar", "language", None).unwrap(),
            "By(id, status.editor.mode)"
        );
        assert_eq!(
            get(store, version, "StatusBar", "itemTitle", None).unwrap(),
            "aria-label"
        );
        assert_eq!(
            get(store, version, "Input", "quickPickIndex", Some("3")).unwrap(),
            "By(xpath, .//div[@role='option' and @data-index='3'])"
        );
        assert!(
            get(store, version, "Input", "quickPickIndex", None)
                .unwrap()
                .ends_with("(factory)")
        );
    }

    #[test]
    fn test_get_missing_field_names_it() {
        let err = get(
            builtin_store().unwrap(),
            Version::new(1, 80, 0),
            "StatusBar",
            "nope",
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("StatusBar.nope"));
    }

    #[test]
    fn test_resolve_single_component() {
        let json = resolve(
            builtin_store().unwrap(),
            Version::new(1, 37, 0),
            Some("StatusBar"),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["itemTitle"]["value"], "title");
        assert_eq!(value["language"]["kind"], "fixed");
    }

    #[test]
    fn test_resolve_unknown_component() {
        assert!(resolve(builtin_store().unwrap(), Version::new(1, 37, 0), Some("Nope")).is_err());
    }
}
