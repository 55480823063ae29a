use extest::config::loader::CODE_VERSION_ENV;
use extest::config::{ConfigLoader, ExtestConfig};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_values() {
    let config = ExtestConfig::default();
    assert_eq!(config.webdriver_url, "http://localhost:9515");
    assert!(config.code_version.is_none());
    assert!(config.code_path.is_none());
    assert!(config.chrome_args.contains(&"--disable-extensions".to_string()));
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
code_version: "1.85.1"
code_path: /opt/VSCode-linux-x64/code
webdriver_url: http://127.0.0.1:4444
chrome_args:
  - "--verbose"
"#
    )
    .unwrap();

    let config = ConfigLoader::load_from(file.path())
        .await
        .expect("Failed to load config from file");

    assert_eq!(config.code_version.as_deref(), Some("1.85.1"));
    assert_eq!(
        config.code_path.as_deref(),
        Some(std::path::Path::new("/opt/VSCode-linux-x64/code"))
    );
    assert_eq!(config.webdriver_url, "http://127.0.0.1:4444");
    assert_eq!(config.chrome_args, vec!["--verbose".to_string()]);
}

#[tokio::test]
async fn test_load_from_partial_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "code_version: \"1.60\"").unwrap();

    let config = ConfigLoader::load_from(file.path())
        .await
        .expect("Should load partial config");

    assert_eq!(config.code_version.as_deref(), Some("1.60"));
    assert_eq!(config.webdriver_url, "http://localhost:9515");
    assert!(!config.chrome_args.is_empty());
}

#[tokio::test]
async fn test_load_from_empty_file() {
    let file = NamedTempFile::new().unwrap();
    let config = ConfigLoader::load_from(file.path()).await.unwrap();
    assert_eq!(config.webdriver_url, "http://localhost:9515");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_load_from_nonexistent_file() {
    let result =
        ConfigLoader::load_from(std::path::Path::new("/nonexistent/path/extest.yaml")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_from_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{invalid yaml: [unclosed").unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_with_type_mismatch() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "chrome_args: \"not a list\"").unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(result.is_err(), "Should fail on type mismatch");
}

// ============================================================================
// Environment Overrides
// ============================================================================

#[tokio::test]
#[serial]
async fn test_env_overrides_code_version() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "code_version: \"1.60.0\"").unwrap();

    // SAFETY: serialized with every other test that touches the environment.
    unsafe { std::env::set_var(CODE_VERSION_ENV, "1.87.0") };
    let config = ConfigLoader::load(file.path()).await.unwrap();
    unsafe { std::env::remove_var(CODE_VERSION_ENV) };

    assert_eq!(config.code_version.as_deref(), Some("1.87.0"));
}

#[tokio::test]
#[serial]
async fn test_blank_env_is_ignored() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "code_version: \"1.60.0\"").unwrap();

    // SAFETY: serialized with every other test that touches the environment.
    unsafe { std::env::set_var(CODE_VERSION_ENV, "  ") };
    let config = ConfigLoader::load(file.path()).await.unwrap();
    unsafe { std::env::remove_var(CODE_VERSION_ENV) };

    assert_eq!(config.code_version.as_deref(), Some("1.60.0"));
}
