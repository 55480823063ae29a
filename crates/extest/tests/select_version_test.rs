use extest::config::ExtestConfig;
use extest::detect::{DetectError, VersionSource, select_version};
use extest_locators::{LocatorError, Version, builtin_store};
use serial_test::serial;
use std::path::PathBuf;

#[tokio::test]
async fn test_flag_wins_over_config() {
    let config = ExtestConfig {
        code_version: Some("1.60.0".into()),
        ..Default::default()
    };
    let (version, source) = select_version(Some("1.85.2"), &config, builtin_store().unwrap())
        .await
        .unwrap();
    assert_eq!(version, Version::new(1, 85, 2));
    assert_eq!(source, VersionSource::Flag);
}

#[tokio::test]
async fn test_config_version_used_without_flag() {
    let config = ExtestConfig {
        code_version: Some("1.60".into()),
        ..Default::default()
    };
    let (version, source) = select_version(None, &config, builtin_store().unwrap())
        .await
        .unwrap();
    assert_eq!(version, Version::new(1, 60, 0));
    assert_eq!(source, VersionSource::Config);
}

#[tokio::test]
#[serial]
async fn test_falls_back_to_latest_when_detection_fails() {
    let store = builtin_store().unwrap();
    let config = ExtestConfig {
        code_path: Some(PathBuf::from("/nonexistent/bin/code")),
        ..Default::default()
    };
    let (version, source) = select_version(None, &config, store).await.unwrap();
    assert_eq!(version, store.latest_version());
    assert_eq!(source, VersionSource::Latest);
}

#[tokio::test]
async fn test_invalid_flag_is_an_error() {
    let config = ExtestConfig::default();
    let result = select_version(Some("latest"), &config, builtin_store().unwrap()).await;
    assert!(matches!(
        result,
        Err(DetectError::Version(LocatorError::InvalidVersionFormat(_)))
    ));
}

#[cfg(unix)]
#[tokio::test]
#[serial]
async fn test_detects_version_from_binary() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let binary = dir.path().join("code");
    std::fs::write(&binary, "#!/bin/sh\necho 1.76.2\necho abcdef\necho x64\n").unwrap();
    std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755)).unwrap();

    let config = ExtestConfig {
        code_path: Some(binary),
        ..Default::default()
    };
    let (version, source) = select_version(None, &config, builtin_store().unwrap())
        .await
        .unwrap();
    assert_eq!(version, Version::new(1, 76, 2));
    assert_eq!(source, VersionSource::Detected);
}
