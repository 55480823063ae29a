//! Picking the VS Code version a session targets.

use crate::config::ExtestConfig;
use extest_locators::{LocatorError, Version, VersionedLocatorStore};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Failed to run {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} --version exited with {status}")]
    Failed { path: PathBuf, status: ExitStatus },
    #[error("No version in output: {0:?}")]
    NoVersion(String),
    #[error(transparent)]
    Version(#[from] LocatorError),
}

/// Where the targeted version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Flag,
    Config,
    Detected,
    Latest,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionSource::Flag => "command line",
            VersionSource::Config => "config",
            VersionSource::Detected => "installed binary",
            VersionSource::Latest => "latest known locators",
        };
        f.write_str(name)
    }
}

/// Run `<binary> --version` and parse its first line.
pub async fn detect_code_version(binary: &Path) -> Result<Version, DetectError> {
    let output = Command::new(binary)
        .arg("--version")
        .output()
        .await
        .map_err(|source| DetectError::Spawn {
            path: binary.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(DetectError::Failed {
            path: binary.to_path_buf(),
            status: output.status,
        });
    }

    parse_version_output(&String::from_utf8_lossy(&output.stdout))
}

/// `code --version` prints the version, the commit and the architecture on
/// separate lines.
pub fn parse_version_output(stdout: &str) -> Result<Version, DetectError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| DetectError::NoVersion(stdout.to_string()))?;
    Ok(Version::parse(line)?)
}

/// Choose the version to resolve locators for.
///
/// Precedence: explicit flag, config (including `EXTEST_CODE_VERSION`),
/// detection from `code_path`, then the newest version the store knows.
pub async fn select_version(
    flag: Option<&str>,
    config: &ExtestConfig,
    store: &VersionedLocatorStore,
) -> Result<(Version, VersionSource), DetectError> {
    if let Some(version) = flag {
        return Ok((Version::parse(version)?, VersionSource::Flag));
    }
    if let Some(version) = &config.code_version {
        return Ok((Version::parse(version)?, VersionSource::Config));
    }
    if let Some(path) = &config.code_path {
        match detect_code_version(path).await {
            Ok(version) => {
                info!("Detected VS Code {} at {}", version, path.display());
                return Ok((version, VersionSource::Detected));
            }
            Err(e) => warn!("Could not detect VS Code version: {}", e),
        }
    }
    Ok((store.latest_version(), VersionSource::Latest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_output() {
        let stdout = "1.87.2\n863d2581ecda6849923a2118d93a088b0745d9d6\nx64\n";
        assert_eq!(parse_version_output(stdout).unwrap(), Version::new(1, 87, 2));
    }

    #[test]
    fn test_parse_version_output_skips_blank_lines() {
        assert_eq!(
            parse_version_output("\n  1.88.0-insider\n").unwrap(),
            Version::new(1, 88, 0)
        );
    }

    #[test]
    fn test_parse_version_output_errors() {
        assert!(matches!(
            parse_version_output("  \n"),
            Err(DetectError::NoVersion(_))
        ));
        assert!(matches!(
            parse_version_output("Visual Studio Code\n"),
            Err(DetectError::Version(LocatorError::InvalidVersionFormat(_)))
        ));
    }
}
