use crate::locator::LocatorKind;
use crate::version::Version;
use thiserror::Error;

/// Errors raised while building, resolving or reading locator tables.
///
/// None of these are transient. They mean either the caller passed a bad
/// version string or the tables are out of sync with a page object.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocatorError {
    #[error("Invalid version format: '{0}'")]
    InvalidVersionFormat(String),

    #[error("Component '{component}' is not defined for VS Code {version}")]
    ComponentNotFound { component: String, version: Version },

    #[error("Field '{component}.{field}' is not defined for VS Code {version}")]
    FieldNotFound {
        component: String,
        field: String,
        version: Version,
    },

    #[error("Locators have not been initialized for this session")]
    NotInitialized,

    #[error(
        "Locators already initialized for VS Code {active}, refusing to reinitialize for {requested}"
    )]
    Reinitialization { active: Version, requested: Version },

    #[error("A locator diff is already registered for version {0}")]
    DuplicateDiffVersion(Version),

    #[error("Locator diff for {diff} does not postdate base version {base}")]
    DiffPredatesBase { diff: Version, base: Version },

    #[error("Invalid locator '{component}.{field}': {reason}")]
    InvalidLocator {
        component: String,
        field: String,
        reason: String,
    },

    #[error("Locator '{component}.{field}' is a {found} locator, expected {expected}")]
    KindMismatch {
        component: String,
        field: String,
        expected: LocatorKind,
        found: LocatorKind,
    },
}
