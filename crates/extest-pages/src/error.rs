use extest_locators::LocatorError;
use fantoccini::error::{CmdError, NewSessionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] CmdError),

    #[error("Failed to connect to WebDriver at {url}: {source}")]
    Session {
        url: String,
        #[source]
        source: NewSessionError,
    },

    #[error("Element has no '{0}' attribute")]
    MissingAttribute(String),
}
