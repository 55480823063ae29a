//! Version-aware locator tables for driving the VS Code workbench over WebDriver.
//!
//! The workbench DOM changes between releases. Locators are kept as one full
//! definition for the oldest supported release plus sparse per-release diffs,
//! and [`VersionedLocatorStore::resolve`] folds them into the set that matches
//! the release under test.

#[macro_use]
mod macros;

pub mod data;
pub mod error;
pub mod locator;
pub mod session;
pub mod set;
pub mod store;
pub mod version;

pub use data::builtin_store;
pub use error::LocatorError;
pub use locator::{LocatorFactory, LocatorKind, LocatorValue, Selector, Strategy};
pub use session::{ActiveLocators, LocatorContext};
pub use set::{ComponentLocators, LocatorSet};
pub use store::VersionedLocatorStore;
pub use version::Version;
