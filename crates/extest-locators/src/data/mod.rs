//! Built-in workbench locators.
//!
//! `base` holds the complete table for the oldest supported release. Each
//! later release that moved something gets its own function in `diffs`,
//! listed in [`diffs::DIFFS`].

mod base;
mod diffs;

use crate::error::LocatorError;
use crate::store::VersionedLocatorStore;
use crate::version::Version;
use std::sync::LazyLock;

/// Oldest VS Code release the built-in tables describe in full.
pub const BASE_VERSION: Version = Version::new(1, 37, 0);

static BUILTIN: LazyLock<Result<VersionedLocatorStore, LocatorError>> = LazyLock::new(build);

/// The store holding the built-in tables, built on first use.
pub fn builtin_store() -> Result<&'static VersionedLocatorStore, LocatorError> {
    BUILTIN.as_ref().map_err(Clone::clone)
}

fn build() -> Result<VersionedLocatorStore, LocatorError> {
    let mut store = VersionedLocatorStore::new(BASE_VERSION, base::locators())?;
    for (version, diff) in diffs::DIFFS {
        store.register(Version::parse(version)?, diff())?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_well_formed() {
        let store = builtin_store().unwrap();
        assert_eq!(store.base_version(), BASE_VERSION);
        assert_eq!(store.versions().count(), diffs::DIFFS.len());
    }

    #[test]
    fn test_diff_table_is_listed_in_ascending_order() {
        let versions: Vec<Version> = diffs::DIFFS
            .iter()
            .map(|(version, _)| Version::parse(version).unwrap())
            .collect();
        assert!(versions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_every_diff_leaf_changes_something() {
        let store = builtin_store().unwrap();
        let mut previous = store.base_version();
        for version in store.versions() {
            let before = store.resolve_version(&previous);
            for (component, field, value) in store.diff(&version).unwrap().leaves() {
                assert_ne!(
                    before.get(component, field),
                    Some(value),
                    "{version} re-sets {component}.{field} to the value it had at {previous}"
                );
            }
            previous = version;
        }
    }
}
