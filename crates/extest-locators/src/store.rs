use crate::error::LocatorError;
use crate::set::LocatorSet;
use crate::version::Version;
use std::collections::BTreeMap;
use tracing::debug;

/// A full locator table for the oldest supported release plus the sparse
/// diffs introduced by later releases.
///
/// Diffs are registered while the store is being built. Once the store is
/// shared, [`resolve`](Self::resolve) only ever reads it.
#[derive(Debug, Clone)]
pub struct VersionedLocatorStore {
    base_version: Version,
    base: LocatorSet,
    /// Keyed by version, so iteration is always ascending.
    diffs: BTreeMap<Version, LocatorSet>,
}

impl VersionedLocatorStore {
    pub fn new(base_version: Version, base: LocatorSet) -> Result<Self, LocatorError> {
        base.validate()?;
        Ok(Self {
            base_version,
            base,
            diffs: BTreeMap::new(),
        })
    }

    /// Register the locators that changed in `version`.
    pub fn register(&mut self, version: Version, diff: LocatorSet) -> Result<(), LocatorError> {
        if version <= self.base_version {
            return Err(LocatorError::DiffPredatesBase {
                diff: version,
                base: self.base_version,
            });
        }
        if self.diffs.contains_key(&version) {
            return Err(LocatorError::DuplicateDiffVersion(version));
        }
        diff.validate()?;

        self.diffs.insert(version, diff);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_diff(mut self, version: Version, diff: LocatorSet) -> Result<Self, LocatorError> {
        self.register(version, diff)?;
        Ok(self)
    }

    pub fn base_version(&self) -> Version {
        self.base_version
    }

    pub fn base(&self) -> &LocatorSet {
        &self.base
    }

    /// Versions that carry a diff, ascending.
    pub fn versions(&self) -> impl Iterator<Item = Version> + '_ {
        self.diffs.keys().copied()
    }

    /// Newest version the store knows anything about.
    pub fn latest_version(&self) -> Version {
        self.diffs
            .keys()
            .next_back()
            .copied()
            .unwrap_or(self.base_version)
    }

    pub fn diff(&self, version: &Version) -> Option<&LocatorSet> {
        self.diffs.get(version)
    }

    /// Parse `version` and resolve the locators for it.
    pub fn resolve(&self, version: &str) -> Result<LocatorSet, LocatorError> {
        let version = Version::parse(version)?;
        Ok(self.resolve_version(&version))
    }

    /// The locators that were correct as of `target`.
    ///
    /// Starts from a copy of the base table and lays every diff up to and
    /// including `target` over it in ascending version order, so a later
    /// release's change to a leaf always wins. A target older than the base
    /// gets the base table unchanged.
    pub fn resolve_version(&self, target: &Version) -> LocatorSet {
        let mut resolved = self.base.clone();
        let mut applied = 0;

        for (version, diff) in self.diffs.range(..=target) {
            let written = resolved.overlay(diff);
            debug!("Applied locator diff {} ({} leaves)", version, written);
            applied += 1;
        }

        debug!(
            "Resolved {} locators for VS Code {} from base {} and {} diffs",
            resolved.len(),
            target,
            self.base_version,
            applied
        );
        resolved
    }
}
