//! The locator set in effect for one automation session.
//!
//! A session targets exactly one VS Code release. [`LocatorContext`] holds the
//! resolved, immutable locators for that release and is what page objects are
//! handed. [`ActiveLocators`] is a write-once slot for code that wants a single
//! process-wide context, and the free functions in this module wrap a static
//! slot backed by the built-in tables.
//!
//! Precondition: the slot must be initialized before any page object is
//! constructed. Lookups made earlier fail with
//! [`LocatorError::NotInitialized`].

use crate::data::builtin_store;
use crate::error::LocatorError;
use crate::locator::{LocatorFactory, LocatorKind, LocatorValue, Selector};
use crate::set::{ComponentLocators, LocatorSet};
use crate::store::VersionedLocatorStore;
use crate::version::Version;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Resolved locators for one VS Code version.
#[derive(Debug, Clone)]
pub struct LocatorContext {
    version: Version,
    locators: Arc<LocatorSet>,
}

impl LocatorContext {
    pub fn new(store: &VersionedLocatorStore, version: &str) -> Result<Self, LocatorError> {
        let version = Version::parse(version)?;
        Ok(Self::for_version(store, version))
    }

    pub fn for_version(store: &VersionedLocatorStore, version: Version) -> Self {
        Self {
            version,
            locators: Arc::new(store.resolve_version(&version)),
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn locators(&self) -> &LocatorSet {
        &self.locators
    }

    pub fn component(&self, component: &str) -> Result<&ComponentLocators, LocatorError> {
        self.locators
            .component(component)
            .ok_or_else(|| LocatorError::ComponentNotFound {
                component: component.to_string(),
                version: self.version,
            })
    }

    pub fn get(&self, component: &str, field: &str) -> Result<&LocatorValue, LocatorError> {
        self.component(component)?
            .get(field)
            .ok_or_else(|| LocatorError::FieldNotFound {
                component: component.to_string(),
                field: field.to_string(),
                version: self.version,
            })
    }

    pub fn selector(&self, component: &str, field: &str) -> Result<&Selector, LocatorError> {
        match self.get(component, field)? {
            LocatorValue::Fixed(selector) => Ok(selector),
            other => Err(mismatch(component, field, LocatorKind::Fixed, other)),
        }
    }

    pub fn attribute(&self, component: &str, field: &str) -> Result<&str, LocatorError> {
        match self.get(component, field)? {
            LocatorValue::Attribute(name) => Ok(name),
            other => Err(mismatch(component, field, LocatorKind::Attribute, other)),
        }
    }

    pub fn factory(&self, component: &str, field: &str) -> Result<LocatorFactory, LocatorError> {
        match self.get(component, field)? {
            LocatorValue::Factory(factory) => Ok(*factory),
            other => Err(mismatch(component, field, LocatorKind::Factory, other)),
        }
    }

    /// Look up a factory locator and invoke it with `arg`.
    pub fn build(
        &self,
        component: &str,
        field: &str,
        arg: impl fmt::Display,
    ) -> Result<Selector, LocatorError> {
        Ok(self.factory(component, field)?.build(arg))
    }
}

fn mismatch(
    component: &str,
    field: &str,
    expected: LocatorKind,
    found: &LocatorValue,
) -> LocatorError {
    LocatorError::KindMismatch {
        component: component.to_string(),
        field: field.to_string(),
        expected,
        found: found.kind(),
    }
}

/// A write-once holder for the session's [`LocatorContext`].
#[derive(Debug, Default)]
pub struct ActiveLocators {
    slot: OnceLock<LocatorContext>,
}

impl ActiveLocators {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Resolve `version` against `store` and make it the active set.
    ///
    /// Calling this again with the same version returns the existing context.
    /// A different version is refused: callers may already hold locators from
    /// the first one.
    pub fn initialize(
        &self,
        store: &VersionedLocatorStore,
        version: &str,
    ) -> Result<&LocatorContext, LocatorError> {
        let requested = Version::parse(version)?;

        if let Some(active) = self.slot.get() {
            return Self::check_same(active, requested);
        }

        let context = self
            .slot
            .get_or_init(|| LocatorContext::for_version(store, requested));
        if context.version == requested {
            info!(
                "Initialized locators for VS Code {} ({} entries)",
                requested,
                context.locators.len()
            );
        }
        Self::check_same(context, requested)
    }

    fn check_same(
        active: &LocatorContext,
        requested: Version,
    ) -> Result<&LocatorContext, LocatorError> {
        if active.version == requested {
            Ok(active)
        } else {
            Err(LocatorError::Reinitialization {
                active: active.version,
                requested,
            })
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn context(&self) -> Result<&LocatorContext, LocatorError> {
        self.slot.get().ok_or(LocatorError::NotInitialized)
    }

    pub fn get(&self, component: &str, field: &str) -> Result<&LocatorValue, LocatorError> {
        self.context()?.get(component, field)
    }
}

static ACTIVE: ActiveLocators = ActiveLocators::new();

/// Initialize the process-wide locators from the built-in tables.
pub fn initialize(version: &str) -> Result<&'static LocatorContext, LocatorError> {
    ACTIVE.initialize(builtin_store()?, version)
}

/// Read a leaf from the process-wide locators.
pub fn get(component: &str, field: &str) -> Result<&'static LocatorValue, LocatorError> {
    ACTIVE.get(component, field)
}

/// The process-wide context, if initialized.
pub fn active() -> Result<&'static LocatorContext, LocatorError> {
    ACTIVE.context()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{attr, factory, id, xpath};

    fn title_item(label: &str) -> Selector {
        xpath(format!(".//div[@aria-label='{label}']"))
    }

    fn store() -> VersionedLocatorStore {
        let base = locator_set! {
            "StatusBar" => {
                "language": id("status.editor.mode"),
                "itemTitle": attr("title"),
            },
            "TitleBar" => {
                "itemConstructor": factory(title_item),
            },
        };
        VersionedLocatorStore::new(Version::new(1, 37, 0), base)
            .and_then(|s| {
                s.with_diff(
                    Version::new(1, 58, 0),
                    locator_set! { "StatusBar" => { "itemTitle": attr("aria-label") } },
                )
            })
            .unwrap()
    }

    #[test]
    fn test_get_before_initialize() {
        let active = ActiveLocators::new();
        assert!(!active.is_initialized());
        assert_eq!(
            active.get("StatusBar", "language"),
            Err(LocatorError::NotInitialized)
        );
        assert!(matches!(active.context(), Err(LocatorError::NotInitialized)));
    }

    #[test]
    fn test_initialize_then_get_matches_resolve() {
        let store = store();
        let active = ActiveLocators::new();
        active.initialize(&store, "1.60.0").unwrap();

        let resolved = store.resolve("1.60.0").unwrap();
        for (component, field, value) in resolved.leaves() {
            assert_eq!(active.get(component, field).unwrap(), value);
        }
    }

    #[test]
    fn test_initialize_same_version_is_idempotent() {
        let store = store();
        let active = ActiveLocators::new();
        let first = active.initialize(&store, "1.60.0").unwrap().clone();
        let second = active.initialize(&store, "1.60").unwrap();
        assert_eq!(first.version(), second.version());
        assert!(Arc::ptr_eq(&first.locators, &second.locators));
    }

    #[test]
    fn test_reinitialize_with_other_version_fails() {
        let store = store();
        let active = ActiveLocators::new();
        active.initialize(&store, "1.60.0").unwrap();

        assert_eq!(
            active.initialize(&store, "1.40.0").unwrap_err(),
            LocatorError::Reinitialization {
                active: Version::new(1, 60, 0),
                requested: Version::new(1, 40, 0),
            }
        );
        // The first context stays in place.
        assert_eq!(
            active.get("StatusBar", "itemTitle").unwrap(),
            &attr("aria-label")
        );
    }

    #[test]
    fn test_initialize_rejects_bad_version() {
        let active = ActiveLocators::new();
        assert_eq!(
            active.initialize(&store(), "latest").unwrap_err(),
            LocatorError::InvalidVersionFormat("latest".into())
        );
        assert!(!active.is_initialized());
    }

    #[test]
    fn test_missing_component_and_field() {
        let context = LocatorContext::new(&store(), "1.60.0").unwrap();
        assert_eq!(
            context.get("Terminal", "constructor").unwrap_err(),
            LocatorError::ComponentNotFound {
                component: "Terminal".into(),
                version: Version::new(1, 60, 0),
            }
        );
        assert_eq!(
            context.get("StatusBar", "encoding").unwrap_err(),
            LocatorError::FieldNotFound {
                component: "StatusBar".into(),
                field: "encoding".into(),
                version: Version::new(1, 60, 0),
            }
        );
    }

    #[test]
    fn test_typed_accessors() {
        let context = LocatorContext::new(&store(), "1.60.0").unwrap();

        assert_eq!(
            context.selector("StatusBar", "language").unwrap(),
            &id("status.editor.mode")
        );
        assert_eq!(context.attribute("StatusBar", "itemTitle").unwrap(), "aria-label");
        assert_eq!(
            context.build("TitleBar", "itemConstructor", "File").unwrap(),
            title_item("File")
        );

        assert_eq!(
            context.selector("StatusBar", "itemTitle").unwrap_err(),
            LocatorError::KindMismatch {
                component: "StatusBar".into(),
                field: "itemTitle".into(),
                expected: LocatorKind::Fixed,
                found: LocatorKind::Attribute,
            }
        );
        assert!(context.factory("StatusBar", "language").is_err());
    }

    #[test]
    fn test_contexts_for_different_versions_coexist() {
        let store = store();
        let old = LocatorContext::new(&store, "1.50.0").unwrap();
        let new = LocatorContext::new(&store, "1.60.0").unwrap();
        assert_eq!(old.attribute("StatusBar", "itemTitle").unwrap(), "title");
        assert_eq!(new.attribute("StatusBar", "itemTitle").unwrap(), "aria-label");
    }
}
