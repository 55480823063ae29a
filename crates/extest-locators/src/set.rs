use crate::error::LocatorError;
use crate::locator::LocatorValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field name -> locator for one workbench component.
pub type ComponentLocators = BTreeMap<String, LocatorValue>;

/// Component name -> field name -> locator.
///
/// Nesting is exactly two levels. The same type is used for full tables and
/// for the sparse per-version diffs layered on top of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocatorSet {
    components: BTreeMap<String, ComponentLocators>,
}

impl LocatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a single leaf, creating the component if needed.
    pub fn insert(
        &mut self,
        component: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<LocatorValue>,
    ) -> Option<LocatorValue> {
        self.components
            .entry(component.into())
            .or_default()
            .insert(field.into(), value.into())
    }

    pub fn component(&self, name: &str) -> Option<&ComponentLocators> {
        self.components.get(name)
    }

    pub fn get(&self, component: &str, field: &str) -> Option<&LocatorValue> {
        self.components.get(component)?.get(field)
    }

    pub fn contains(&self, component: &str, field: &str) -> bool {
        self.get(component, field).is_some()
    }

    pub fn components(&self) -> impl Iterator<Item = (&str, &ComponentLocators)> {
        self.components
            .iter()
            .map(|(name, fields)| (name.as_str(), fields))
    }

    /// Iterate every `(component, field, value)` leaf.
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &str, &LocatorValue)> {
        self.components().flat_map(|(component, fields)| {
            fields
                .iter()
                .map(move |(field, value)| (component, field.as_str(), value))
        })
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.components.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lay `diff` over this set, leaf by leaf.
    ///
    /// Every `(component, field)` in `diff` overwrites the existing leaf or is
    /// added if absent; leaves not mentioned by `diff` are left alone.
    /// Returns the number of leaves written.
    pub fn overlay(&mut self, diff: &LocatorSet) -> usize {
        let mut written = 0;
        for (component, fields) in &diff.components {
            let target = self.components.entry(component.clone()).or_default();
            for (field, value) in fields {
                target.insert(field.clone(), value.clone());
                written += 1;
            }
        }
        written
    }

    /// Reject empty names and empty selector strings.
    pub fn validate(&self) -> Result<(), LocatorError> {
        for (component, fields) in &self.components {
            if component.trim().is_empty() {
                return Err(invalid(component, "", "component name is empty"));
            }
            for (field, value) in fields {
                if field.trim().is_empty() {
                    return Err(invalid(component, field, "field name is empty"));
                }
                match value {
                    LocatorValue::Fixed(selector) if selector.value.trim().is_empty() => {
                        return Err(invalid(component, field, "selector is empty"));
                    }
                    LocatorValue::Attribute(name) if name.trim().is_empty() => {
                        return Err(invalid(component, field, "attribute name is empty"));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

fn invalid(component: &str, field: &str, reason: &str) -> LocatorError {
    LocatorError::InvalidLocator {
        component: component.to_string(),
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{attr, class_name, css, id};

    fn base() -> LocatorSet {
        locator_set! {
            "StatusBar" => {
                "constructor": id("workbench.parts.statusbar"),
                "language": id("status.editor.mode"),
                "itemTitle": attr("title"),
            },
            "TitleBar" => {
                "title": class_name("window-title"),
            },
        }
    }

    #[test]
    fn test_overlay_overwrites_and_adds() {
        let mut set = base();
        let diff = locator_set! {
            "StatusBar" => {
                "itemTitle": attr("aria-label"),
                "bell": id("status.notifications"),
            },
            "Workbench" => {
                "notificationContainer": class_name("notification-toast-container"),
            },
        };

        let written = set.overlay(&diff);

        assert_eq!(written, 3);
        assert_eq!(set.get("StatusBar", "itemTitle"), Some(&attr("aria-label")));
        assert_eq!(set.get("StatusBar", "bell"), Some(&id("status.notifications").into()));
        assert_eq!(
            set.get("StatusBar", "language"),
            Some(&id("status.editor.mode").into()),
            "untouched leaves survive"
        );
        assert!(set.contains("Workbench", "notificationContainer"));
        assert!(set.contains("TitleBar", "title"));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_overlay_with_empty_diff_is_noop() {
        let mut set = base();
        assert_eq!(set.overlay(&LocatorSet::new()), 0);
        assert_eq!(set, base());
    }

    #[test]
    fn test_leaves_iterates_in_name_order() {
        let names: Vec<_> = base()
            .leaves()
            .map(|(component, field, _)| format!("{component}.{field}"))
            .collect();
        assert_eq!(
            names,
            vec![
                "StatusBar.constructor",
                "StatusBar.itemTitle",
                "StatusBar.language",
                "TitleBar.title"
            ]
        );
    }

    #[test]
    fn test_validate() {
        assert!(base().validate().is_ok());

        let mut set = base();
        set.insert("EditorView", "tab", css("  "));
        assert_eq!(
            set.validate(),
            Err(LocatorError::InvalidLocator {
                component: "EditorView".into(),
                field: "tab".into(),
                reason: "selector is empty".into(),
            })
        );

        let mut set = LocatorSet::new();
        set.insert("Input", "", attr("value"));
        assert!(matches!(
            set.validate(),
            Err(LocatorError::InvalidLocator { .. })
        ));

        let mut set = LocatorSet::new();
        set.insert("Input", "label", attr(""));
        assert!(set.validate().is_err());
    }
}
