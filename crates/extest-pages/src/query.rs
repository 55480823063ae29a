//! Translation of locator selectors into the lookups a WebDriver accepts.
//!
//! WebDriver only knows CSS, link text, partial link text and XPath; `fantoccini`
//! exposes CSS, id, link text and XPath. The remaining strategies are
//! rewritten as CSS or XPath.

use extest_locators::{Selector, Strategy};
use fantoccini::Locator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Css,
    Id,
    XPath,
    LinkText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub kind: QueryKind,
    pub value: String,
}

impl Query {
    pub fn locator(&self) -> Locator<'_> {
        match self.kind {
            QueryKind::Css => Locator::Css(&self.value),
            QueryKind::Id => Locator::Id(&self.value),
            QueryKind::XPath => Locator::XPath(&self.value),
            QueryKind::LinkText => Locator::LinkText(&self.value),
        }
    }
}

impl From<&Selector> for Query {
    fn from(selector: &Selector) -> Self {
        let value = selector.value.as_str();
        let (kind, value) = match selector.strategy {
            Strategy::Css => (QueryKind::Css, value.to_string()),
            Strategy::Id => (QueryKind::Id, value.to_string()),
            Strategy::XPath => (QueryKind::XPath, value.to_string()),
            Strategy::LinkText => (QueryKind::LinkText, value.to_string()),
            Strategy::TagName => (QueryKind::Css, value.to_string()),
            Strategy::ClassName => (QueryKind::Css, class_selector(value)),
            Strategy::Name => (QueryKind::Css, format!("[name={}]", quote(value))),
            Strategy::PartialLinkText => (
                QueryKind::XPath,
                format!(".//a[contains(text(), {})]", quote(value)),
            ),
        };
        Self { kind, value }
    }
}

impl From<Selector> for Query {
    fn from(selector: Selector) -> Self {
        Self::from(&selector)
    }
}

/// `"a b"` becomes `".a.b"`.
fn class_selector(classes: &str) -> String {
    classes
        .split_whitespace()
        .map(|class| format!(".{class}"))
        .collect()
}

fn quote(value: &str) -> String {
    if value.contains('\'') {
        format!("\"{value}\"")
    } else {
        format!("'{value}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_strategies() {
        let query = Query::from(Selector::id("workbench.parts.statusbar"));
        assert_eq!(query.kind, QueryKind::Id);
        assert!(matches!(query.locator(), Locator::Id("workbench.parts.statusbar")));

        let query = Query::from(Selector::xpath(".//a[@title='Back']"));
        assert_eq!(query.kind, QueryKind::XPath);
        assert_eq!(query.value, ".//a[@title='Back']");
    }

    #[test]
    fn test_class_name_becomes_css() {
        let query = Query::from(Selector::class_name("window-title"));
        assert_eq!(
            query,
            Query {
                kind: QueryKind::Css,
                value: ".window-title".into()
            }
        );

        let compound = Query::from(Selector::class_name("action-label codicon-close"));
        assert_eq!(compound.value, ".action-label.codicon-close");
    }

    #[test]
    fn test_tag_and_name_become_css() {
        assert_eq!(Query::from(Selector::tag_name("textarea")).value, "textarea");
        assert_eq!(Query::from(Selector::name("q")).value, "[name='q']");
    }

    #[test]
    fn test_partial_link_text_becomes_xpath() {
        let query = Query::from(Selector::partial_link_text("Don't"));
        assert_eq!(query.kind, QueryKind::XPath);
        assert_eq!(query.value, ".//a[contains(text(), \"Don't\")]");
    }
}
