use serde::{Serialize, Serializer};
use std::fmt;

/// How a WebDriver should look an element up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Css,
    Id,
    ClassName,
    #[serde(rename = "xpath")]
    XPath,
    TagName,
    Name,
    LinkText,
    PartialLinkText,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Css => "css",
            Strategy::Id => "id",
            Strategy::ClassName => "class name",
            Strategy::XPath => "xpath",
            Strategy::TagName => "tag name",
            Strategy::Name => "name",
            Strategy::LinkText => "link text",
            Strategy::PartialLinkText => "partial link text",
        };
        f.write_str(name)
    }
}

/// A strategy plus the selector string it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selector {
    pub strategy: Strategy,
    pub value: String,
}

impl Selector {
    pub fn new(strategy: Strategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::new(Strategy::Css, value)
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::new(Strategy::Id, value)
    }

    pub fn class_name(value: impl Into<String>) -> Self {
        Self::new(Strategy::ClassName, value)
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(Strategy::XPath, value)
    }

    pub fn tag_name(value: impl Into<String>) -> Self {
        Self::new(Strategy::TagName, value)
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::new(Strategy::Name, value)
    }

    pub fn link_text(value: impl Into<String>) -> Self {
        Self::new(Strategy::LinkText, value)
    }

    pub fn partial_link_text(value: impl Into<String>) -> Self {
        Self::new(Strategy::PartialLinkText, value)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "By({}, {})", self.strategy, self.value)
    }
}

/// A selector parameterized by one runtime argument, e.g. a menu label or a
/// list index.
#[derive(Clone, Copy)]
pub struct LocatorFactory(fn(&str) -> Selector);

impl LocatorFactory {
    /// Placeholder argument used when a factory has to be shown without a
    /// concrete argument.
    pub const PLACEHOLDER: &'static str = "{arg}";

    pub const fn new(build: fn(&str) -> Selector) -> Self {
        Self(build)
    }

    pub fn build(&self, arg: impl fmt::Display) -> Selector {
        (self.0)(&arg.to_string())
    }
}

/// Identity only: two factories are equal when they wrap the same function
/// pointer. Function addresses are not guaranteed unique or stable across
/// codegen units, so this is best-effort and meant for tests and table
/// checks, not for deciding behavior.
impl PartialEq for LocatorFactory {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.0, other.0)
    }
}

impl fmt::Debug for LocatorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocatorFactory")
            .field(&self.build(Self::PLACEHOLDER))
            .finish()
    }
}

impl Serialize for LocatorFactory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.build(Self::PLACEHOLDER).serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatorKind {
    Fixed,
    Attribute,
    Factory,
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocatorKind::Fixed => "fixed",
            LocatorKind::Attribute => "attribute",
            LocatorKind::Factory => "factory",
        };
        f.write_str(name)
    }
}

/// One leaf of a locator table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LocatorValue {
    /// A selector usable as-is.
    Fixed(Selector),
    /// An attribute name (or fixed text) read from an element, e.g. `aria-label`.
    Attribute(String),
    /// A selector built from a runtime argument.
    Factory(LocatorFactory),
}

impl LocatorValue {
    pub fn kind(&self) -> LocatorKind {
        match self {
            LocatorValue::Fixed(_) => LocatorKind::Fixed,
            LocatorValue::Attribute(_) => LocatorKind::Attribute,
            LocatorValue::Factory(_) => LocatorKind::Factory,
        }
    }
}

impl From<Selector> for LocatorValue {
    fn from(selector: Selector) -> Self {
        LocatorValue::Fixed(selector)
    }
}

impl From<LocatorFactory> for LocatorValue {
    fn from(factory: LocatorFactory) -> Self {
        LocatorValue::Factory(factory)
    }
}

// Table authoring helpers.

pub fn css(value: impl Into<String>) -> Selector {
    Selector::css(value)
}

pub fn id(value: impl Into<String>) -> Selector {
    Selector::id(value)
}

pub fn class_name(value: impl Into<String>) -> Selector {
    Selector::class_name(value)
}

pub fn xpath(value: impl Into<String>) -> Selector {
    Selector::xpath(value)
}

pub fn tag_name(value: impl Into<String>) -> Selector {
    Selector::tag_name(value)
}

pub fn attr(name: impl Into<String>) -> LocatorValue {
    LocatorValue::Attribute(name.into())
}

pub fn factory(build: fn(&str) -> Selector) -> LocatorValue {
    LocatorValue::Factory(LocatorFactory::new(build))
}
