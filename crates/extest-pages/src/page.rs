use crate::error::PageError;
use crate::query::Query;
use crate::webdriver::WebDriverClient;
use async_trait::async_trait;
use extest_locators::{LocatorContext, Selector};
use fantoccini::Client;
use fantoccini::elements::Element;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// A WebDriver session plus the locators resolved for the VS Code version it
/// drives. Page objects are built from this.
#[derive(Clone)]
pub struct PageContext {
    driver: WebDriverClient,
    locators: LocatorContext,
}

impl PageContext {
    pub fn new(client: Client, locators: LocatorContext) -> Self {
        Self {
            driver: WebDriverClient { client },
            locators,
        }
    }

    /// Open a WebDriver session and pair it with `locators`.
    pub async fn connect(
        url: &str,
        capabilities: Option<Map<String, Value>>,
        locators: LocatorContext,
    ) -> Result<Self, PageError> {
        let driver = WebDriverClient::connect(url, capabilities).await?;
        Ok(Self { driver, locators })
    }

    pub fn client(&self) -> &Client {
        &self.driver.client
    }

    pub fn locators(&self) -> &LocatorContext {
        &self.locators
    }

    pub async fn close(self) -> Result<(), PageError> {
        self.driver.close().await
    }

    /// Find the element for a fixed locator anywhere on the page.
    pub async fn find(&self, component: &str, field: &str) -> Result<Element, PageError> {
        let query = self.query(component, field)?;
        Ok(self.client().find(query.locator()).await?)
    }

    pub async fn find_all(&self, component: &str, field: &str) -> Result<Vec<Element>, PageError> {
        let query = self.query(component, field)?;
        Ok(self.client().find_all(query.locator()).await?)
    }

    /// Find the element for a fixed locator below `parent`.
    pub async fn find_in(
        &self,
        parent: &Element,
        component: &str,
        field: &str,
    ) -> Result<Element, PageError> {
        let query = self.query(component, field)?;
        Ok(parent.find(query.locator()).await?)
    }

    pub async fn find_all_in(
        &self,
        parent: &Element,
        component: &str,
        field: &str,
    ) -> Result<Vec<Element>, PageError> {
        let query = self.query(component, field)?;
        Ok(parent.find_all(query.locator()).await?)
    }

    /// Build a factory locator with `arg` and find the result below `parent`.
    pub async fn find_with(
        &self,
        parent: &Element,
        component: &str,
        field: &str,
        arg: impl fmt::Display + Send,
    ) -> Result<Element, PageError> {
        let selector = self.locators.build(component, field, arg)?;
        debug!("{}.{} -> {}", component, field, selector);
        let query = Query::from(&selector);
        Ok(parent.find(query.locator()).await?)
    }

    /// Read the attribute named by an attribute locator from `element`.
    pub async fn read_attribute(
        &self,
        element: &Element,
        component: &str,
        field: &str,
    ) -> Result<String, PageError> {
        let name = self.locators.attribute(component, field)?;
        element
            .attr(name)
            .await?
            .ok_or_else(|| PageError::MissingAttribute(name.to_string()))
    }

    fn query(&self, component: &str, field: &str) -> Result<Query, PageError> {
        let selector: &Selector = self.locators.selector(component, field)?;
        debug!("{}.{} -> {}", component, field, selector);
        Ok(Query::from(selector))
    }
}

/// A region of the workbench whose root is the `constructor` locator of
/// [`COMPONENT`](Self::COMPONENT).
#[async_trait]
pub trait PageObject: Send + Sync {
    const COMPONENT: &'static str;

    fn context(&self) -> &PageContext;

    async fn element(&self) -> Result<Element, PageError> {
        self.context().find(Self::COMPONENT, "constructor").await
    }

    async fn is_displayed(&self) -> Result<bool, PageError> {
        Ok(self.element().await?.is_displayed().await?)
    }
}
