use crate::error::PageError;
use crate::page::{PageContext, PageObject};
use fantoccini::elements::Element;

pub struct TitleBar {
    ctx: PageContext,
}

impl TitleBar {
    pub fn new(ctx: &PageContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    /// Window title, e.g. `Welcome - Visual Studio Code`.
    pub async fn get_title(&self) -> Result<String, PageError> {
        let root = self.element().await?;
        let title = self.ctx.find_in(&root, "TitleBar", "title").await?;
        Ok(title.text().await?)
    }

    /// Top level menu entry with the given label.
    pub async fn get_item(&self, label: &str) -> Result<Element, PageError> {
        let root = self.element().await?;
        self.ctx
            .find_with(&root, "TitleBar", "itemConstructor", label)
            .await
    }

    pub async fn get_item_labels(&self) -> Result<Vec<String>, PageError> {
        let root = self.element().await?;
        let mut labels = Vec::new();
        for item in self.ctx.find_all_in(&root, "TitleBar", "itemElement").await? {
            labels.push(self.ctx.read_attribute(&item, "TitleBar", "itemLabel").await?);
        }
        Ok(labels)
    }

    pub async fn select(&self, label: &str) -> Result<(), PageError> {
        self.get_item(label).await?.click().await?;
        Ok(())
    }
}

impl PageObject for TitleBar {
    const COMPONENT: &'static str = "TitleBar";

    fn context(&self) -> &PageContext {
        &self.ctx
    }
}
