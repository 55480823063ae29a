use crate::error::PageError;
use crate::page::{PageContext, PageObject};
use fantoccini::elements::Element;
use tracing::debug;

/// The quick input widget (command palette, quick open, extension prompts).
pub struct InputBox {
    ctx: PageContext,
}

impl InputBox {
    pub fn new(ctx: &PageContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    async fn input_field(&self) -> Result<Element, PageError> {
        let root = self.element().await?;
        let input_box = self.ctx.find_in(&root, "Input", "inputBox").await?;
        self.ctx.find_in(&input_box, "Input", "input").await
    }

    pub async fn get_text(&self) -> Result<String, PageError> {
        let field = self.input_field().await?;
        Ok(field.prop("value").await?.unwrap_or_default())
    }

    pub async fn set_text(&self, text: &str) -> Result<(), PageError> {
        let field = self.input_field().await?;
        field.clear().await?;
        field.send_keys(text).await?;
        Ok(())
    }

    pub async fn get_title(&self) -> Result<String, PageError> {
        let root = self.element().await?;
        let title = self.ctx.find_in(&root, "Input", "title").await?;
        Ok(title.text().await?)
    }

    /// Quick pick row at `index` (0-based, as rendered in `data-index`).
    pub async fn get_quick_pick(&self, index: usize) -> Result<Element, PageError> {
        let root = self.element().await?;
        let list = self.ctx.find_in(&root, "Input", "quickList").await?;
        self.ctx
            .find_with(&list, "Input", "quickPickIndex", index)
            .await
    }

    pub async fn select_quick_pick(&self, index: usize) -> Result<(), PageError> {
        debug!("Selecting quick pick {}", index);
        self.get_quick_pick(index).await?.click().await?;
        Ok(())
    }

    pub async fn get_quick_pick_labels(&self) -> Result<Vec<String>, PageError> {
        let root = self.element().await?;
        let list = self.ctx.find_in(&root, "Input", "quickList").await?;
        let mut labels = Vec::new();
        for label in self
            .ctx
            .find_all_in(&list, "Input", "quickPickLabel")
            .await?
        {
            labels.push(label.text().await?);
        }
        Ok(labels)
    }
}

impl PageObject for InputBox {
    const COMPONENT: &'static str = "InputBox";

    fn context(&self) -> &PageContext {
        &self.ctx
    }
}
