use crate::error::PageError;
use crate::page::{PageContext, PageObject};
use crate::pages::notifications::NotificationsCenter;

pub struct StatusBar {
    ctx: PageContext,
}

impl StatusBar {
    pub fn new(ctx: &PageContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    async fn part_text(&self, field: &str) -> Result<String, PageError> {
        let root = self.element().await?;
        let part = self.ctx.find_in(&root, "StatusBar", field).await?;
        Ok(part.text().await?)
    }

    /// Language mode of the active editor.
    pub async fn get_current_language(&self) -> Result<String, PageError> {
        self.part_text("language").await
    }

    pub async fn get_current_encoding(&self) -> Result<String, PageError> {
        self.part_text("encoding").await
    }

    pub async fn get_current_indentation(&self) -> Result<String, PageError> {
        self.part_text("indent").await
    }

    /// Titles of every status bar item.
    pub async fn get_item_titles(&self) -> Result<Vec<String>, PageError> {
        let root = self.element().await?;
        let mut titles = Vec::new();
        for item in self.ctx.find_all_in(&root, "StatusBar", "item").await? {
            match self.ctx.read_attribute(&item, "StatusBar", "itemTitle").await {
                Ok(title) => titles.push(title),
                Err(PageError::MissingAttribute(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(titles)
    }

    pub async fn open_notifications_center(&self) -> Result<NotificationsCenter, PageError> {
        let root = self.element().await?;
        self.ctx.find_in(&root, "StatusBar", "bell").await?.click().await?;
        Ok(NotificationsCenter::new(&self.ctx))
    }
}

impl PageObject for StatusBar {
    const COMPONENT: &'static str = "StatusBar";

    fn context(&self) -> &PageContext {
        &self.ctx
    }
}
