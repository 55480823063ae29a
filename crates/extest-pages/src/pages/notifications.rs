use crate::error::PageError;
use crate::page::{PageContext, PageObject};
use fantoccini::elements::Element;

/// A single notification row, either a toast or an entry in the center.
pub struct Notification {
    ctx: PageContext,
    element: Element,
}

impl Notification {
    pub async fn get_message(&self) -> Result<String, PageError> {
        let message = self
            .ctx
            .find_in(&self.element, "Notification", "message")
            .await?;
        Ok(message.text().await?)
    }

    pub async fn get_source(&self) -> Result<String, PageError> {
        let source = self
            .ctx
            .find_in(&self.element, "Notification", "source")
            .await?;
        Ok(source.text().await?)
    }

    pub async fn dismiss(&self) -> Result<(), PageError> {
        self.ctx
            .find_in(&self.element, "Notification", "dismiss")
            .await?
            .click()
            .await?;
        Ok(())
    }
}

pub struct NotificationsCenter {
    ctx: PageContext,
}

impl NotificationsCenter {
    pub fn new(ctx: &PageContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn get_notifications(&self) -> Result<Vec<Notification>, PageError> {
        let root = self.element().await?;
        let rows = self
            .ctx
            .find_all_in(&root, "NotificationsCenter", "row")
            .await?;
        Ok(rows
            .into_iter()
            .map(|element| Notification {
                ctx: self.ctx.clone(),
                element,
            })
            .collect())
    }

    pub async fn clear_all(&self) -> Result<(), PageError> {
        let root = self.element().await?;
        self.ctx
            .find_in(&root, "NotificationsCenter", "clear")
            .await?
            .click()
            .await?;
        Ok(())
    }

    pub async fn close(&self) -> Result<(), PageError> {
        let root = self.element().await?;
        self.ctx
            .find_in(&root, "NotificationsCenter", "close")
            .await?
            .click()
            .await?;
        Ok(())
    }
}

impl PageObject for NotificationsCenter {
    const COMPONENT: &'static str = "NotificationsCenter";

    fn context(&self) -> &PageContext {
        &self.ctx
    }
}

/// Toasts shown in the bottom right corner of the workbench.
pub async fn toast_notifications(ctx: &PageContext) -> Result<Vec<Notification>, PageError> {
    let container = ctx.find("Workbench", "notificationContainer").await?;
    let rows = ctx
        .find_all_in(&container, "Workbench", "notificationItem")
        .await?;
    Ok(rows
        .into_iter()
        .map(|element| Notification {
            ctx: ctx.clone(),
            element,
        })
        .collect())
}
