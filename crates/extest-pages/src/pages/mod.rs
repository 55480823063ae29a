//! Page objects for the workbench parts the CLI and tests touch.
//!
//! Each one only knows component and field names; the selectors come from
//! the [`PageContext`](crate::PageContext) it was built with.

pub mod input;
pub mod notifications;
pub mod status_bar;
pub mod title_bar;

pub use input::InputBox;
pub use notifications::{Notification, NotificationsCenter};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
