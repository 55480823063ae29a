pub mod error;
pub mod page;
pub mod pages;
pub mod query;
pub mod webdriver;

pub use error::PageError;
pub use page::{PageContext, PageObject};
pub use query::Query;
