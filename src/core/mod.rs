pub mod client;
pub mod endpoint;

pub use crate::domain::model::TransliteratedItem;
pub use crate::domain::ports::{ConfigProvider, Transliterator};
pub use crate::utils::error::Result;
