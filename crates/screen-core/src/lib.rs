pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod schema;
pub mod screen;
pub mod traits;
pub mod transformer;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use error::{Result, ScreenError};
pub use models::*;
pub use pagination::{fetch_all_pages, get_max_results, Page};
pub use screen::{CreateScreenTransformer, EditScreenTransformer};
pub use traits::MetadataSource;
pub use transformer::{FieldTransformer, SiteContext};
pub use ui::*;
