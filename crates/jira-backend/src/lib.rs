pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::JiraClient;
pub use convert::epic_fields_from;
pub use error::{JiraError, Result};
pub use models::*;

// Re-export screen-core types for convenience
pub use screen_core::{MetadataSource, ScreenError};
