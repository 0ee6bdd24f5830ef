pub mod field;
pub mod issue;
pub mod link;
pub mod meta;
pub mod project;

pub use field::*;
pub use issue::*;
pub use link::*;
pub use meta::*;
pub use project::*;
