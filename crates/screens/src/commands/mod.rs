pub mod classify;
pub mod create;
pub mod edit;
pub mod site;
