//! Application services built on the provider port.

mod models;
mod rewrite;

pub use models::{ModelDescriptor, ModelLister};
pub use rewrite::RewriteService;
