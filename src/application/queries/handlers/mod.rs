//! Query Handlers 实现

mod resource_handlers;

pub use resource_handlers::*;
