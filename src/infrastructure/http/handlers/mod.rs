//! HTTP Handlers

mod categories;
mod fallback;
mod resources;

pub use categories::*;
pub use fallback::*;
pub use resources::*;
