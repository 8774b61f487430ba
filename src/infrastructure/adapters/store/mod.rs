//! Resource Store Adapters - 内存/文件与远程 HTTP 实现

mod factory;
mod http_store;
mod memory_store;

pub use factory::build_store;
pub use http_store::{HttpResourceStore, HttpResourceStoreConfig};
pub use memory_store::InMemoryResourceStore;
