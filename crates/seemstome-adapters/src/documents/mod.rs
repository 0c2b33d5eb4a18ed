//! Document store adapters.

mod local;
mod memory;

pub use local::LocalDocumentStore;
pub use memory::MemoryDocumentStore;
