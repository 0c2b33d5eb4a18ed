//! Infrastructure adapters for SeemsToMe.
//!
//! This crate implements the ports defined in `seemstome-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod documents;
pub mod scaffolder;

// Re-export commonly used adapters
pub use documents::{LocalDocumentStore, MemoryDocumentStore};
pub use scaffolder::ProcessScaffolder;
