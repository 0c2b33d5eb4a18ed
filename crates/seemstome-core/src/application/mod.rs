//! Application layer for SeemsToMe.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ConcatService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ConcatService, ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentStore, Scaffolder};

pub use error::ApplicationError;
