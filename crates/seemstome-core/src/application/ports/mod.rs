//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `seemstome-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Scaffolder`: the external scaffolding capability
//!   - `DocumentStore`: document discovery, reading, and output creation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DocumentStore, Scaffolder};

#[cfg(test)]
pub use output::{MockDocumentStore, MockScaffolder};
