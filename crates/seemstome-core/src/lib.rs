//! Domain and application layers of SeemsToMe.
//!
//! Two use cases live here: forwarding a component request to an external
//! scaffolder, and concatenating a documentation tree into one file.
//!
//! ## Layers
//!
//! ```text
//!   seemstome-cli ──► application services ──► ports (traits)
//!                     ScaffoldService            Scaffolder
//!                     ConcatService              DocumentStore
//!                            │                        ▲
//!                            ▼                        │ implemented in
//!                         domain               seemstome-adapters
//!          ComponentKind, ScaffoldRequest,     ProcessScaffolder,
//!          ScaffoldResponse, DocumentFilter    LocalDocumentStore
//! ```
//!
//! The domain layer has no I/O. Services only reach the outside world
//! through the two ports.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seemstome_core::prelude::*;
//!
//! // 1. Inject an adapter
//! let service = ScaffoldService::new(Box::new(scaffolder));
//!
//! // 2. Run the use case
//! let kind: ComponentKind = "agent".parse()?;
//! let report = service.scaffold("myAgent", kind, "src/agents")?;
//! println!("{}", report.response.to_pretty());
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// Everything a driving adapter usually needs.
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ConcatService, ScaffoldReport, ScaffoldService,
        ports::{DocumentStore, Scaffolder},
    };
    pub use crate::domain::{
        ComponentKind, ConcatReport, DocumentFilter, DocumentRecord, DomainError,
        ScaffoldRequest, ScaffoldResponse, ScaffoldStatus,
    };
    pub use crate::error::{ErrorCategory, SeemsError, SeemsResult};
}
