//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a component" or "concatenate docs".

pub mod concat_service;
pub mod scaffold_service;

pub use concat_service::ConcatService;
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
