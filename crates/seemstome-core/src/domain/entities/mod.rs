pub mod document;
pub mod request;
pub mod response;

pub use crate::domain::DomainError;
pub use document::{ConcatReport, DocumentOutcome, DocumentRecord};
pub use request::ScaffoldRequest;
pub use response::{ScaffoldResponse, ScaffoldStatus};
