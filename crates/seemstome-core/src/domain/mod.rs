// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for SeemsToMe.
//!
//! Pure data and rules with no process or filesystem access:
//!
//! - **Scaffold bridge**: [`ComponentKind`], [`ScaffoldRequest`],
//!   [`ScaffoldResponse`] and the conservative [`ScaffoldStatus`] rule.
//! - **Doc concatenator**: [`DocumentRecord`], [`DocumentFilter`], the
//!   [`DocumentBlock`] output format and the [`ConcatReport`].
//!
//! All I/O is reached through the ports in `crate::application::ports`.
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    document::{
        ConcatReport, DEFAULT_EXTENSIONS, DocumentBlock, DocumentFilter, DocumentOutcome,
        DocumentRecord, DocumentStatus, relative_label,
    },
    request::ScaffoldRequest,
    response::{OVERALL_STATUS_FIELD, SUCCESS_MARKER, ScaffoldResponse, ScaffoldStatus},
};

pub use error::DomainError;

pub use value_objects::ComponentKind;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-entity behaviour
    // ========================================================================

    #[test]
    fn echoed_request_is_a_response_without_status() {
        // A scaffolder that simply echoes its payload must never be read as
        // a success.
        let request = ScaffoldRequest::new("echo", "agent".parse().unwrap(), "out").unwrap();
        let response = ScaffoldResponse::parse(&request.to_payload().unwrap()).unwrap();

        assert_eq!(response.value()["sddComponentType"], "AGENT");
        assert_eq!(response.status(), ScaffoldStatus::Issues);
    }

    #[test]
    fn every_kind_round_trips_through_its_wire_name() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.as_str().parse::<ComponentKind>().unwrap(), kind);
        }
    }
}
