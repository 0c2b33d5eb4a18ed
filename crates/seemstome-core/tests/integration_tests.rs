//! Integration tests for seemstome-core through its public API.

use std::sync::Mutex;

use seemstome_core::prelude::*;
use serde_json::{Value, json};

/// Scaffolder that records every payload and answers with a fixed response.
struct RecordingScaffolder {
    reply: Value,
    payloads: Mutex<Vec<String>>,
}

impl RecordingScaffolder {
    fn replying(reply: Value) -> Self {
        Self {
            reply,
            payloads: Mutex::new(Vec::new()),
        }
    }
}

impl Scaffolder for &'static RecordingScaffolder {
    fn scaffold(&self, request: &ScaffoldRequest) -> SeemsResult<ScaffoldResponse> {
        let payload = request
            .to_payload()
            .map_err(|e| ApplicationError::Serialization {
                reason: e.to_string(),
            })?;
        self.payloads.lock().unwrap().push(payload);
        Ok(ScaffoldResponse::new(self.reply.clone()))
    }

    fn describe(&self) -> String {
        "recording".into()
    }
}

fn leak(scaffolder: RecordingScaffolder) -> &'static RecordingScaffolder {
    Box::leak(Box::new(scaffolder))
}

#[test]
fn test_payload_shape_on_the_wire() {
    let scaffolder = leak(RecordingScaffolder::replying(
        json!({ "overallStatus": "Success" }),
    ));
    let service = ScaffoldService::new(Box::new(scaffolder));

    let kind: ComponentKind = "full_agent_set".parse().unwrap();
    let report = service.scaffold("billing", kind, "src/billing").unwrap();
    assert!(report.status.is_success());

    let payloads = scaffolder.payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    let sent: Value = serde_json::from_str(&payloads[0]).unwrap();
    assert_eq!(
        sent,
        json!({
            "componentName": "billing",
            "sddComponentType": "FULL_AGENT_SET",
            "targetDirectory": "src/billing",
            "templateVariables": {}
        })
    );
}

#[test]
fn test_lowercase_success_is_not_success() {
    let scaffolder = leak(RecordingScaffolder::replying(
        json!({ "overallStatus": "success" }),
    ));
    let service = ScaffoldService::new(Box::new(scaffolder));

    let report = service
        .scaffold("x", ComponentKind::Agent, "out")
        .unwrap();
    assert_eq!(report.status, ScaffoldStatus::Issues);
}

#[test]
fn test_unknown_kind_is_rejected_before_any_call() {
    let err = "BOGUS".parse::<ComponentKind>().unwrap_err();
    assert!(matches!(err, DomainError::InvalidComponentKind { .. }));

    let wrapped: SeemsError = err.into();
    assert_eq!(wrapped.category(), ErrorCategory::Validation);
    assert!(!wrapped.suggestions().is_empty());
}
