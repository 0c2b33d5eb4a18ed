//! Scaffold Service - the CLI-to-external-scaffolder bridge.
//!
//! This service coordinates one scaffold call:
//! 1. Validate input and build the request
//! 2. Hand it to the `Scaffolder` port
//! 3. Classify the response (`Success` only on an explicit marker)
//!
//! It never retries and never inspects the transport.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Scaffolder,
    domain::{ComponentKind, ScaffoldRequest, ScaffoldResponse, ScaffoldStatus},
    error::SeemsResult,
};

/// Everything the caller needs to render a completed call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaffoldReport {
    pub request: ScaffoldRequest,
    pub response: ScaffoldResponse,
    pub status: ScaffoldStatus,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    scaffolder: Box<dyn Scaffolder>,
}

impl ScaffoldService {
    /// Create a new scaffold service around a scaffolder adapter.
    pub fn new(scaffolder: Box<dyn Scaffolder>) -> Self {
        Self { scaffolder }
    }

    /// Description of the underlying scaffolder (e.g. the command line).
    pub fn describe(&self) -> String {
        self.scaffolder.describe()
    }

    /// Validate inputs and build the request. Nothing is invoked.
    pub fn prepare(
        &self,
        name: &str,
        kind: ComponentKind,
        target_dir: &str,
    ) -> SeemsResult<ScaffoldRequest> {
        Ok(ScaffoldRequest::new(name, kind, target_dir)?)
    }

    /// Send a prepared request and classify the response.
    #[instrument(
        skip_all,
        fields(
            component = %request.component_name(),
            kind = %request.kind(),
            target_dir = %request.target_directory()
        )
    )]
    pub fn execute(&self, request: ScaffoldRequest) -> SeemsResult<ScaffoldReport> {
        info!("Invoking scaffolder");
        debug!(scaffolder = %self.scaffolder.describe(), "Scaffolder resolved");

        let response = self.scaffolder.scaffold(&request)?;
        let status = response.status();

        match status {
            ScaffoldStatus::Success => info!("Scaffolder reported success"),
            ScaffoldStatus::Issues => warn!(
                overall_status = response.overall_status().unwrap_or("<missing>"),
                "Scaffolder did not report success"
            ),
        }

        Ok(ScaffoldReport {
            request,
            response,
            status,
        })
    }

    /// `prepare` followed by `execute`.
    pub fn scaffold(
        &self,
        name: &str,
        kind: ComponentKind,
        target_dir: &str,
    ) -> SeemsResult<ScaffoldReport> {
        let request = self.prepare(name, kind, target_dir)?;
        self.execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockScaffolder};
    use crate::domain::DomainError;
    use crate::error::SeemsError;
    use serde_json::json;

    fn service(mock: MockScaffolder) -> ScaffoldService {
        ScaffoldService::new(Box::new(mock))
    }

    fn describing(mut mock: MockScaffolder) -> MockScaffolder {
        mock.expect_describe().return_const("mock scaffolder".to_string());
        mock
    }

    #[test]
    fn blank_name_never_reaches_scaffolder() {
        let mut mock = MockScaffolder::new();
        mock.expect_scaffold().never();

        let err = service(mock)
            .scaffold("", ComponentKind::Agent, "src/agents")
            .unwrap_err();
        assert!(matches!(
            err,
            SeemsError::Domain(DomainError::MissingField { field: "name" })
        ));
    }

    #[test]
    fn blank_target_dir_never_reaches_scaffolder() {
        let mut mock = MockScaffolder::new();
        mock.expect_scaffold().never();

        assert!(
            service(mock)
                .scaffold("myAgent", ComponentKind::Agent, "  ")
                .is_err()
        );
    }

    #[test]
    fn request_carries_normalized_kind_and_empty_variables() {
        let mut mock = describing(MockScaffolder::new());
        mock.expect_scaffold()
            .withf(|req: &ScaffoldRequest| {
                req.kind() == ComponentKind::Agent
                    && req.component_name() == "myAgent"
                    && req.target_directory() == "src/agents"
                    && req.template_variables().is_empty()
            })
            .times(1)
            .returning(|_| Ok(ScaffoldResponse::new(json!({ "overallStatus": "Success" }))));

        let kind: ComponentKind = "agent".parse().unwrap();
        let report = service(mock)
            .scaffold("myAgent", kind, "src/agents")
            .unwrap();
        assert_eq!(report.status, ScaffoldStatus::Success);
    }

    #[test]
    fn missing_status_is_reported_as_issues() {
        let mut mock = describing(MockScaffolder::new());
        mock.expect_scaffold()
            .times(1)
            .returning(|_| Ok(ScaffoldResponse::new(json!({ "generated": ["a.ts"] }))));

        let report = service(mock)
            .scaffold("x", ComponentKind::Contract, "out")
            .unwrap();
        assert_eq!(report.status, ScaffoldStatus::Issues);
    }

    #[test]
    fn partial_failure_is_reported_as_issues() {
        let mut mock = describing(MockScaffolder::new());
        mock.expect_scaffold().times(1).returning(|_| {
            Ok(ScaffoldResponse::new(
                json!({ "overallStatus": "PartialSuccess", "errors": ["x"] }),
            ))
        });

        let report = service(mock)
            .scaffold("x", ComponentKind::FullAgentSet, "out")
            .unwrap();
        assert!(!report.status.is_success());
    }

    #[test]
    fn tool_failure_is_propagated_untouched() {
        let mut mock = describing(MockScaffolder::new());
        mock.expect_scaffold().times(1).returning(|_| {
            Err(ApplicationError::ToolFailed {
                exit_code: Some(2),
                stdout: "partial".into(),
                stderr: "fatal".into(),
            }
            .into())
        });

        let err = service(mock)
            .scaffold("x", ComponentKind::Test, "out")
            .unwrap_err();
        match err {
            SeemsError::Application(ApplicationError::ToolFailed {
                exit_code, stderr, ..
            }) => {
                assert_eq!(exit_code, Some(2));
                assert_eq!(stderr, "fatal");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn prepare_does_not_invoke() {
        let mut mock = MockScaffolder::new();
        mock.expect_scaffold().never();

        let req = service(mock)
            .prepare("a", ComponentKind::Test, "b")
            .unwrap();
        assert_eq!(req.kind(), ComponentKind::Test);
    }
}
