//! `seemstome scaffold`: forward a component request to the external scaffolder.
//!
//! Every outcome of the external call is reported here and, unless
//! `--strict` is in effect, the command still exits 0. Only input that fails
//! validation is returned as an error before anything is run.

use serde_json::{Value, json};
use tracing::{info, instrument};

use seemstome_adapters::ProcessScaffolder;
use seemstome_core::{
    application::{ApplicationError, ScaffoldReport, ScaffoldService},
    domain::ScaffoldRequest,
    error::{SeemsError, SeemsResult},
};

use crate::{
    cli::ScaffoldArgs,
    config::{AppConfig, ScaffolderConfig},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run one scaffold call and report the outcome.
#[instrument(skip_all, fields(name = %args.name, kind = %args.kind))]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let strict = args.strict || config.scaffolder.strict_exit;
    let scaffolder = build_scaffolder(&config.scaffolder, args.program.as_deref());
    let service = ScaffoldService::new(Box::new(scaffolder));

    // Validation failures surface as usage errors; nothing is executed.
    let request = service.prepare(&args.name, args.kind, &args.target_dir)?;
    let command_line = service.describe();

    if !output.is_json() {
        announce(&output, &request, &command_line)?;
    }

    let result = service.execute(request.clone());

    if output.is_json() {
        output.json(&summary(&request, &command_line, &result))?;
    } else {
        report(&output, &result, &command_line)?;
    }

    match failure_outcome(&result) {
        Some(outcome) if strict => Err(CliError::ScaffoldUnsuccessful {
            outcome: outcome.into(),
        }),
        Some(outcome) => {
            info!(outcome, "Scaffold did not succeed; exiting 0 (not strict)");
            Ok(())
        }
        None => Ok(()),
    }
}

/// Assemble the process adapter from config, honouring `--program`.
fn build_scaffolder(config: &ScaffolderConfig, program: Option<&str>) -> ProcessScaffolder {
    ProcessScaffolder::new(program.unwrap_or(&config.program))
        .args(config.resolved_args())
        .subcommand(config.subcommand.clone())
        .timeout(config.timeout())
}

fn announce(output: &OutputManager, request: &ScaffoldRequest, command_line: &str) -> CliResult<()> {
    output.print(&format!(
        "Attempting to scaffold component: {}",
        request.component_name()
    ))?;
    output.print(&format!("Type: {}", request.kind()))?;
    output.print(&format!("Target Directory: {}", request.target_directory()))?;
    output.print(&format!("Preparing to call scaffolder: {command_line}"))?;
    Ok(())
}

/// Human rendering of every possible outcome.
fn report(
    output: &OutputManager,
    result: &SeemsResult<ScaffoldReport>,
    command_line: &str,
) -> CliResult<()> {
    match result {
        Ok(report) => {
            output.raw("\n--- Agent Output ---")?;
            output.raw(&report.response.to_pretty())?;
            output.raw("")?;
            if report.status.is_success() {
                output.success("Scaffolding reported success.")?;
            } else {
                output.warning("Scaffolding reported issues or failure.")?;
            }
        }

        Err(SeemsError::Application(ApplicationError::MalformedResponse { raw, reason })) => {
            output.raw("\n--- Agent Output ---")?;
            output.error(&format!(
                "Could not parse JSON output from scaffolder: {reason}"
            ))?;
            output.raw(raw)?;
        }

        Err(SeemsError::Application(err @ ApplicationError::ToolFailed { stdout, stderr, .. })) => {
            output.raw("\n--- Error calling scaffolder ---")?;
            output.error(&err.to_string())?;
            output.raw("Stdout:")?;
            output.raw(stdout)?;
            output.raw("Stderr:")?;
            output.raw(stderr)?;
        }

        Err(SeemsError::Application(ApplicationError::ToolUnavailable { program, reason })) => {
            output.error(&format!(
                "Error: scaffolder executable '{program}' not found or not executable ({reason}). \
                 Is Node.js installed and in PATH?"
            ))?;
            output.raw(&format!("Attempted to run: {command_line}"))?;
        }

        Err(err @ SeemsError::Application(ApplicationError::ToolTimedOut { .. })) => {
            output.raw("\n--- Error calling scaffolder ---")?;
            output.error(&err.to_string())?;
        }

        Err(err) => {
            output.error(&format!("An unexpected error occurred: {err}"))?;
        }
    }
    Ok(())
}

/// `None` on confirmed success, otherwise a short description.
fn failure_outcome(result: &SeemsResult<ScaffoldReport>) -> Option<&'static str> {
    match result {
        Ok(report) if report.status.is_success() => None,
        Ok(_) => Some("scaffolder reported issues or failure"),
        Err(SeemsError::Application(ApplicationError::ToolUnavailable { .. })) => {
            Some("scaffolder could not be started")
        }
        Err(SeemsError::Application(ApplicationError::ToolFailed { .. })) => {
            Some("scaffolder exited with an error")
        }
        Err(SeemsError::Application(ApplicationError::ToolTimedOut { .. })) => {
            Some("scaffolder timed out")
        }
        Err(SeemsError::Application(ApplicationError::MalformedResponse { .. })) => {
            Some("scaffolder output was not valid JSON")
        }
        Err(_) => Some("unexpected error"),
    }
}

/// Machine-readable summary for `--output-format json`.
fn summary(
    request: &ScaffoldRequest,
    command_line: &str,
    result: &SeemsResult<ScaffoldReport>,
) -> Value {
    let mut doc = json!({
        "request": request,
        "command": command_line,
    });

    match result {
        Ok(report) => {
            doc["status"] = json!(report.status);
            doc["response"] = report.response.value().clone();
        }
        Err(err) => {
            doc["status"] = json!("error");
            doc["error"] = error_detail(err);
        }
    }
    doc
}

fn error_detail(err: &SeemsError) -> Value {
    let mut detail = json!({ "message": err.to_string() });
    match err {
        SeemsError::Application(ApplicationError::ToolFailed {
            exit_code,
            stdout,
            stderr,
        }) => {
            detail["kind"] = json!("tool_failed");
            detail["exitCode"] = json!(exit_code);
            detail["stdout"] = json!(stdout);
            detail["stderr"] = json!(stderr);
        }
        SeemsError::Application(ApplicationError::MalformedResponse { raw, .. }) => {
            detail["kind"] = json!("malformed_response");
            detail["raw"] = json!(raw);
        }
        SeemsError::Application(ApplicationError::ToolUnavailable { .. }) => {
            detail["kind"] = json!("tool_unavailable");
        }
        SeemsError::Application(ApplicationError::ToolTimedOut { .. }) => {
            detail["kind"] = json!("timed_out");
        }
        _ => detail["kind"] = json!("unexpected"),
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use seemstome_core::application::ports::Scaffolder;
    use seemstome_core::domain::{ComponentKind, ScaffoldResponse, ScaffoldStatus};

    fn request() -> ScaffoldRequest {
        ScaffoldRequest::new("myAgent", ComponentKind::Agent, "src/agents").unwrap()
    }

    fn report(value: Value) -> SeemsResult<ScaffoldReport> {
        let response = ScaffoldResponse::new(value);
        Ok(ScaffoldReport {
            request: request(),
            status: response.status(),
            response,
        })
    }

    #[test]
    fn program_flag_overrides_config() {
        let config = ScaffolderConfig {
            args: Some(vec!["tool.js".into()]),
            ..ScaffolderConfig::default()
        };

        assert_eq!(
            build_scaffolder(&config, None).describe(),
            "node tool.js scaffold"
        );
        assert_eq!(
            build_scaffolder(&config, Some("/usr/bin/bun")).describe(),
            "/usr/bin/bun tool.js scaffold"
        );
    }

    #[test]
    fn only_explicit_success_is_not_a_failure() {
        assert_eq!(failure_outcome(&report(json!({ "overallStatus": "Success" }))), None);
        assert!(failure_outcome(&report(json!({ "overallStatus": "Failed" }))).is_some());
        assert!(failure_outcome(&report(json!([1, 2]))).is_some());
    }

    #[test]
    fn tool_failures_are_failures() {
        let err: SeemsResult<ScaffoldReport> = Err(ApplicationError::ToolFailed {
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "boom".into(),
        }
        .into());
        assert_eq!(
            failure_outcome(&err),
            Some("scaffolder exited with an error")
        );
    }

    #[test]
    fn summary_for_success_embeds_response() {
        let ok = report(json!({ "overallStatus": "Success" }));
        let doc = summary(&request(), "node x scaffold", &ok);
        assert_eq!(doc["status"], json!(ScaffoldStatus::Success));
        assert_eq!(doc["request"]["sddComponentType"], "AGENT");
        assert_eq!(doc["response"]["overallStatus"], "Success");
    }

    #[test]
    fn summary_for_tool_failure_keeps_streams() {
        let err: SeemsResult<ScaffoldReport> = Err(ApplicationError::ToolFailed {
            exit_code: Some(2),
            stdout: "out".into(),
            stderr: "err".into(),
        }
        .into());
        let doc = summary(&request(), "node x scaffold", &err);
        assert_eq!(doc["status"], "error");
        assert_eq!(doc["error"]["kind"], "tool_failed");
        assert_eq!(doc["error"]["exitCode"], 2);
        assert_eq!(doc["error"]["stderr"], "err");
    }
}
