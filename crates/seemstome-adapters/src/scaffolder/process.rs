//! External-process scaffolder.
//!
//! Runs `<program> <args...> <subcommand> <payload>`, captures both streams
//! in full and maps the outcome onto the `Scaffolder` contract:
//!
//! - spawn failure (`NotFound`, `PermissionDenied`) -> `ToolUnavailable`
//! - non-zero exit or signal -> `ToolFailed` (stdout is not parsed)
//! - zero exit with non-JSON stdout -> `MalformedResponse` (raw kept)
//! - zero exit with JSON stdout -> `ScaffoldResponse`

use std::io::{self, Read};
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use seemstome_core::{
    application::{ApplicationError, ports::Scaffolder},
    domain::{ScaffoldRequest, ScaffoldResponse},
    error::{SeemsError, SeemsResult},
};
use tracing::{debug, instrument, warn};

/// Program used when none is configured.
pub const DEFAULT_PROGRAM: &str = "node";

/// Subcommand token passed ahead of the payload.
pub const DEFAULT_SUBCOMMAND: &str = "scaffold";

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Scaffolder that shells out to an external program.
#[derive(Debug, Clone)]
pub struct ProcessScaffolder {
    program: String,
    args: Vec<String>,
    subcommand: String,
    timeout: Option<Duration>,
}

impl ProcessScaffolder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            subcommand: DEFAULT_SUBCOMMAND.to_string(),
            timeout: None,
        }
    }

    /// Arguments placed before the subcommand (e.g. the script path).
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn subcommand(mut self, subcommand: impl Into<String>) -> Self {
        self.subcommand = subcommand.into();
        self
    }

    /// Kill the process if it has not exited after `timeout`.
    /// `None` waits indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, payload: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(&self.subcommand)
            .arg(payload)
            .stdin(Stdio::null());
        command
    }

    fn run(&self, payload: &str) -> SeemsResult<Output> {
        let mut command = self.command(payload);
        match self.timeout {
            None => command.output().map_err(|e| self.spawn_error(e)),
            Some(limit) => {
                let child = command
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .spawn()
                    .map_err(|e| self.spawn_error(e))?;
                self.wait_with_deadline(child, limit)
            }
        }
    }

    /// Both pipes are drained on helper threads so a chatty child cannot
    /// block on a full pipe while we poll for its exit.
    fn wait_with_deadline(&self, mut child: Child, limit: Duration) -> SeemsResult<Output> {
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);
        let deadline = Instant::now() + limit;

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    warn!(program = %self.program, "Scaffolder timed out, killing");
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ApplicationError::ToolTimedOut {
                        program: self.program.clone(),
                        timeout_secs: limit.as_secs(),
                    }
                    .into());
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => return Err(invocation_error(format!("failed to wait: {e}"))),
            }
        };

        Ok(Output {
            status,
            stdout: join(stdout)?,
            stderr: join(stderr)?,
        })
    }

    fn spawn_error(&self, e: io::Error) -> SeemsError {
        match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                ApplicationError::ToolUnavailable {
                    program: self.program.clone(),
                    reason: e.to_string(),
                }
                .into()
            }
            _ => invocation_error(format!("failed to start '{}': {e}", self.program)),
        }
    }
}

impl Scaffolder for ProcessScaffolder {
    #[instrument(skip_all, fields(program = %self.program))]
    fn scaffold(&self, request: &ScaffoldRequest) -> SeemsResult<ScaffoldResponse> {
        let payload = request
            .to_payload()
            .map_err(|e| ApplicationError::Serialization {
                reason: e.to_string(),
            })?;
        debug!(%payload, "Sending request");

        let output = self.run(&payload)?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(
            status = %output.status,
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "Scaffolder exited"
        );

        if !output.status.success() {
            return Err(ApplicationError::ToolFailed {
                exit_code: output.status.code(),
                stdout,
                stderr,
            }
            .into());
        }

        ScaffoldResponse::parse(&stdout).map_err(|e| {
            ApplicationError::MalformedResponse {
                raw: stdout.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(self.subcommand.as_str());
        parts.join(" ")
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> thread::JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join(handle: Option<thread::JoinHandle<io::Result<Vec<u8>>>>) -> SeemsResult<Vec<u8>> {
    let Some(handle) = handle else {
        return Ok(Vec::new());
    };
    handle
        .join()
        .map_err(|_| invocation_error("output reader panicked".into()))?
        .map_err(|e| invocation_error(format!("failed to read output: {e}")))
}

fn invocation_error(reason: String) -> SeemsError {
    ApplicationError::InvocationFailed { reason }.into()
}
