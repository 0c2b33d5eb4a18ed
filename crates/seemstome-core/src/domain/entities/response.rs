//! The `ScaffoldResponse` returned by the external scaffolder.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field the external scaffolder uses to report its overall result.
pub const OVERALL_STATUS_FIELD: &str = "overallStatus";

/// The only `overallStatus` value treated as success.
pub const SUCCESS_MARKER: &str = "Success";

/// Whatever JSON the external scaffolder printed on stdout.
///
/// The shape is not enforced; only [`OVERALL_STATUS_FIELD`] is inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaffoldResponse(Value);

impl ScaffoldResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse the scaffolder's stdout. The whole text must be one JSON value.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// `overallStatus` if the response is an object and the field is a string.
    pub fn overall_status(&self) -> Option<&str> {
        self.0.get(OVERALL_STATUS_FIELD).and_then(Value::as_str)
    }

    /// Classify this response. Anything but an explicit success marker is
    /// [`ScaffoldStatus::Issues`].
    pub fn status(&self) -> ScaffoldStatus {
        match self.overall_status() {
            Some(SUCCESS_MARKER) => ScaffoldStatus::Success,
            _ => ScaffoldStatus::Issues,
        }
    }

    /// Two-space indented JSON.
    pub fn to_pretty(&self) -> String {
        // Serializing a `Value` cannot fail.
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Outcome of a scaffold call that produced a parseable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldStatus {
    /// `overallStatus` was exactly `"Success"`.
    Success,
    /// Missing, non-string, or any other status.
    Issues,
}

impl ScaffoldStatus {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for ScaffoldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Issues => f.write_str("issues"),
        }
    }
}
