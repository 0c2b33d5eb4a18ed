//! Domain value objects: ComponentKind.
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ComponentKind ─────────────────────────────────────────────────────────────

/// The kind of SDD component the external scaffolder should generate.
///
/// The wire representation (`sddComponentType`) is the uppercase name, e.g.
/// `"FULL_AGENT_SET"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentKind {
    Agent,
    Contract,
    Test,
    FullAgentSet,
}

impl ComponentKind {
    /// Every kind, in declaration order.
    pub const ALL: [ComponentKind; 4] = [
        Self::Agent,
        Self::Contract,
        Self::Test,
        Self::FullAgentSet,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "AGENT",
            Self::Contract => "CONTRACT",
            Self::Test => "TEST",
            Self::FullAgentSet => "FULL_AGENT_SET",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidComponentKind {
                value: s.to_string(),
            })
    }
}
