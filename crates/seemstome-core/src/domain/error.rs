// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ComponentKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("unknown component type '{value}'")]
    InvalidComponentKind { value: String },

    #[error("Required field missing: {field}")]
    MissingField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidComponentKind { value } => {
                let mut out = vec![
                    format!("'{value}' is not a supported component type"),
                    "Supported types (case-insensitive):".into(),
                ];
                out.extend(ComponentKind::ALL.iter().map(|k| format!("  • {k}")));
                out
            }
            Self::MissingField { field } => vec![
                format!("'{field}' must be a non-empty value"),
                "Use --help for usage information".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_kind_suggestions_list_every_kind() {
        let err = DomainError::InvalidComponentKind {
            value: "widget".into(),
        };
        let suggestions = err.suggestions();
        for kind in ComponentKind::ALL {
            assert!(
                suggestions.iter().any(|s| s.contains(kind.as_str())),
                "missing {kind}"
            );
        }
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = DomainError::MissingField { field: "name" };
        assert_eq!(err.to_string(), "Required field missing: name");
        assert!(err.suggestions()[0].contains("'name'"));
    }
}
