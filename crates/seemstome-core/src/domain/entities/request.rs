//! The `ScaffoldRequest` sent to the external scaffolder.
//!
//! A request is the only thing this tool knows about a component: what to
//! call it, what kind it is, and where it should land. Everything else
//! (templates, file generation) is owned by the external process.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ComponentKind};

/// A validated scaffold request.
///
/// Serializes to the interchange payload
/// `{ componentName, sddComponentType, targetDirectory, templateVariables }`.
/// `templateVariables` is a `BTreeMap` so the payload is canonical: the same
/// request always produces the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldRequest {
    component_name: String,
    sdd_component_type: ComponentKind,
    target_directory: String,
    #[serde(default)]
    template_variables: BTreeMap<String, String>,
}

impl ScaffoldRequest {
    /// Build a request with an empty template-variable mapping.
    ///
    /// Rejects blank `name` / `target_directory`.
    pub fn new(
        name: impl Into<String>,
        kind: ComponentKind,
        target_directory: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let request = Self {
            component_name: name.into(),
            sdd_component_type: kind,
            target_directory: target_directory.into(),
            template_variables: BTreeMap::new(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Attach a template variable. Later values for the same key win.
    ///
    /// Reserved for per-call variables: the payload already carries the
    /// `templateVariables` map, but `seemstome scaffold` has no flag that
    /// fills it and always sends it empty.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.template_variables.insert(key.into(), value.into());
        self
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }
    pub const fn kind(&self) -> ComponentKind {
        self.sdd_component_type
    }
    pub fn target_directory(&self) -> &str {
        &self.target_directory
    }
    pub fn template_variables(&self) -> &BTreeMap<String, String> {
        &self.template_variables
    }

    /// Re-check invariants, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.component_name.trim().is_empty() {
            return Err(DomainError::MissingField { field: "name" });
        }
        if self.target_directory.trim().is_empty() {
            return Err(DomainError::MissingField { field: "targetDir" });
        }
        Ok(())
    }

    /// Serialize to the canonical JSON payload.
    pub fn to_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
