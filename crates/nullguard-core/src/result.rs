use serde::{Deserialize, Serialize};

/// Outcome of a null-field check.
///
/// Serializes as `{"status": "success"}` or
/// `{"status": "error", "invalid_fields": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Success,
    Error {
        /// Offending paths in pre-order traversal order.
        invalid_fields: Vec<String>,
    },
}

impl ValidationResult {
    pub(crate) fn from_invalid(invalid_fields: Vec<String>) -> Self {
        if invalid_fields.is_empty() {
            Self::Success
        } else {
            Self::Error { invalid_fields }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Offending paths; empty on success.
    pub fn invalid_fields(&self) -> &[String] {
        match self {
            Self::Success => &[],
            Self::Error { invalid_fields } => invalid_fields,
        }
    }
}
