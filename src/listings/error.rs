use std::fmt;

/// Category of a rejected field, independent of which field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    TypeMismatch,
    RangeViolation,
    EdgeCase,
    UnknownField,
}

impl ValidationErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::RangeViolation => "range_violation",
            Self::EdgeCase => "edge_case",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation errors raised while constructing or updating a listing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} expected {expected}, found {value}")]
    TypeMismatch {
        field: String,
        value: String,
        expected: &'static str,
    },
    #[error("{field} value {value} is invalid: {reason}")]
    RangeViolation {
        field: String,
        value: String,
        reason: String,
    },
    #[error("{field} value {value} matched no supported type")]
    EdgeCase { field: String, value: String },
    #[error("{field} is not a recognized listing field")]
    UnknownField { field: String },
}

impl ValidationError {
    pub(crate) fn type_mismatch(
        field: impl Into<String>,
        value: impl fmt::Display,
        expected: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            value: value.to_string(),
            expected,
        }
    }

    pub(crate) fn range(
        field: impl Into<String>,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::RangeViolation {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn edge_case(field: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::EdgeCase {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::TypeMismatch { .. } => ValidationErrorKind::TypeMismatch,
            Self::RangeViolation { .. } => ValidationErrorKind::RangeViolation,
            Self::EdgeCase { .. } => ValidationErrorKind::EdgeCase,
            Self::UnknownField { .. } => ValidationErrorKind::UnknownField,
        }
    }

    /// Dotted path of the offending field, e.g. `cpu.family`.
    pub fn field(&self) -> &str {
        match self {
            Self::TypeMismatch { field, .. }
            | Self::RangeViolation { field, .. }
            | Self::EdgeCase { field, .. }
            | Self::UnknownField { field } => field,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { value, .. }
            | Self::RangeViolation { value, .. }
            | Self::EdgeCase { value, .. } => Some(value),
            Self::UnknownField { .. } => None,
        }
    }
}

/// Failure while loading a serialized listing.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid listing JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stored listing failed validation: {0}")]
    Validation(#[from] ValidationError),
}

/// Failure while exporting listings.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize listing: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write listing rows: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush listing rows: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_violation_reports_field_and_value() {
        let error = ValidationError::range("cpu.family", 6, "must be one of 3, 5, 7, 9");

        assert_eq!(error.kind(), ValidationErrorKind::RangeViolation);
        assert_eq!(error.field(), "cpu.family");
        assert_eq!(error.value(), Some("6"));
        assert_eq!(
            error.to_string(),
            "cpu.family value 6 is invalid: must be one of 3, 5, 7, 9"
        );
    }

    #[test]
    fn unknown_field_has_no_value() {
        let error = ValidationError::UnknownField {
            field: "colour".to_string(),
        };
        assert_eq!(error.kind().label(), "unknown_field");
        assert!(error.value().is_none());
    }
}
