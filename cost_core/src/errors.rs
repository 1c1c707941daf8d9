//! # Error Types
//!
//! Structured error types for cost_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context (offending
//! field or quantity, and its value) to render a user-facing message.
//!
//! ## Error Kinds
//!
//! | Kind           | Raised when                                              |
//! |----------------|----------------------------------------------------------|
//! | `InvalidInput` | A required number is missing, non-finite, or out of range |
//! | `Domain`       | A formula precondition fails (ln of ≤ 0, k = 1, P < 0)   |
//! | `UnknownKey`   | Strict lookup mode only: a categorical key is not listed |
//!
//! Unknown categorical keys are *not* errors under the default
//! [`LookupPolicy::Permissive`](crate::factors::LookupPolicy) - they resolve to
//! the table's default entry.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::errors::{CostError, EstimateResult};
//!
//! fn validate_diameter(diameter_ft: f64) -> EstimateResult<()> {
//!     if diameter_ft <= 0.0 {
//!         return Err(CostError::InvalidInput {
//!             field: "diameter_ft".to_string(),
//!             value: diameter_ft.to_string(),
//!             reason: "Diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cost_core operations
pub type EstimateResult<T> = Result<T, CostError>;

/// Structured error type for cost estimation.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CostError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A mathematical precondition of a correlation is violated
    #[error("Domain error in '{quantity}': {value} - {reason}")]
    Domain {
        quantity: String,
        value: String,
        reason: String,
    },

    /// Categorical key not present in a factor table (strict mode only)
    #[error("Unknown key '{key}' for {table}")]
    UnknownKey { table: String, key: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Coarse error classification used by adapters to pick a message style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidInput,
    Domain,
    UnknownKey,
    Serialization,
    Internal,
}

impl CostError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CostError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CostError::MissingField {
            field: field.into(),
        }
    }

    /// Create a Domain error
    pub fn domain(quantity: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CostError::Domain {
            quantity: quantity.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownKey error
    pub fn unknown_key(table: impl Into<String>, key: impl Into<String>) -> Self {
        CostError::UnknownKey {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Prefix the offending field/quantity with an item label.
    ///
    /// Used when pricing a whole estimate so the message names which item failed.
    pub fn in_item(self, label: &str) -> Self {
        match self {
            CostError::InvalidInput { field, value, reason } => CostError::InvalidInput {
                field: format!("{}.{}", label, field),
                value,
                reason,
            },
            CostError::MissingField { field } => CostError::MissingField {
                field: format!("{}.{}", label, field),
            },
            CostError::Domain { quantity, value, reason } => CostError::Domain {
                quantity: format!("{}.{}", label, quantity),
                value,
                reason,
            },
            other => other,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CostError::InvalidInput { .. } | CostError::MissingField { .. } => ErrorKind::InvalidInput,
            CostError::Domain { .. } => ErrorKind::Domain,
            CostError::UnknownKey { .. } => ErrorKind::UnknownKey,
            CostError::SerializationError { .. } => ErrorKind::Serialization,
            CostError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CostError::InvalidInput { .. } => "INVALID_INPUT",
            CostError::MissingField { .. } => "MISSING_FIELD",
            CostError::Domain { .. } => "DOMAIN_ERROR",
            CostError::UnknownKey { .. } => "UNKNOWN_KEY",
            CostError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CostError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CostError {
    fn from(e: serde_json::Error) -> Self {
        CostError::SerializationError {
            reason: e.to_string(),
        }
    }
}

/// Reject NaN and infinities before any range check.
pub(crate) fn require_finite(field: &str, value: f64) -> EstimateResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CostError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}

/// Require a finite, strictly positive input.
pub(crate) fn require_positive(field: &str, value: f64) -> EstimateResult<f64> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CostError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

/// Require a finite, non-negative input.
pub(crate) fn require_non_negative(field: &str, value: f64) -> EstimateResult<f64> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CostError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(value)
}

/// Parse user-typed text as a number.
///
/// Adapters use this for form fields and prompts so unparseable text is
/// reported the same way as an out-of-range number.
///
/// ```rust
/// use cost_core::errors::{parse_number, ErrorKind};
///
/// assert_eq!(parse_number("diameter_ft", " 6.5 ").unwrap(), 6.5);
/// assert_eq!(parse_number("diameter_ft", "six").unwrap_err().kind(), ErrorKind::InvalidInput);
/// ```
pub fn parse_number(field: &str, raw: &str) -> EstimateResult<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CostError::invalid_input(field, trimmed, "Value must be a number"))?;
    require_finite(field, value)
}

/// Parse user-typed text as a non-negative whole number (tray counts).
pub fn parse_count(field: &str, raw: &str) -> EstimateResult<u32> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| CostError::invalid_input(field, trimmed, "Value must be a non-negative whole number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CostError::invalid_input("diameter_ft", "-5.0", "Diameter must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CostError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CostError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CostError::domain("ln(W)", "0", "log of zero").error_code(), "DOMAIN_ERROR");
        assert_eq!(CostError::unknown_key("drive type", "diesel").error_code(), "UNKNOWN_KEY");
    }

    #[test]
    fn test_missing_field_is_invalid_input_kind() {
        assert_eq!(CostError::missing_field("length_ft").kind(), ErrorKind::InvalidInput);
        assert_eq!(CostError::domain("k", "1", "k must exceed 1").kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_in_item_prefixes_field() {
        let err = CostError::invalid_input("length_ft", "0", "Value must be positive").in_item("R-101");
        match err {
            CostError::InvalidInput { field, .. } => assert_eq!(field, "R-101.length_ft"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_require_helpers() {
        assert!(require_finite("x", f64::NAN).is_err());
        assert!(require_finite("x", f64::INFINITY).is_err());
        assert!(require_positive("x", 0.0).is_err());
        assert_eq!(require_positive("x", 2.0).unwrap(), 2.0);
        assert!(require_non_negative("x", -1.0).is_err());
        assert_eq!(require_non_negative("x", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_number("q", "1e6").unwrap(), 1.0e6);
        assert!(matches!(
            parse_number("q", "abc"),
            Err(CostError::InvalidInput { ref field, ref value, .. }) if field == "q" && value == "abc"
        ));
        assert!(parse_number("q", "NaN").is_err());
        assert!(parse_number("q", "").is_err());
        assert_eq!(parse_count("tray_count", "25").unwrap(), 25);
        assert!(parse_count("tray_count", "-3").is_err());
        assert!(parse_count("tray_count", "2.5").is_err());
    }
}
