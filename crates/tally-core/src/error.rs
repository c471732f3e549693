//! # Error Types
//!
//! Error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── ConfigError      - Environment configuration failures             │
//! │  └── ValidationError  - Opt-in input checks                            │
//! │                                                                         │
//! │  Cart arithmetic has NO error type: every numeric input produces a     │
//! │  numeric result, however implausible.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// An environment variable is set but is not a number.
    ///
    /// ## When This Occurs
    /// ```text
    /// TALLY_STATE_TAX_PERCENT=ten
    ///      │
    ///      ▼
    /// InvalidValue { key: "TALLY_STATE_TAX_PERCENT", value: "ten" }
    /// ```
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced only by the functions in [`crate::validation`]. Nothing in the
/// cart calls those functions on its own.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
