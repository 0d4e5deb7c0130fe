//! Arithmetic evaluator
//!
//! Four-function arithmetic, floor-convention modulo, exponent and logarithm
//! over explicitly typed operands. Every failure is a [`CalcError`] carrying a
//! symbolic code and the sentinel string shown on the calculator display.

pub mod history;
mod operations;
mod request;
pub mod session;

pub use operations::{Calculator, LogKind, Operation};
pub use request::{Operand, OperationRequest, Value};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Divisor (or zero base raised to a negative power) is exactly zero
    #[error("Division by zero: the divisor must not be 0")]
    DivisionByZero,

    /// Modulus is zero
    #[error("Invalid modulus: n must not be 0")]
    InvalidModulus,

    /// Result magnitude exceeds the f64 range
    #[error("Overflow: result is too large to represent")]
    Overflow,

    /// Argument outside the function's domain
    #[error("Domain error: {0}")]
    Domain(DomainViolation),

    /// Wrong number of operands for the operation
    #[error("{operation} takes {expected} operand(s), got {found}")]
    ArityMismatch {
        /// Operation name
        operation: &'static str,
        /// Required operand count
        expected: usize,
        /// Supplied operand count
        found: usize,
    },

    /// Operand has the wrong type or is not a finite number
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    /// Textual command could not be parsed
    #[error("Invalid command: {0}")]
    Parse(String),
}

impl CalcError {
    /// Symbolic error code, stable across releases
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidModulus => "INVALID_MODULUS",
            Self::Overflow => "OVERFLOW",
            Self::Domain(_) => "DOMAIN_ERROR",
            Self::ArityMismatch { .. } => "ARITY_MISMATCH",
            Self::InvalidOperand(_) => "INVALID_OPERAND",
            Self::Parse(_) => "PARSE_ERROR",
        }
    }

    /// Short string put on the display in place of a result
    #[must_use]
    pub const fn sentinel(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Error: divide by 0",
            Self::InvalidModulus => "Error: n = 0",
            Self::Overflow => "Error: overflow",
            Self::Domain(DomainViolation::NonPositiveArgument(_)) => "Error: x ≤ 0",
            Self::Domain(DomainViolation::InvalidBase(_)) => "Error: invalid base",
            Self::Domain(DomainViolation::ComplexResult) | Self::ArityMismatch { .. } => "Error",
            Self::InvalidOperand(_) | Self::Parse(_) => "Error: invalid input",
        }
    }
}

/// Why an argument fell outside a function's domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DomainViolation {
    /// Logarithm argument x ≤ 0
    NonPositiveArgument(f64),
    /// Logarithm base ≤ 0 or equal to 1
    InvalidBase(f64),
    /// Real power has no real value (negative base, fractional exponent)
    ComplexResult,
}

impl std::fmt::Display for DomainViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveArgument(x) => write!(f, "argument x must be > 0, got {x}"),
            Self::InvalidBase(b) => write!(f, "base must be > 0 and ≠ 1, got {b}"),
            Self::ComplexResult => write!(f, "result is not a real number"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError display tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert!(err.to_string().starts_with("Division by zero"));
    }

    #[test]
    fn test_calc_error_display_domain() {
        let err = CalcError::Domain(DomainViolation::NonPositiveArgument(-1.0));
        assert_eq!(
            err.to_string(),
            "Domain error: argument x must be > 0, got -1"
        );
    }

    #[test]
    fn test_calc_error_display_arity() {
        let err = CalcError::ArityMismatch {
            operation: "add",
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "add takes 2 operand(s), got 1");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::Overflow);
        assert!(err.to_string().contains("Overflow"));
    }

    // ===== Codes and sentinels =====

    #[test]
    fn test_codes_are_distinct_per_kind() {
        let errors = [
            CalcError::DivisionByZero,
            CalcError::InvalidModulus,
            CalcError::Overflow,
            CalcError::Domain(DomainViolation::ComplexResult),
            CalcError::ArityMismatch {
                operation: "ln",
                expected: 1,
                found: 2,
            },
            CalcError::InvalidOperand("x".into()),
            CalcError::Parse("x".into()),
        ];
        let mut codes: Vec<_> = errors.iter().map(CalcError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_domain_variants_share_code() {
        assert_eq!(
            CalcError::Domain(DomainViolation::InvalidBase(1.0)).code(),
            CalcError::Domain(DomainViolation::NonPositiveArgument(0.0)).code()
        );
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(CalcError::DivisionByZero.sentinel(), "Error: divide by 0");
        assert_eq!(CalcError::InvalidModulus.sentinel(), "Error: n = 0");
        assert_eq!(CalcError::Overflow.sentinel(), "Error: overflow");
        assert_eq!(
            CalcError::Domain(DomainViolation::NonPositiveArgument(0.0)).sentinel(),
            "Error: x ≤ 0"
        );
        assert_eq!(
            CalcError::Domain(DomainViolation::InvalidBase(1.0)).sentinel(),
            "Error: invalid base"
        );
        assert_eq!(
            CalcError::Parse("?".into()).sentinel(),
            "Error: invalid input"
        );
    }
}
