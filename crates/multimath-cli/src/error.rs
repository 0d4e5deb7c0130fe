//! Error types for the CLI

use multimath::calc::CalcError;
use multimath::population::PopulationError;
use multimath::simulate::SimulationError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculation rejected
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Simulation rejected
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Population data unusable
    #[error(transparent)]
    Population(#[from] PopulationError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Symbolic error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Calc(e) => e.code(),
            Self::Simulation(e) => e.code(),
            Self::Population(e) => e.code(),
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad bounds");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad bounds"));
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_calc_error_is_transparent() {
        let err: CliError = CalcError::DivisionByZero.into();
        assert_eq!(err.to_string(), CalcError::DivisionByZero.to_string());
        assert_eq!(err.code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_population_error_code() {
        let err: CliError = PopulationError::MissingColumn {
            column: "1990".into(),
        }
        .into();
        assert_eq!(err.code(), "MISSING_COLUMN");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }
}
