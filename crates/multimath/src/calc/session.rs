//! Per-session calculator display
//!
//! A [`Session`] is owned by whoever drives the interaction. Each step takes
//! the session by value and hands back the next one, so no display state
//! lives outside the caller.

use super::history::{History, HistoryEntry};
use super::{CalcResult, Calculator, OperationRequest, Value};

/// Display shown before the first calculation
pub const INITIAL_DISPLAY: &str = "0";

/// Display text plus the history of successful calculations
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    display: String,
    history: History,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::with_history(History::new())
    }

    /// Fresh session with a caller-sized history
    #[must_use]
    pub fn with_history(history: History) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            history,
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Successful calculations so far
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Evaluates `request` and returns the next session with its outcome
    ///
    /// On success the display becomes `<expression> = <result>` and the
    /// calculation is recorded. On failure the display becomes the error's
    /// sentinel and history is untouched.
    pub fn apply(mut self, request: &OperationRequest) -> (Self, CalcResult<Value>) {
        let outcome = Calculator::new().evaluate(request);
        match &outcome {
            Ok(value) => {
                let entry = HistoryEntry::new(request.operation(), request.expression(), *value);
                self.display = entry.display();
                self.history.push(entry);
            }
            Err(err) => {
                tracing::debug!(code = err.code(), "calculation rejected");
                self.display = err.sentinel().to_string();
            }
        }
        (self, outcome)
    }

    /// Resets the display to `0` and forgets history
    #[must_use]
    pub fn cleared(mut self) -> Self {
        self.display = INITIAL_DISPLAY.to_string();
        self.history.clear();
        self
    }
}
