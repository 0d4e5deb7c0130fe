//! Operation requests: an operation tag plus operands typed for it

use super::operations::{LogKind, Operation};
use super::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// Real number
    Real(f64),
    /// Integer (required by modulo)
    Integer(i64),
}

impl Operand {
    /// Real value, widening integers
    #[must_use]
    pub fn as_real(&self) -> f64 {
        match *self {
            Self::Real(v) => v,
            Self::Integer(v) => v as f64,
        }
    }

    /// Integer value; reals are rejected rather than truncated
    pub fn as_integer(&self) -> CalcResult<i64> {
        match *self {
            Self::Integer(v) => Ok(v),
            Self::Real(v) => Err(CalcError::InvalidOperand(format!(
                "expected an integer, got {v:?}"
            ))),
        }
    }

    /// Parses a token as the operand type an operation expects
    pub fn parse_for(token: &str, operation: Operation) -> CalcResult<Self> {
        if operation.takes_integers() {
            token
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| CalcError::InvalidOperand(format!("'{token}' is not an integer")))
        } else {
            let value = token
                .parse::<f64>()
                .map_err(|_| CalcError::InvalidOperand(format!("'{token}' is not a number")))?;
            if value.is_finite() {
                Ok(Self::Real(value))
            } else {
                Err(CalcError::InvalidOperand(format!(
                    "'{token}' is not a finite number"
                )))
            }
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{v:?}"),
            Self::Integer(v) => write!(f, "{v}"),
        }
    }
}

/// Calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Real result
    Real(f64),
    /// Integer result (modulo)
    Integer(i64),
}

impl Value {
    /// Result as f64
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Real(v) => v,
            Self::Integer(v) => v as f64,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{v:?}"),
            Self::Integer(v) => write!(f, "{v}"),
        }
    }
}

/// Operation plus operands, validated for arity and operand type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOperationRequest")]
pub struct OperationRequest {
    operation: Operation,
    operands: Vec<Operand>,
}

#[derive(Deserialize)]
struct RawOperationRequest {
    operation: Operation,
    operands: Vec<Operand>,
}

impl TryFrom<RawOperationRequest> for OperationRequest {
    type Error = CalcError;

    fn try_from(raw: RawOperationRequest) -> Result<Self, Self::Error> {
        Self::new(raw.operation, raw.operands)
    }
}

impl OperationRequest {
    /// Builds a request, checking operand count and types
    pub fn new(operation: Operation, operands: Vec<Operand>) -> CalcResult<Self> {
        if operands.len() != operation.arity() {
            return Err(CalcError::ArityMismatch {
                operation: operation.name(),
                expected: operation.arity(),
                found: operands.len(),
            });
        }
        for operand in &operands {
            if operation.takes_integers() {
                operand.as_integer()?;
            } else if !operand.as_real().is_finite() {
                return Err(CalcError::InvalidOperand(format!(
                    "{operand} is not a finite number"
                )));
            }
        }
        Ok(Self {
            operation,
            operands,
        })
    }

    /// Shorthand for a two-operand real request
    pub fn binary(operation: Operation, a: f64, b: f64) -> CalcResult<Self> {
        Self::new(operation, vec![Operand::Real(a), Operand::Real(b)])
    }

    /// Parses an operation name followed by operand tokens
    ///
    /// A bare `log` with one operand is the common logarithm.
    pub fn from_tokens<S: AsRef<str>>(name: &str, tokens: &[S]) -> CalcResult<Self> {
        let mut operation = Operation::from_name(name)
            .ok_or_else(|| CalcError::Parse(format!("unknown operation '{name}'")))?;
        if operation == Operation::Log(LogKind::Custom) && tokens.len() == 1 {
            operation = Operation::Log(LogKind::Common);
        }
        let operands = tokens
            .iter()
            .map(|t| Operand::parse_for(t.as_ref(), operation))
            .collect::<CalcResult<Vec<_>>>()?;
        Self::new(operation, operands)
    }

    /// The operation tag
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Operands in order
    #[must_use]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// Left-hand side of the display line, e.g. `2.0 + 3.0` or `ln(1.0)`
    #[must_use]
    pub fn expression(&self) -> String {
        let ops = &self.operands;
        match self.operation {
            Operation::Log(LogKind::Common | LogKind::Natural) => {
                format!("{}({})", self.operation.symbol(), ops[0])
            }
            Operation::Log(LogKind::Custom) => format!("log₍{}₎({})", ops[1], ops[0]),
            _ => format!("{} {} {}", ops[0], self.operation.symbol(), ops[1]),
        }
    }
}

impl FromStr for OperationRequest {
    type Err = CalcError;

    /// Parses `"<op> <operand>..."`, e.g. `"mod -7 3"` or `"log 8 2"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts
            .next()
            .ok_or_else(|| CalcError::Parse("empty command".into()))?;
        let tokens: Vec<&str> = parts.collect();
        Self::from_tokens(name, &tokens)
    }
}
