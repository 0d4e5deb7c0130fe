//! Calculator operations and the single dispatch over them

use super::request::{OperationRequest, Value};
use super::{CalcError, CalcResult, DomainViolation};
use serde::{Deserialize, Serialize};

/// Logarithm flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogKind {
    /// log₁₀ x
    Common,
    /// ln x
    Natural,
    /// log_b x, base supplied as the second operand
    Custom,
}

/// Type-safe operation tag - one variant per calculator mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (a + b)
    Add,
    /// Subtraction (a - b)
    Subtract,
    /// Multiplication (a × b)
    Multiply,
    /// Division (a ÷ b)
    Divide,
    /// Integer modulo with floor convention (a mod n)
    Modulo,
    /// Real power (a ^ b)
    Power,
    /// Logarithm
    Log(LogKind),
}

impl Operation {
    /// Every operation, in menu order
    pub const ALL: [Self; 9] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Power,
        Self::Log(LogKind::Common),
        Self::Log(LogKind::Natural),
        Self::Log(LogKind::Custom),
    ];

    /// Command name used by the textual interface
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "sub",
            Self::Multiply => "mul",
            Self::Divide => "div",
            Self::Modulo => "mod",
            Self::Power => "pow",
            Self::Log(LogKind::Common) => "log10",
            Self::Log(LogKind::Natural) => "ln",
            Self::Log(LogKind::Custom) => "log",
        }
    }

    /// Infix symbol shown between operands (logarithms are rendered as calls)
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "mod",
            Self::Power => "^",
            Self::Log(LogKind::Common) => "log₁₀",
            Self::Log(LogKind::Natural) => "ln",
            Self::Log(LogKind::Custom) => "log",
        }
    }

    /// Number of operands the operation consumes
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Log(LogKind::Common | LogKind::Natural) => 1,
            _ => 2,
        }
    }

    /// True when operands must be integers
    #[must_use]
    pub const fn takes_integers(&self) -> bool {
        matches!(self, Self::Modulo)
    }

    /// Looks up an operation by command name or alias
    ///
    /// `log` resolves to the custom-base logarithm; callers that accept a
    /// one-operand `log` decide the kind from the operand count.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let op = match name.to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Self::Add,
            "sub" | "subtract" | "minus" | "-" => Self::Subtract,
            "mul" | "multiply" | "times" | "*" | "x" => Self::Multiply,
            "div" | "divide" | "/" => Self::Divide,
            "mod" | "modulo" | "%" => Self::Modulo,
            "pow" | "power" | "exp" | "^" => Self::Power,
            "log10" | "lg" => Self::Log(LogKind::Common),
            "ln" => Self::Log(LogKind::Natural),
            "log" | "logb" => Self::Log(LogKind::Custom),
            _ => return None,
        };
        Some(op)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stateless calculator implementing every operation
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Creates a new calculator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates a validated request
    pub fn evaluate(&self, request: &OperationRequest) -> CalcResult<Value> {
        let operation = request.operation();
        let operands = request.operands();

        let value = match operation {
            Operation::Add => Value::Real(Self::add(operands[0].as_real(), operands[1].as_real())),
            Operation::Subtract => {
                Value::Real(Self::subtract(operands[0].as_real(), operands[1].as_real()))
            }
            Operation::Multiply => {
                Value::Real(Self::multiply(operands[0].as_real(), operands[1].as_real()))
            }
            Operation::Divide => {
                Value::Real(Self::divide(operands[0].as_real(), operands[1].as_real())?)
            }
            Operation::Modulo => Value::Integer(Self::modulo(
                operands[0].as_integer()?,
                operands[1].as_integer()?,
            )?),
            Operation::Power => {
                Value::Real(Self::power(operands[0].as_real(), operands[1].as_real())?)
            }
            Operation::Log(LogKind::Common) => Value::Real(Self::log10(operands[0].as_real())?),
            Operation::Log(LogKind::Natural) => Value::Real(Self::ln(operands[0].as_real())?),
            Operation::Log(LogKind::Custom) => {
                Value::Real(Self::log(operands[0].as_real(), operands[1].as_real())?)
            }
        };

        tracing::debug!(operation = operation.name(), %value, "evaluated");
        Ok(value)
    }

    /// Addition: a + b
    #[must_use]
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtraction: a - b
    #[must_use]
    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    /// Multiplication: a × b
    #[must_use]
    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    /// Division: a ÷ b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Modulo with floor convention: the result takes the sign of `n`
    pub fn modulo(a: i64, n: i64) -> CalcResult<i64> {
        if n == 0 {
            return Err(CalcError::InvalidModulus);
        }
        // checked_rem only fails for i64::MIN % -1, whose remainder is 0
        let r = a.checked_rem(n).unwrap_or(0);
        if r != 0 && (r < 0) != (n < 0) {
            Ok(r + n)
        } else {
            Ok(r)
        }
    }

    /// Power: a ^ b
    pub fn power(base: f64, exponent: f64) -> CalcResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        let result = base.powf(exponent);
        if result.is_nan() {
            Err(CalcError::Domain(DomainViolation::ComplexResult))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }

    /// Common logarithm: log₁₀ x
    pub fn log10(x: f64) -> CalcResult<f64> {
        Self::check_argument(x)?;
        Ok(x.log10())
    }

    /// Natural logarithm: ln x
    pub fn ln(x: f64) -> CalcResult<f64> {
        Self::check_argument(x)?;
        Ok(x.ln())
    }

    /// Arbitrary-base logarithm: ln x / ln b
    pub fn log(x: f64, base: f64) -> CalcResult<f64> {
        Self::check_argument(x)?;
        if base <= 0.0 || base == 1.0 {
            return Err(CalcError::Domain(DomainViolation::InvalidBase(base)));
        }
        Ok(x.ln() / base.ln())
    }

    fn check_argument(x: f64) -> CalcResult<()> {
        if x <= 0.0 {
            Err(CalcError::Domain(DomainViolation::NonPositiveArgument(x)))
        } else {
            Ok(())
        }
    }
}
