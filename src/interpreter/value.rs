use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to exactly one of these. The only implicit
/// conversion between variants is `Int` to `Float` when an operator mixes the
/// two.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// Text, without the surrounding quotes.
    Str(String),
    /// `true` or `false`. Produced by literals and by comparison operators.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// The name of this value's kind as used in error messages.
    ///
    /// The names match the declaration keywords, so a type error reads
    /// `expected string but got int`.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers are always widened. Beyond `2^53` the result is the nearest
    /// representable `f64`.
    ///
    /// # Example
    /// ```
    /// use miniscript::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Int(10).as_float(1).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_float(1).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(x) => Ok(*x),
            Self::Int(n) => Ok(*n as f64),
            _ => Err(RuntimeError::arithmetic(format!("expected a number but got {}", self.kind_name()), line)),
        }
    }
}

impl fmt::Display for Value {
    /// Integers render in decimal, floats always show a fractional part
    /// (`5.0`, `2.5`), strings render unquoted, booleans as `true`/`false`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
