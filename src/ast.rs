use std::{fmt, str::FromStr};

use crate::interpreter::{lexer::Token, value::Value};

/// A type name written in a declaration such as `int: x => 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `string`
    String,
    /// `boolean`
    Boolean,
}

impl DataType {
    /// Returns `true` if a variable declared with this type may hold `value`.
    ///
    /// The acceptance table is:
    ///
    /// | declared  | accepts          |
    /// |-----------|------------------|
    /// | `int`     | `Int`            |
    /// | `float`   | `Int` or `Float` |
    /// | `string`  | `Str`            |
    /// | `boolean` | `Bool`           |
    ///
    /// An `Int` accepted by `float` is stored unchanged.
    ///
    /// # Example
    /// ```
    /// use miniscript::{ast::DataType, interpreter::value::Value};
    ///
    /// assert!(DataType::Float.accepts(&Value::Int(5)));
    /// assert!(!DataType::Int.accepts(&Value::Float(5.0)));
    /// ```
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        matches!((self, value),
                 (Self::Int, Value::Int(_))
                 | (Self::Float, Value::Int(_) | Value::Float(_))
                 | (Self::String, Value::Str(_))
                 | (Self::Boolean, Value::Bool(_)))
    }

    /// The spelling of this type in source code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "string" => Ok(Self::String),
            "boolean" => Ok(Self::Boolean),
            other => Err(format!("unknown data type '{other}'")),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a parsed statement.
///
/// Expressions are kept as the raw token run that followed the statement's
/// keyword or `=>`; they are only checked and evaluated when the statement
/// executes.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A typed variable declaration: `int: x => 1 + 2`.
    VariableDeclaration {
        /// The declared type.
        declared_type: DataType,
        /// The name of the variable.
        name:          String,
        /// The unevaluated initializer.
        expression:    Vec<Token>,
        /// Line number in the source code.
        line:          usize,
    },
    /// Output of one expression: `display x`.
    Display {
        /// The unevaluated expression to display.
        expression: Vec<Token>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A `start { ... }` group. Blocks do not open a new scope.
    Block {
        /// The statements inside the braces, in source order.
        statements: Vec<Self>,
        /// Line number of the `start` keyword.
        line:       usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VariableDeclaration { line, .. } | Self::Display { line, .. } | Self::Block { line, .. } => {
                *line
            },
        }
    }
}

/// Represents a binary operator.
///
/// Operators are applied strictly left to right; none binds tighter than
/// another.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
}

impl BinaryOperator {
    /// Looks up the operator spelled by `lexeme`.
    #[must_use]
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        Some(match lexeme {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            ">" => Self::Greater,
            "<" => Self::Less,
            ">=" => Self::GreaterEqual,
            "<=" => Self::LessEqual,
            _ => return None,
        })
    }

    /// Returns `true` for `+ - * /`.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            Less => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
        };
        write!(f, "{operator}")
    }
}
