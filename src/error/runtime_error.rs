use thiserror::Error;

use crate::ast::DataType;

/// The category of a [`RuntimeError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`RuntimeError::UndefinedVariable`].
    UndefinedVariable,
    /// See [`RuntimeError::TypeMismatch`].
    TypeMismatch,
    /// See [`RuntimeError::MalformedExpression`].
    MalformedExpression,
    /// See [`RuntimeError::UnknownOperator`].
    UnknownOperator,
    /// See [`RuntimeError::ArithmeticError`].
    ArithmeticError,
}

/// Represents all errors that can occur while a program runs.
///
/// Every error is fatal: the statement that raised it and everything after it
/// is abandoned. Lines already displayed stay displayed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// An identifier has no binding in the environment.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration's value does not fit its declared type.
    #[error("Error on line {line}: Type error: variable '{name}' expected {expected} but got {found}.")]
    TypeMismatch {
        /// The name of the variable being declared.
        name:     String,
        /// The declared type.
        expected: DataType,
        /// The kind of value the initializer produced.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression is empty, begins or ends with an operator, or does not
    /// alternate operands and operators.
    #[error("Error on line {line}: Malformed expression: {details}.")]
    MalformedExpression {
        /// What is wrong with the expression.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operator lexeme has no evaluation rule.
    #[error("Error on line {line}: Unknown operator '{operator}'.")]
    UnknownOperator {
        /// The operator as written.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Division by zero, overflow, or an operator applied to operands it does
    /// not support.
    #[error("Error on line {line}: Arithmetic error: {details}.")]
    ArithmeticError {
        /// Details about the failed operation.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Self::UnknownOperator { .. } => ErrorKind::UnknownOperator,
            Self::ArithmeticError { .. } => ErrorKind::ArithmeticError,
        }
    }

    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::MalformedExpression { line, .. }
            | Self::UnknownOperator { line, .. }
            | Self::ArithmeticError { line, .. } => *line,
        }
    }

    pub(crate) fn malformed(details: impl Into<String>, line: usize) -> Self {
        Self::MalformedExpression { details: details.into(),
                                    line }
    }

    pub(crate) fn arithmetic(details: impl Into<String>, line: usize) -> Self {
        Self::ArithmeticError { details: details.into(),
                                line }
    }

    pub(crate) fn unknown_operator(operator: impl ToString, line: usize) -> Self {
        Self::UnknownOperator { operator: operator.to_string(),
                                line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = RuntimeError::TypeMismatch { name:     "s".to_string(),
                                               expected: DataType::String,
                                               found:    "int",
                                               line:     3, };

        assert_eq!(err.to_string(),
                   "Error on line 3: Type error: variable 's' expected string but got int.");
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn helpers_build_the_right_kind() {
        assert_eq!(RuntimeError::malformed("empty", 1).kind(), ErrorKind::MalformedExpression);
        assert_eq!(RuntimeError::arithmetic("division by zero", 2).to_string(),
                   "Error on line 2: Arithmetic error: division by zero.");
        assert_eq!(RuntimeError::unknown_operator("^", 4).to_string(),
                   "Error on line 4: Unknown operator '^'.");
    }
}
