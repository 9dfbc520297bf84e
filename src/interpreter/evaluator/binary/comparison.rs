use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// Maps a comparison operator and the ordering of its operands to the final
/// boolean.
///
/// `None` stands for unordered operands (a NaN float); only `!=` holds for
/// those. Returns `None` for arithmetic operators.
#[must_use]
pub fn comparison_op_result(op: BinaryOperator, ordering: Option<Ordering>) -> Option<bool> {
    use Ordering::{Equal, Greater, Less};

    Some(match op {
        BinaryOperator::Equal => ordering == Some(Equal),
        BinaryOperator::NotEqual => ordering != Some(Equal),
        BinaryOperator::Greater => ordering == Some(Greater),
        BinaryOperator::Less => ordering == Some(Less),
        BinaryOperator::GreaterEqual => matches!(ordering, Some(Greater | Equal)),
        BinaryOperator::LessEqual => matches!(ordering, Some(Less | Equal)),
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => return None,
    })
}

impl Context<'_, '_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Both operands must be of the same kind, except that an integer and a
    /// float may be compared (the integer is widened). Strings compare
    /// lexicographically and `false` orders before `true`.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownOperator`] if `op` is an arithmetic operator.
    /// - [`RuntimeError::ArithmeticError`] if the operands cannot be compared.
    ///
    /// # Example
    /// ```
    /// use miniscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &Value::Float(3.0), &Value::Int(5), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        use Value::{Bool, Float, Int, Str};

        let ordering = match (left, right) {
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (Str(a), Str(b)) => Some(a.cmp(b)),
            (Bool(a), Bool(b)) => Some(a.cmp(b)),
            (Int(_) | Float(_), Int(_) | Float(_)) => left.as_float(line)?.partial_cmp(&right.as_float(line)?),
            _ => {
                return Err(RuntimeError::arithmetic(format!("cannot compare {} {op} {}",
                                                            left.kind_name(),
                                                            right.kind_name()),
                                                    line));
            },
        };

        comparison_op_result(op, ordering).map(Value::Bool)
                                           .ok_or_else(|| RuntimeError::unknown_operator(op, line))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn compare(op: &str, left: Value, right: Value) -> Result<bool, RuntimeError> {
        let op = BinaryOperator::from_lexeme(op).unwrap();
        match Context::eval_comparison(op, &left, &right, 1)? {
            Value::Bool(b) => Ok(b),
            other => panic!("comparison produced {other:?}"),
        }
    }

    #[test]
    fn integers() {
        assert_eq!(compare(">", Value::Int(5), Value::Int(3)), Ok(true));
        assert_eq!(compare("<", Value::Int(5), Value::Int(3)), Ok(false));
        assert_eq!(compare(">=", Value::Int(3), Value::Int(3)), Ok(true));
        assert_eq!(compare("<=", Value::Int(4), Value::Int(3)), Ok(false));
        assert_eq!(compare("==", Value::Int(3), Value::Int(3)), Ok(true));
        assert_eq!(compare("!=", Value::Int(3), Value::Int(3)), Ok(false));
    }

    #[test]
    fn mixed_numbers_widen() {
        assert_eq!(compare("==", Value::Int(2), Value::Float(2.0)), Ok(true));
        assert_eq!(compare("<", Value::Float(1.5), Value::Int(2)), Ok(true));
        assert_eq!(compare(">", Value::Int(9_007_199_254_740_993), Value::Float(1.5)), Ok(true));
    }

    #[test]
    fn strings_and_booleans() {
        assert_eq!(compare("<", Value::from("apple"), Value::from("banana")), Ok(true));
        assert_eq!(compare("!=", Value::from("a"), Value::from("b")), Ok(true));
        assert_eq!(compare("==", Value::Bool(false), Value::Bool(false)), Ok(true));
        assert_eq!(compare(">", Value::Bool(true), Value::Bool(false)), Ok(true));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Value::Float(f64::NAN);

        assert_eq!(compare("==", nan.clone(), nan.clone()), Ok(false));
        assert_eq!(compare("!=", nan.clone(), nan.clone()), Ok(true));
        assert_eq!(compare(">=", nan, Value::Int(0)), Ok(false));
    }

    #[test]
    fn arithmetic_operators_are_rejected() {
        let err = Context::eval_comparison(BinaryOperator::Add, &Value::Int(1), &Value::Int(2), 6).unwrap_err();

        assert_eq!(err, RuntimeError::UnknownOperator { operator: "+".to_string(),
                                                        line:     6, });
        assert_eq!(comparison_op_result(BinaryOperator::Div, Some(Ordering::Less)), None);
    }

    #[test]
    fn unlike_kinds_are_rejected() {
        let err = compare("==", Value::from("1"), Value::Int(1)).unwrap_err();

        assert_eq!(err.to_string(), "Error on line 1: Arithmetic error: cannot compare string == int.");
        assert!(compare("<", Value::Bool(true), Value::Float(1.0)).is_err());
    }
}
