use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_, '_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers stay integers, with overflow reported as an error. If
    /// either side is a float, the other is widened. Division is true
    /// division: an integer quotient that is not exact becomes a float.
    /// Division by zero is an error for every numeric combination.
    ///
    /// # Errors
    /// - [`RuntimeError::ArithmeticError`] for non-numeric operands, division
    ///   by zero, or integer overflow.
    /// - [`RuntimeError::UnknownOperator`] if `op` is a comparison operator.
    ///
    /// # Example
    /// ```
    /// use miniscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Context, value::Value},
    /// };
    ///
    /// let half = Context::eval_scalar_op(BinaryOperator::Div, &Value::Int(7), &Value::Int(2), 1);
    /// assert_eq!(half.unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Float, Int};

        match (left, right) {
            (Int(a), Int(b)) => Self::eval_integer_op(op, *a, *b, line),
            (Int(_) | Float(_), Int(_) | Float(_)) => {
                let left = left.as_float(line)?;
                let right = right.as_float(line)?;

                Ok(Float(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div => {
                                 if right == 0.0 {
                                     return Err(RuntimeError::arithmetic("division by zero", line));
                                 }
                                 left / right
                             },
                             _ => return Err(RuntimeError::unknown_operator(op, line)),
                         }))
            },
            _ => Err(RuntimeError::arithmetic(format!("cannot apply '{op}' to {} and {}",
                                                      left.kind_name(),
                                                      right.kind_name()),
                                              line)),
        }
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let overflow = || RuntimeError::arithmetic(format!("integer overflow in {a} {op} {b}"), line);

        match op {
            Add => a.checked_add(b).map(Value::Int).ok_or_else(overflow),
            Sub => a.checked_sub(b).map(Value::Int).ok_or_else(overflow),
            Mul => a.checked_mul(b).map(Value::Int).ok_or_else(overflow),
            Div => match a.checked_rem(b) {
                _ if b == 0 => Err(RuntimeError::arithmetic("division by zero", line)),
                Some(0) => a.checked_div(b).map(Value::Int).ok_or_else(overflow),
                #[allow(clippy::cast_precision_loss)]
                Some(_) => Ok(Value::Float(a as f64 / b as f64)),
                None => Err(overflow()),
            },
            _ => Err(RuntimeError::unknown_operator(op, line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::BinaryOperator::{self, Add, Div, Mul, Sub},
        error::ErrorKind,
        interpreter::{
            evaluator::core::Context,
            value::Value::{self, Bool, Float, Int},
        },
    };

    fn apply(op: BinaryOperator, left: Value, right: Value) -> Result<Value, ErrorKind> {
        Context::eval_scalar_op(op, &left, &right, 1).map_err(|e| e.kind())
    }

    #[test]
    fn integer_arithmetic() {
        assert_eq!(apply(Add, Int(2), Int(3)), Ok(Int(5)));
        assert_eq!(apply(Sub, Int(2), Int(3)), Ok(Int(-1)));
        assert_eq!(apply(Mul, Int(-4), Int(3)), Ok(Int(-12)));
        assert_eq!(apply(Div, Int(10), Int(2)), Ok(Int(5)));
        assert_eq!(apply(Div, Int(-9), Int(3)), Ok(Int(-3)));
    }

    #[test]
    fn inexact_integer_division_is_float() {
        assert_eq!(apply(Div, Int(7), Int(2)), Ok(Float(3.5)));
        assert_eq!(apply(Div, Int(1), Int(4)), Ok(Float(0.25)));
    }

    #[test]
    fn mixed_operands_widen() {
        assert_eq!(apply(Add, Int(1), Float(0.5)), Ok(Float(1.5)));
        assert_eq!(apply(Mul, Float(2.5), Int(2)), Ok(Float(5.0)));
        assert_eq!(apply(Div, Float(1.0), Int(4)), Ok(Float(0.25)));
    }

    #[test]
    fn large_integers_widen_without_error() {
        let big = Int(9_007_199_254_740_993);

        assert_eq!(apply(Add, big.clone(), Float(0.5)), Ok(Float(9_007_199_254_740_992.0)));
        assert_eq!(apply(Div, big, Int(2)), Ok(Float(4_503_599_627_370_496.0)));
        assert_eq!(apply(Mul, Int(9_007_199_254_740_992), Float(1.0)), Ok(Float(9_007_199_254_740_992.0)));
        assert!(apply(Sub, Int(i64::MAX), Float(1.0)).is_ok());
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(apply(Div, Int(10), Int(0)), Err(ErrorKind::ArithmeticError));
        assert_eq!(apply(Div, Float(1.5), Int(0)), Err(ErrorKind::ArithmeticError));
        assert_eq!(apply(Div, Int(3), Float(0.0)), Err(ErrorKind::ArithmeticError));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(apply(Add, Int(i64::MAX), Int(1)), Err(ErrorKind::ArithmeticError));
        assert_eq!(apply(Mul, Int(i64::MIN), Int(-1)), Err(ErrorKind::ArithmeticError));
        assert_eq!(apply(Div, Int(i64::MIN), Int(-1)), Err(ErrorKind::ArithmeticError));
    }

    #[test]
    fn comparison_operators_are_not_arithmetic() {
        use BinaryOperator::{Equal, Less};

        assert_eq!(apply(Equal, Int(1), Int(1)), Err(ErrorKind::UnknownOperator));
        assert_eq!(apply(Less, Float(1.0), Int(2)), Err(ErrorKind::UnknownOperator));
    }

    #[test]
    fn non_numeric_operands() {
        assert_eq!(apply(Add, Value::from("a"), Value::from("b")), Err(ErrorKind::ArithmeticError));
        assert_eq!(apply(Sub, Bool(true), Int(1)), Err(ErrorKind::ArithmeticError));
        assert_eq!(apply(Mul, Int(2), Value::from("x")), Err(ErrorKind::ArithmeticError));
    }
}
