use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_, '_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators (`+ - * /`) are routed to `eval_scalar_op`,
    /// comparison operators to `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand (the running result of the fold).
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use miniscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::Int(3), &Value::Int(4), 1);
    /// assert_eq!(result.unwrap(), Value::Int(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        if op.is_arithmetic() {
            Self::eval_scalar_op(op, left, right, line)
        } else {
            Self::eval_comparison(op, left, right, line)
        }
    }
}
