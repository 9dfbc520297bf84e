use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Token, TokenKind},
        value::Value,
    },
};

impl Context<'_, '_> {
    /// Evaluates an expression given as its raw token run.
    ///
    /// Operands and operators must alternate, starting and ending with an
    /// operand. The tokens are folded strictly left to right: each operator is
    /// applied to the running result and the operand that follows it. There is
    /// no precedence, so `2 + 3 * 4` is `(2 + 3) * 4`.
    ///
    /// # Parameters
    /// - `tokens`: The expression, without its terminating newline or `}`.
    /// - `line`: Line of the owning statement, used when `tokens` is empty.
    ///
    /// # Errors
    /// - [`RuntimeError::MalformedExpression`] if the run is empty, starts or
    ///   ends with an operator, has two operators or two operands in a row, or
    ///   contains a token that is neither operand nor operator.
    /// - [`RuntimeError::UndefinedVariable`] for an unbound identifier.
    /// - Errors from [`Context::eval_binary`].
    pub fn eval_expression(&self, tokens: &[Token], line: usize) -> EvalResult<Value> {
        let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
            return Err(RuntimeError::malformed("expression is empty", line));
        };
        if first.kind == TokenKind::Operator {
            return Err(RuntimeError::malformed(format!("expression starts with operator '{}'", first.lexeme),
                                               first.line));
        }
        if last.kind == TokenKind::Operator {
            return Err(RuntimeError::malformed(format!("expression ends with operator '{}'", last.lexeme),
                                               last.line));
        }

        let mut accumulator: Option<Value> = None;
        let mut pending: Option<&Token> = None;

        for token in tokens {
            if token.kind == TokenKind::Operator {
                if let Some(previous) = pending {
                    return Err(RuntimeError::malformed(format!("operator '{}' follows operator '{}'",
                                                               token.lexeme, previous.lexeme),
                                                       token.line));
                }
                pending = Some(token);
                continue;
            }

            let operand = self.eval_operand(token)?;
            accumulator = Some(match (accumulator, pending.take()) {
                (Some(left), Some(operator)) => {
                    let op = BinaryOperator::from_lexeme(&operator.lexeme).ok_or_else(|| {
                                 RuntimeError::unknown_operator(&operator.lexeme, operator.line)
                             })?;
                    Self::eval_binary(op, &left, &operand, operator.line)?
                },
                (Some(_), None) => {
                    return Err(RuntimeError::malformed(format!("missing operator before '{}'", token.lexeme),
                                                       token.line));
                },
                (None, _) => operand,
            });
        }

        accumulator.ok_or_else(|| RuntimeError::malformed("expression has no operands", line))
    }

    /// Resolves a single operand token to a value.
    ///
    /// - `Number`: `Int` without a decimal point, `Float` with one.
    /// - `String`: the text between the quotes.
    /// - `Boolean`: `true` or `false`.
    /// - `Identifier`: the value bound in the environment.
    fn eval_operand(&self, token: &Token) -> EvalResult<Value> {
        let line = token.line;
        let lexeme = token.lexeme.as_str();

        match token.kind {
            TokenKind::Number if lexeme.contains('.') => lexeme.parse::<f64>()
                                                               .map(Value::Float)
                                                               .map_err(|_| RuntimeError::malformed(format!("invalid number '{lexeme}'"), line)),
            TokenKind::Number => lexeme.parse::<i64>().map(Value::Int).map_err(|_| {
                                     RuntimeError::arithmetic(format!("integer literal {lexeme} is out of range"), line)
                                 }),
            TokenKind::String => {
                let text = lexeme.strip_prefix('"')
                                 .and_then(|s| s.strip_suffix('"'))
                                 .unwrap_or(lexeme);
                Ok(Value::from(text))
            },
            TokenKind::Boolean => Ok(Value::Bool(lexeme == "true")),
            TokenKind::Identifier => self.environment
                                         .value(lexeme)
                                         .cloned()
                                         .ok_or_else(|| RuntimeError::UndefinedVariable { name: lexeme.to_string(),
                                                                                          line }),
            _ => Err(RuntimeError::malformed(format!("unexpected '{lexeme}' in expression"), line)),
        }
    }
}
