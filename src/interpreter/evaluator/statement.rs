use tracing::debug;

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_, '_> {
    /// Evaluates a sequence of statements in order.
    ///
    /// Used for the top-level program and for `start` blocks alike. A block
    /// opens no scope: its declarations land in the same environment as the
    /// surrounding code and stay visible after it ends.
    pub fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// - A declaration evaluates its initializer, checks the result against
    ///   the declared type and binds the name, replacing any earlier binding.
    /// - A display evaluates its expression and emits the rendered value.
    /// - A block evaluates its children.
    ///
    /// # Errors
    /// Propagates expression errors, and returns
    /// [`RuntimeError::TypeMismatch`] when a declaration's value does not fit
    /// its declared type.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::VariableDeclaration { declared_type,
                                             name,
                                             expression,
                                             line, } => {
                let value = self.eval_expression(expression, *line)?;

                if !declared_type.accepts(&value) {
                    return Err(RuntimeError::TypeMismatch { name:     name.clone(),
                                                            expected: *declared_type,
                                                            found:    value.kind_name(),
                                                            line:     *line, });
                }

                debug!(line, name = %name, %value, "bind");
                if let Some(previous) = self.environment.define(name, *declared_type, value) {
                    debug!(line,
                           name = %name,
                           previous_type = %previous.declared_type,
                           previous = %previous.value,
                           "redeclaration replaced earlier binding");
                }
                Ok(())
            },
            Statement::Display { expression, line } => {
                let rendered = self.eval_expression(expression, *line)?.to_string();
                debug!(line, output = %rendered, "display");
                self.emit(&rendered);
                Ok(())
            },
            Statement::Block { statements, .. } => self.eval_block(statements),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::DataType,
        error::ErrorKind,
        interpreter::{
            environment::Environment, evaluator::core::execute, lexer::tokenize, parser::parse,
            value::Value,
        },
    };

    fn run(source: &str) -> (Environment, Vec<String>, Result<(), ErrorKind>) {
        let mut environment = Environment::new();
        let mut output: Vec<String> = Vec::new();
        let result = execute(&parse(&tokenize(source)), &mut environment, &mut output);
        (environment, output, result.map_err(|e| e.kind()))
    }

    #[test]
    fn declared_numbers_keep_their_exact_value() {
        let (env, _, result) = run("int: a => 42\nfloat: b => 0.25\nfloat: c => 5");

        assert_eq!(result, Ok(()));
        assert_eq!(env.value("a"), Some(&Value::Int(42)));
        assert_eq!(env.value("b"), Some(&Value::Float(0.25)));
        assert_eq!(env.value("c"), Some(&Value::Int(5)));
        assert_eq!(env.get("c").map(|b| b.declared_type), Some(DataType::Float));
    }

    #[test]
    fn type_mismatches() {
        for source in ["string: s => 5",
                       "int: i => 2.5",
                       "int: i => \"5\"",
                       "boolean: b => 1",
                       "float: f => true",
                       "int: i => 7 / 2"]
        {
            assert_eq!(run(source).2, Err(ErrorKind::TypeMismatch), "{source}");
        }
    }

    #[test]
    fn block_shares_the_environment() {
        let (env, output, result) = run("start {\n int: n => 1\n start {\n display n\n int: m => n + 1\n }\n}\ndisplay m");

        assert_eq!(result, Ok(()));
        assert_eq!(output, vec!["1", "2"]);
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn redeclaration_overwrites() {
        let (env, output, result) = run("int: x => 1\ndisplay x\nstring: x => \"one\"\ndisplay x");

        assert_eq!(result, Ok(()));
        assert_eq!(output, vec!["1", "one"]);
        assert_eq!(env.get("x").map(|b| b.declared_type), Some(DataType::String));
    }

    #[test]
    fn error_stops_execution_but_keeps_earlier_effects() {
        let (env, output, result) = run("display 1\nint: a => 2\ndisplay nope\ndisplay 3\nint: b => 4");

        assert_eq!(result, Err(ErrorKind::UndefinedVariable));
        assert_eq!(output, vec!["1"]);
        assert_eq!(env.value("a"), Some(&Value::Int(2)));
        assert_eq!(env.value("b"), None);
    }

    #[test]
    fn failed_declaration_does_not_bind() {
        let (env, _, result) = run("int: x => 1\nint: x => \"text\"");

        assert_eq!(result, Err(ErrorKind::TypeMismatch));
        assert_eq!(env.value("x"), Some(&Value::Int(1)));
    }
}
