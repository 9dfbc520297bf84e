use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{environment::Environment, output::OutputSink},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context borrows the environment that receives declarations and the sink
/// that receives displayed lines for the duration of one execution. Both are
/// owned by the caller, so independent runs never share state.
pub struct Context<'env, 'out> {
    /// Variables declared so far.
    pub environment: &'env mut Environment,
    sink:            &'out mut dyn OutputSink,
}

impl<'env, 'out> Context<'env, 'out> {
    /// Creates a context over `environment` that writes to `sink`.
    pub fn new(environment: &'env mut Environment, sink: &'out mut dyn OutputSink) -> Self {
        Self { environment, sink }
    }

    /// Hands one rendered line to the output sink.
    pub(in crate::interpreter::evaluator) fn emit(&mut self, line: &str) {
        self.sink.emit_line(line);
    }
}

/// Executes statements in document order.
///
/// Each statement runs to completion before the next one starts. The first
/// error stops execution and is returned; lines emitted before it have already
/// reached the sink, and declarations made before it remain in `environment`.
///
/// # Errors
/// Returns the first [`RuntimeError`] raised by any statement.
///
/// # Example
/// ```
/// use miniscript::interpreter::{
///     environment::Environment, evaluator::execute, lexer::tokenize, parser::parse,
///     value::Value,
/// };
///
/// let statements = parse(&tokenize("int: x => 4\ndisplay x * 2"));
/// let mut environment = Environment::new();
/// let mut output: Vec<String> = Vec::new();
///
/// execute(&statements, &mut environment, &mut output).unwrap();
///
/// assert_eq!(output, ["8"]);
/// assert_eq!(environment.value("x"), Some(&Value::Int(4)));
/// ```
pub fn execute(statements: &[Statement],
               environment: &mut Environment,
               sink: &mut dyn OutputSink)
               -> EvalResult<()> {
    Context::new(environment, sink).eval_block(statements)
}
