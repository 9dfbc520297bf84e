/// Runtime errors.
///
/// Contains all error types that can be raised while a program executes:
/// undefined variables, declared-type mismatches, malformed expressions,
/// unknown operators, and arithmetic failures such as division by zero.
///
/// Lexing and parsing never fail, so there is no separate parse error type.
pub mod runtime_error;

pub use runtime_error::{ErrorKind, RuntimeError};
