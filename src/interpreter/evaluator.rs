/// Core evaluation types and the execution entry point.
///
/// Contains the runtime context, the result alias and `execute`.
pub mod core;

/// Statement evaluation.
///
/// Executes declarations (with declared-type checks), display statements and
/// nested blocks.
pub mod statement;

/// Expression evaluation.
///
/// Reduces an expression's token run to a single value with a strict
/// left-to-right fold.
pub mod expression;

/// Binary operator evaluation.
///
/// Implements the arithmetic and comparison operators.
pub mod binary;

pub use self::core::{Context, EvalResult, execute};
