/// Parser entry points.
///
/// Provides `parse`, the public entry that turns a token slice into a list of
/// statements, and the statement-list loop shared with nested blocks.
pub mod core;

/// Statement parsing.
///
/// Recognizes declarations, `display` statements and `start` blocks, and
/// skips any token that begins none of them.
pub mod statement;

/// Block parsing.
///
/// Parses the body of a `start { ... }` block up to its closing brace.
pub mod block;

/// Shared helpers for the parser.
///
/// Collects the raw token run that forms a statement's expression.
pub(crate) mod utils;

pub use self::core::parse;
