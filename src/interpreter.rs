/// The environment module holds the variables of a program run.
///
/// An `Environment` maps each declared name to its declared type and current
/// value. It is created by the caller and passed into the evaluator, so
/// separate runs never see each other's variables.
pub mod environment;
/// The evaluator module executes statements and computes values.
///
/// The evaluator walks the statement tree in document order, folds each
/// expression left to right, checks declared types, and emits displayed
/// values to an output sink.
///
/// # Responsibilities
/// - Evaluates expressions with arithmetic and comparison operators.
/// - Binds declared variables after checking their declared type.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// classified tokens: reserved words, type names, literals, identifiers,
/// operators, punctuation and newlines.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   line.
/// - Gives reserved words precedence over identifiers.
/// - Drops characters that form no token instead of failing.
pub mod lexer;
/// The output module defines where displayed lines go.
pub mod output;
/// The parser module builds the statement tree from tokens.
///
/// The parser recognizes declarations, `display` statements and `start`
/// blocks. Expressions are kept as raw token runs for the evaluator.
///
/// # Responsibilities
/// - Converts tokens into `Statement` nodes, nesting blocks recursively.
/// - Skips tokens that do not begin a statement.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, floats, strings and booleans.
/// - Renders values for `display`.
/// - Widens integers to floats without losing precision.
pub mod value;
