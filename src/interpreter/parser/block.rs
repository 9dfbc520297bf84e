use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::parse_statements,
    },
};

/// Parses a block body delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// first `}` that no inner block claims, which is consumed. Reaching the end of
/// input first closes the block there.
///
/// Grammar: `block := "start" "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the `start` keyword.
///
/// # Returns
/// A `Statement::Block` containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> Statement
    where I: Iterator<Item = &'a Token> + Clone
{
    let statements = parse_statements(tokens, true);

    match tokens.next() {
        Some(token) if token.kind == TokenKind::CloseBrace => {},
        _ => trace!(line, "block opened here is closed by end of input"),
    }

    Statement::Block { statements, line }
}
