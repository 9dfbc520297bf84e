use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::statement::parse_statement,
    },
};

/// Parses a token sequence into a list of statements.
///
/// This is the entry point for parsing. It makes a single left-to-right pass
/// and never fails: tokens that do not begin a statement are skipped, and
/// expressions are stored unevaluated for the evaluator to check.
///
/// # Example
/// ```
/// use miniscript::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let statements = parse(&tokenize("start {\n display 1\n}"));
///
/// assert_eq!(statements.len(), 1);
/// assert!(matches!(&statements[0], Statement::Block { statements, .. } if statements.len() == 1));
/// ```
#[must_use]
pub fn parse(tokens: &[Token]) -> Vec<Statement> {
    let mut tokens = tokens.iter().peekable();
    parse_statements(&mut tokens, false)
}

/// Parses statements until the input ends.
///
/// When `in_block` is set, parsing also stops in front of a `}` so that the
/// caller can consume it as the block's closing brace. At top level a stray
/// `}` is skipped like any other token.
pub(in crate::interpreter::parser) fn parse_statements<'a, I>(tokens: &mut Peekable<I>,
                                                              in_block: bool)
                                                              -> Vec<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    while let Some(token) = tokens.peek() {
        if in_block && token.kind == TokenKind::CloseBrace {
            break;
        }

        if let Some(statement) = parse_statement(tokens) {
            statements.push(statement);
        }
    }

    statements
}
