use std::iter::Peekable;

use tracing::{debug, trace};

use crate::{
    ast::{DataType, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{block::parse_block, utils::parse_expression_tokens},
    },
};

/// Parses a single statement, or skips input that does not form one.
///
/// A statement may be one of:
/// - a variable declaration (`int: x => ...`).
/// - a display statement (`display ...`).
/// - a block (`start { ... }`).
///
/// Every call consumes at least one token. `None` means the consumed tokens
/// did not produce a statement; this is not an error.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the next unparsed token.
///
/// # Returns
/// The parsed [`Statement`], if one was recognized.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = *tokens.peek()?;

    match token.kind {
        TokenKind::DataType => parse_variable_declaration(tokens),
        TokenKind::Keyword if token.lexeme == "display" => Some(parse_display(tokens)),
        TokenKind::Keyword if token.lexeme == "start" => parse_start(tokens),
        _ => {
            trace!(line = token.line,
                   kind = ?token.kind,
                   lexeme = %token.lexeme,
                   "token does not start a statement, skipped");
            tokens.next();
            None
        },
    }
}

/// Parses a declaration of the form `<type> : <identifier> => <expression>`.
///
/// The type token is always consumed. If it is not followed by `:` and an
/// identifier, nothing else is consumed so the following tokens are looked at
/// again. If the `=>` is missing, the header is consumed and the declaration
/// is dropped.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let type_token = tokens.next()?;

    let mut lookahead = tokens.clone();
    let has_header = matches!(lookahead.next(), Some(t) if t.kind == TokenKind::Colon)
                     && matches!(lookahead.next(), Some(t) if t.kind == TokenKind::Identifier);
    if !has_header {
        trace!(line = type_token.line, "type name without ': <identifier>', skipped");
        return None;
    }

    tokens.next();
    let name = tokens.next()?.lexeme.clone();

    if !tokens.peek().is_some_and(|t| t.kind == TokenKind::Assign) {
        debug!(line = type_token.line, name = %name, "declaration without '=>' skipped");
        return None;
    }
    tokens.next();

    let Ok(declared_type) = type_token.lexeme.parse::<DataType>() else {
        debug!(line = type_token.line, lexeme = %type_token.lexeme, "unknown type name, skipped");
        return None;
    };

    Some(Statement::VariableDeclaration { declared_type,
                                          name,
                                          expression: parse_expression_tokens(tokens),
                                          line: type_token.line })
}

/// Parses `display <expression>`.
fn parse_display<'a, I>(tokens: &mut Peekable<I>) -> Statement
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = tokens.next().map_or(0, |t| t.line);

    Statement::Display { expression: parse_expression_tokens(tokens),
                         line }
}

/// Parses `start { ... }`. A `start` that is not followed by `{` is dropped.
fn parse_start<'a, I>(tokens: &mut Peekable<I>) -> Option<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = tokens.next()?.line;

    if !tokens.peek().is_some_and(|t| t.kind == TokenKind::OpenBrace) {
        trace!(line, "'start' without '{{', skipped");
        return None;
    }
    tokens.next();

    Some(parse_block(tokens, line))
}
