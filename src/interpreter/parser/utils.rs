use std::iter::Peekable;

use crate::interpreter::lexer::Token;

/// Collects the tokens of a statement's expression.
///
/// Tokens are taken greedily up to, but not including, the next newline or
/// `}`. The terminator is left in place: a newline is skipped by the statement
/// loop, and a `}` closes the enclosing block. No validation happens here.
pub(in crate::interpreter::parser) fn parse_expression_tokens<'a, I>(tokens: &mut Peekable<I>)
                                                                     -> Vec<Token>
    where I: Iterator<Item = &'a Token>
{
    let mut expression = Vec::new();

    while let Some(token) = tokens.next_if(|t| !t.ends_expression()) {
        expression.push(token.clone());
    }

    expression
}
