use logos::Logos;
use tracing::trace;

/// Classifies a lexical token in the source input.
///
/// Several spellings share one kind (every reserved word is a `Keyword`, every
/// operator an `Operator`); the exact text is kept in [`Token::lexeme`].
///
/// When a reserved word and the identifier pattern match the same text, the
/// reserved word wins. Longer matches still win overall, so `started` is one
/// identifier rather than `start` followed by `ed`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\f]+")]
pub enum TokenKind {
    /// Reserved words: `start`, `display`, `use`, `whatIf`, `alsoWhatIf`,
    /// `else`.
    #[token("start")]
    #[token("display")]
    #[token("use")]
    #[token("whatIf")]
    #[token("alsoWhatIf")]
    #[token("else")]
    Keyword,
    /// Type names used in declarations: `int`, `float`, `string`, `boolean`.
    #[token("int")]
    #[token("float")]
    #[token("string")]
    #[token("boolean")]
    DataType,
    /// `true` or `false`.
    #[token("true")]
    #[token("false")]
    Boolean,
    /// Variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `=>`
    #[token("=>")]
    Assign,
    /// Numeric literals such as `42` or `3.14`.
    #[regex(r"[0-9]+")]
    #[regex(r"[0-9]+\.[0-9]+")]
    Number,
    /// Double-quoted string literals on a single line.
    #[regex(r#""[^"\n]*""#)]
    String,
    /// Arithmetic and comparison operators.
    #[token("==")]
    #[token("!=")]
    #[token(">=")]
    #[token("<=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token(">")]
    #[token("<")]
    Operator,
    /// `{`
    #[token("{")]
    OpenBrace,
    /// `}`
    #[token("}")]
    CloseBrace,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// Line break; terminates statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        TokenKind::Newline
    })]
    Newline,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// A classified lexical unit: its kind, the exact source text, and the line
/// it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's classification.
    pub kind:   TokenKind,
    /// The matched source text.
    pub lexeme: String,
    /// 1-based source line.
    pub line:   usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// Returns `true` if this token is the reserved word `word`.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }

    /// Returns `true` for tokens that end a statement's expression.
    #[must_use]
    pub const fn ends_expression(&self) -> bool {
        matches!(self.kind, TokenKind::Newline | TokenKind::CloseBrace)
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// Tokenization never fails. Characters that match no token pattern (such as
/// `#`, `;` or a lone `=`) are dropped, and whitespace other than newlines is
/// discarded. Newlines are kept because they terminate statements.
///
/// # Example
/// ```
/// use miniscript::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("int: x => 5").into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::DataType,
///             TokenKind::Colon,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Number]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    loop {
        let line = lexer.extras.line;
        match lexer.next() {
            Some(Ok(kind)) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Some(Err(())) => trace!(line, dropped = lexer.slice(), "unmatched input dropped"),
            None => break,
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn declaration_tokens() {
        use TokenKind::{Assign, Colon, DataType, Identifier, Newline, Number};

        assert_eq!(kinds("float: ratio => 2.5\n"),
                   vec![DataType, Colon, Identifier, Assign, Number, Newline]);
        assert_eq!(lexemes("float: ratio => 2.5"), vec!["float", ":", "ratio", "=>", "2.5"]);
    }

    #[test]
    fn reserved_words_beat_identifiers() {
        use TokenKind::{Boolean, DataType, Identifier, Keyword};

        assert_eq!(kinds("start display use whatIf alsoWhatIf else"), vec![Keyword; 6]);
        assert_eq!(kinds("int float string boolean"), vec![DataType; 4]);
        assert_eq!(kinds("true false"), vec![Boolean; 2]);
        assert_eq!(kinds("started integer truth user"), vec![Identifier; 4]);
    }

    #[test]
    fn two_character_operators_win() {
        assert_eq!(lexemes("a >= b <= c == d != e > f < g"),
                   vec!["a", ">=", "b", "<=", "c", "==", "d", "!=", "e", ">", "f", "<", "g"]);
    }

    #[test]
    fn strings_keep_their_quotes() {
        let tokens = tokenize(r#"display "hello world""#);

        assert_eq!(tokens[1], Token::new(TokenKind::String, "\"hello world\"", 1));
    }

    #[test]
    fn unmatched_characters_are_dropped() {
        assert_eq!(lexemes("# note; x = 1"), vec!["note", "x", "1"]);
        assert!(tokenize("@ ; # ?").is_empty());
    }

    #[test]
    fn punctuation_and_braces() {
        use TokenKind::{CloseBrace, Dot, Identifier, Keyword, OpenBrace};

        assert_eq!(kinds("start { use.x }"),
                   vec![Keyword, OpenBrace, Keyword, Dot, Identifier, CloseBrace]);
    }

    #[test]
    fn lines_are_tracked() {
        let tokens = tokenize("int: a => 1\n\ndisplay a");
        let display = tokens.iter().find(|t| t.is_keyword("display")).unwrap();

        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[5].kind, TokenKind::Newline);
        assert_eq!(tokens[5].line, 1);
        assert_eq!(display.line, 3);
    }
}
