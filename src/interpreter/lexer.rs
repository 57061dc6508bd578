use std::ops::Range;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Byte range of a token in the expression text.
pub type Span = Range<usize>;

/// Represents a lexical token in an expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Signs are never part of a numeric literal; the parser decides whether a
/// `+` or `-` is unary or binary from the token before it.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Function or constant names such as `head`, `PI` or `len2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Parameter references such as `#0`.
    #[regex(r"#[0-9]+", parse_parameter)]
    Parameter(usize),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Blanks between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the closing bracket that matches an opening one.
    #[must_use]
    pub const fn closing_bracket(&self) -> Option<Self> {
        match self {
            Self::LParen => Some(Self::RParen),
            Self::LBracket => Some(Self::RBracket),
            Self::LBrace => Some(Self::RBrace),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Parameter(index) => write!(f, "#{index}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::Comma => write!(f, ","),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits an expression into tokens paired with their spans.
///
/// # Errors
/// - `InvalidExpression` for a `#` that is not followed by an index.
/// - `UnknownOperator` for any other character outside the language.
///
/// # Example
/// ```
/// use seqfn::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("head(#0)").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("head".to_string()),
///                 Token::LParen,
///                 Token::Parameter(0),
///                 Token::RParen]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, Span)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(()) if lexer.slice().starts_with('#') => {
                return Err(ParseError::invalid_expression("parameter reference without a valid index",
                                                          span.start));
            },
            Err(()) => {
                return Err(ParseError::UnknownOperator { operator: lexer.slice().to_string(),
                                                         position: span.start, });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses the index of a parameter reference, skipping the leading `#`.
fn parse_parameter(lex: &logos::Lexer<Token>) -> Option<usize> {
    lex.slice()[1..].parse().ok()
}
