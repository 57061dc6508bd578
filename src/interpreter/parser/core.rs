use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::core::lookup_constant,
        lexer::{Span, Token, tokenize},
        parser::{call::CallTarget, operator::ShuntingYard},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an expression into a tree.
///
/// This is the entry point for parsing. The expression is tokenized, then
/// converted with an operator-precedence (shunting-yard) pass whose output
/// stack holds subtrees. Built-in calls are resolved and their argument
/// counts checked here, so a parsed tree can only fail at evaluation time
/// for reasons that depend on values.
///
/// # Errors
/// - `Empty` for blank input.
/// - `InvalidExpression` for missing operands or operators.
/// - `InvalidBrackets` for unbalanced or mismatched brackets, and for a
///   function name not immediately followed by `(`.
/// - `UnknownOperator` for characters outside the language.
/// - `ArgumentCount` for a built-in called with the wrong number of
///   arguments.
///
/// # Example
/// ```
/// use seqfn::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::core::parse,
/// };
///
/// let expr = parse("1 + 2 * 3").unwrap();
/// let Expr::Binary { op, .. } = expr else { panic!("expected a binary node") };
///
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(parse("1 +").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let expr = Parser::new(&tokens, source.len()).parse_expression(Stop::End)?;
    tracing::trace!(source, ?expr, "parsed expression");

    Ok(expr)
}

/// Where an expression ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stop {
    /// At the end of the input.
    End,
    /// At a `,` or `]` outside any bracket opened by the expression itself.
    ListElement,
}

/// A cursor over the tokens of one expression.
pub(crate) struct Parser<'t> {
    tokens:   &'t [(Token, Span)],
    position: usize,
    end:      usize,
}

impl<'t> Parser<'t> {
    pub(crate) const fn new(tokens: &'t [(Token, Span)], end: usize) -> Self {
        Self { tokens,
               position: 0,
               end }
    }

    pub(crate) fn peek(&self) -> Option<&'t (Token, Span)> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Byte offset of the current token, or the end of the input.
    pub(crate) fn offset(&self) -> usize {
        self.peek().map_or(self.end, |(_, span)| span.start)
    }

    /// Parses tokens until `stop`, with a fresh pair of stacks.
    ///
    /// A `+` or `-` is unary when no operand can precede it: at the start,
    /// after an opening bracket, after another operator, or after a comma.
    pub(crate) fn parse_expression(&mut self, stop: Stop) -> ParseResult<Expr> {
        let mut yard = ShuntingYard::default();
        let mut expect_operand = true;

        while let Some((token, span)) = self.peek() {
            if stop == Stop::ListElement
               && yard.at_top_level()
               && matches!(token, Token::Comma | Token::RBracket)
            {
                break;
            }

            let position = span.start;

            match token {
                Token::Number(x) => {
                    self.advance();
                    yard.push_operand(Expr::Number(*x));
                    expect_operand = false;
                },
                Token::Parameter(index) => {
                    self.advance();
                    yard.push_operand(Expr::Parameter { index: *index,
                                                        position });
                    expect_operand = false;
                },
                Token::Identifier(name) => {
                    self.advance();
                    expect_operand = self.parse_identifier(name, span, &mut yard)?;
                },
                Token::LBracket => {
                    yard.push_operand(self.parse_list()?);
                    expect_operand = false;
                },
                Token::LParen | Token::LBrace => {
                    self.advance();
                    yard.open_group(token.clone(), None, position);
                    expect_operand = true;
                },
                Token::RParen | Token::RBrace => {
                    self.advance();
                    yard.close_group(token, position)?;
                    expect_operand = false;
                },
                Token::RBracket => {
                    return Err(ParseError::invalid_brackets("unmatched ']'", position));
                },
                Token::Comma => {
                    self.advance();
                    yard.comma(position)?;
                    expect_operand = true;
                },
                Token::Plus | Token::Minus if expect_operand => {
                    self.advance();
                    let op = if *token == Token::Plus {
                        UnaryOperator::Plus
                    } else {
                        UnaryOperator::Negate
                    };
                    yard.push_unary(op, position);
                },
                Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Percent
                | Token::Caret => {
                    self.advance();
                    yard.push_binary(binary_operator(token), position)?;
                    expect_operand = true;
                },
                Token::Ignored => self.advance(),
            }
        }

        yard.finish(self.offset())
    }

    /// Handles a name: a constant becomes a number, anything else must open
    /// a call with a `(` directly after it.
    ///
    /// Returns whether an operand is expected next.
    fn parse_identifier(&mut self,
                        name: &str,
                        span: &Span,
                        yard: &mut ShuntingYard)
                        -> ParseResult<bool> {
        if let Some(value) = lookup_constant(name) {
            yard.push_operand(Expr::Number(value));
            return Ok(false);
        }

        match self.peek() {
            Some((Token::LParen, next)) if next.start == span.end => {
                self.advance();
                yard.open_group(Token::LParen, Some(CallTarget::resolve(name)), span.start);
                Ok(true)
            },
            _ => Err(ParseError::invalid_brackets(format!("expected '(' directly after '{name}'"),
                                                  span.end)),
        }
    }
}

fn binary_operator(token: &Token) -> BinaryOperator {
    match token {
        Token::Minus => BinaryOperator::Sub,
        Token::Star => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        Token::Percent => BinaryOperator::Mod,
        Token::Caret => BinaryOperator::Pow,
        _ => BinaryOperator::Add,
    }
}
