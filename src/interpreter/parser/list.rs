use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Stop},
    },
};

impl Parser<'_> {
    /// Parses a list literal, starting at its `[`.
    ///
    /// Elements are numbers, nested list literals, or expressions starting
    /// with a name, such as `head(#0)`. An expression element extends to the
    /// next `,` or `]` outside its own brackets and is parsed independently
    /// of the enclosing expression. Elements are separated by commas or
    /// blanks.
    ///
    /// Grammar: `list := "[" (element ","?)* "]"`
    ///
    /// # Errors
    /// - `InvalidBrackets` if the closing `]` is missing.
    /// - `InvalidExpression` for an element that starts with anything else.
    pub(crate) fn parse_list(&mut self) -> ParseResult<Expr> {
        let open = self.offset();
        self.advance();

        let mut elements = Vec::new();

        loop {
            let Some((token, span)) = self.peek() else {
                return Err(ParseError::invalid_brackets("unclosed '['", open));
            };

            match token {
                Token::RBracket => {
                    self.advance();
                    return Ok(Expr::List(elements));
                },
                Token::Comma => {
                    self.advance();
                },
                Token::Number(x) => {
                    self.advance();
                    elements.push(Expr::Number(*x));
                },
                Token::LBracket => elements.push(self.parse_list()?),
                Token::Identifier(_) => elements.push(self.parse_expression(Stop::ListElement)?),
                other => {
                    return Err(ParseError::invalid_expression(format!("unexpected '{other}' in \
                                                                       list literal"),
                                                              span.start));
                },
            }
        }
    }
}
