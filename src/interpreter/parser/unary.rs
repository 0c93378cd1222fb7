use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a signed factor, an integer, or a parenthesized group.
    ///
    /// Prefix signs are right-associative and may repeat, so `-+-3` parses as
    /// `-(+(-3))`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | INTEGER
    ///             | "(" expr ")"
    /// ```
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        if let Some(op) = token_to_unary_operator(&self.current.token) {
            let operator = self.consume(self.current.token)?;
            let expr = self.parse_factor()?;
            return Ok(Expr::UnaryOp { op,
                                      expr: Box::new(expr),
                                      position: operator.position });
        }

        match self.current.token {
            token @ Token::Integer(value) => {
                let literal = self.consume(token)?;
                Ok(Expr::Number { value,
                                  position: literal.position })
            },
            Token::LParen => self.parse_grouping(),
            _ => Err(self.unexpected("an integer, '+', '-' or '('")),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expr ")"`
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.consume(Token::LParen)?;
        let expr = self.parse_expression()?;
        self.consume(Token::RParen)?;
        Ok(expr)
    }
}

/// Maps a token to the prefix operator it denotes, if any.
#[must_use]
pub const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Minus),
        _ => None,
    }
}
