use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the lowest precedence level: left-associative addition and
    /// subtraction, so `8 - 3 - 2` groups as `(8 - 3) - 2`.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        while let Some(op) = token_to_binary_operator(&self.current.token)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let operator = self.consume(self.current.token)?;
            let right = self.parse_term()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: operator.position };
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative `*` and `/`, so `20 / 4 / 5` groups as
    /// `(20 / 4) / 5`.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(op) = token_to_binary_operator(&self.current.token)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let operator = self.consume(self.current.token)?;
            let right = self.parse_factor()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: operator.position };
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that cannot appear between two operands.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
