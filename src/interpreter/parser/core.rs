use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexer, Spanned, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a single line.
///
/// The parser owns its [`Lexer`] and keeps exactly one token of lookahead.
/// Tokens are pulled lazily, so a lexical error late in the line is only
/// reported once the parser reaches it.
///
/// Grammar:
/// ```text
///     line   := expr EOF
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := ("+" | "-") factor | INTEGER | "(" expr ")"
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    /// The lookahead token.
    pub(in crate::interpreter::parser) current: Spanned,
}

impl<'src> Parser<'src> {
    /// Creates a parser for `source` and reads the first lookahead token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token is invalid.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses the whole line into a syntax tree.
    ///
    /// After the top-level expression the next token must be
    /// [`Token::EndOfInput`]; anything else is reported instead of being
    /// silently dropped.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] for any grammar violation.
    /// - [`ParseError::UnexpectedTrailingTokens`] if input remains after a
    ///   complete expression.
    /// - Any lexical error raised while reading tokens.
    ///
    /// # Example
    /// ```
    /// use intcalc::{error::ParseError, interpreter::parser::core::Parser};
    ///
    /// let tree = Parser::new("2 * (3 + 4)").unwrap().parse().unwrap();
    /// assert_eq!(tree.to_string(), "(2 * (3 + 4))");
    ///
    /// let err = Parser::new("3 4").unwrap().parse().unwrap_err();
    /// assert!(matches!(err, ParseError::UnexpectedTrailingTokens { position: 2, .. }));
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        match self.current {
            Spanned { token: Token::EndOfInput,
                      .. } => {
                debug!(%expr, "parsed expression");
                Ok(expr)
            },
            Spanned { token, position } => {
                Err(ParseError::UnexpectedTrailingTokens { found: token,
                                                           position })
            },
        }
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// Integer payloads are ignored when comparing. On success the next token
    /// is pulled from the lexer and the consumed token is returned. This is
    /// the only place where the parser advances.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] naming the expected and the actual
    ///   token on mismatch.
    /// - Any lexical error raised while reading the next token.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  expected: Token)
                                                  -> ParseResult<Spanned> {
        if !self.current.token.same_kind(&expected) {
            return Err(self.unexpected(&expected_description(expected)));
        }
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Builds an [`ParseError::UnexpectedToken`] for the current lookahead.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found:    self.current.token,
                                      position: self.current.position, }
    }
}

fn expected_description(token: Token) -> String {
    match token {
        Token::Integer(_) => "an integer".to_string(),
        other => other.to_string(),
    }
}
