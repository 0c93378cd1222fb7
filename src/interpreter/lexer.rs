use logos::Logos;
use tracing::trace;

use crate::error::ParseError;

/// Raw tokens recognized by the generated scanner.
///
/// Whitespace is skipped here; end of input is not a raw token and is added
/// by [`Lexer::next_token`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
#[logos(error = ScanError)]
enum RawToken {
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Failures reported by the generated scanner.
///
/// Unmatched input falls back to the default, `InvalidCharacter`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
enum ScanError {
    #[default]
    InvalidCharacter,
    LiteralTooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(ScanError::LiteralTooLarge)`: If the digits do not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Result<i64, ScanError> {
    lex.slice().parse().map_err(|_| ScanError::LiteralTooLarge)
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Integer tokens carry their value; every other token stands for exactly one
/// character, available through [`Token::symbol`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Integer(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Marks the end of the line. Repeated forever once reached.
    EndOfInput,
}

impl Token {
    /// Returns the literal character of a punctuation token.
    ///
    /// Integer literals and [`Token::EndOfInput`] have no single character and
    /// return `None`.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Star.symbol(), Some('*'));
    /// assert_eq!(Token::Integer(7).symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Integer(_) | Self::EndOfInput => None,
        }
    }

    /// Returns `true` when both tokens are of the same kind, ignoring any
    /// integer payload.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self, self.symbol()) {
            (Self::Integer(value), _) => write!(f, "integer {value}"),
            (_, Some(c)) => write!(f, "'{c}'"),
            _ => write!(f, "end of input"),
        }
    }
}

/// A token together with the position of its first character.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Spanned {
    /// The token itself.
    pub token:    Token,
    /// Zero-based character index in the source line.
    pub position: usize,
}

/// Lazy tokenizer over a single line of source text.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. Once the input
/// is exhausted every further call returns [`Token::EndOfInput`].
pub struct Lexer<'src> {
    source:    &'src str,
    inner:     logos::Lexer<'src, RawToken>,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: RawToken::lexer(source),
               exhausted: false }
    }

    /// Produces the next token.
    ///
    /// Whitespace is skipped. A maximal run of digits becomes one
    /// [`Token::Integer`]; each of `+ - * / ( )` becomes its own token.
    ///
    /// # Errors
    /// - [`ParseError::InvalidCharacter`] if the next non-whitespace character
    ///   starts no token.
    /// - [`ParseError::LiteralTooLarge`] if a run of digits does not fit in an
    ///   `i64`.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("12 +");
    /// assert_eq!(lexer.next_token().unwrap().token, Token::Integer(12));
    /// assert_eq!(lexer.next_token().unwrap().token, Token::Plus);
    /// assert_eq!(lexer.next_token().unwrap().token, Token::EndOfInput);
    /// assert_eq!(lexer.next_token().unwrap().token, Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Result<Spanned, ParseError> {
        if self.exhausted {
            return Ok(self.end_of_input());
        }

        let Some(raw) = self.inner.next() else {
            self.exhausted = true;
            return Ok(self.end_of_input());
        };

        let span = self.inner.span();
        let position = self.char_position(span.start);

        let token = match raw {
            Ok(RawToken::Integer(value)) => Token::Integer(value),
            Ok(RawToken::Plus) => Token::Plus,
            Ok(RawToken::Minus) => Token::Minus,
            Ok(RawToken::Star) => Token::Star,
            Ok(RawToken::Slash) => Token::Slash,
            Ok(RawToken::LParen) => Token::LParen,
            Ok(RawToken::RParen) => Token::RParen,
            Err(ScanError::LiteralTooLarge) => {
                return Err(ParseError::LiteralTooLarge { literal: self.inner.slice().to_string(),
                                                         position });
            },
            Err(ScanError::InvalidCharacter) => {
                let character = self.source[span.start..].chars()
                                                         .next()
                                                         .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::InvalidCharacter { character, position });
            },
        };

        trace!(%token, position, "lexed token");
        Ok(Spanned { token, position })
    }

    fn end_of_input(&self) -> Spanned {
        Spanned { token:    Token::EndOfInput,
                  position: self.source.chars().count(), }
    }

    /// Converts a byte offset reported by the scanner into a character index.
    fn char_position(&self, byte_offset: usize) -> usize {
        self.source[..byte_offset].chars().count()
    }
}

/// Tokenizes a whole line.
///
/// The returned vector always ends with exactly one [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first lexical error encountered.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("(1)").unwrap().into_iter().map(|s| s.token).collect();
/// assert_eq!(tokens, vec![Token::LParen, Token::Integer(1), Token::RParen, Token::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let spanned = lexer.next_token()?;
        tokens.push(spanned);
        if spanned.token == Token::EndOfInput {
            return Ok(tokens);
        }
    }
}
