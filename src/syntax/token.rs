use std::fmt;

use super::position::{Position, Span};
use super::token_type::TokenType;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    /// Source text for operators and identifiers; the cooked value for
    /// string and template tokens.
    pub literal: String,
    pub position: Position,
    pub end_position: Position,
    /// Set when a line terminator separates this token from the previous one.
    pub newline_before: bool,
}

impl Token {
    pub fn new(
        token_type: TokenType,
        literal: impl Into<String>,
        position: Position,
        end_position: Position,
    ) -> Self {
        Self {
            token_type,
            literal: literal.into(),
            position,
            end_position,
            newline_before: false,
        }
    }

    pub fn eof(position: Position) -> Self {
        Self::new(TokenType::Eof, "", position, position)
    }

    pub fn span(&self) -> Span {
        Span::new(self.position, self.end_position)
    }

    /// Identifiers and reserved words both qualify as property names.
    pub fn is_identifier_name(&self) -> bool {
        self.token_type == TokenType::Ident || self.token_type.is_keyword()
    }

    /// An identifier token with exactly this text (contextual keywords).
    pub fn is_contextual(&self, word: &str) -> bool {
        self.token_type == TokenType::Ident && self.literal == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?}, {})",
            self.token_type, self.literal, self.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(token_type: TokenType, literal: &str) -> Token {
        Token::new(token_type, literal, Position::new(1, 5), Position::new(1, 8))
    }

    #[test]
    fn test_token_new() {
        let tok = token(TokenType::Let, "let");
        assert_eq!(tok.token_type, TokenType::Let);
        assert_eq!(tok.literal, "let");
        assert_eq!(tok.position.line, 1);
        assert_eq!(tok.position.column, 5);
        assert!(!tok.newline_before);
    }

    #[test]
    fn test_token_identifier_name() {
        assert!(token(TokenType::Ident, "foo").is_identifier_name());
        assert!(token(TokenType::Default, "default").is_identifier_name());
        assert!(!token(TokenType::Plus, "+").is_identifier_name());
    }

    #[test]
    fn test_token_contextual() {
        assert!(token(TokenType::Ident, "async").is_contextual("async"));
        assert!(!token(TokenType::Ident, "asink").is_contextual("async"));
    }

    #[test]
    fn test_token_display() {
        let s = format!("{}", token(TokenType::Let, "let"));
        assert!(s.contains("let"));
        assert!(s.contains("1:5"));
    }
}
