//! JSX child text lexing
//!
//! JSX text cannot be tokenized with the normal rules (apostrophes, slashes
//! and backticks are plain characters there), so the parser rewinds the lexer
//! to the end of the `>` or `}` preceding the text and asks for it here.

use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::Lexer;

impl Lexer {
    /// Read raw text up to the next `<`, `{` or EOF. The literal is the raw text.
    pub fn read_jsx_text(&mut self) -> Token {
        let start = self.cursor_position();
        let start_index = self.position;
        while self.current_char().is_some_and(|c| c != '<' && c != '{') {
            self.read_char();
        }
        let literal: String = self.input[start_index..self.position].iter().collect();
        self.last_token = Some(TokenType::JsxText);
        Token::new(TokenType::JsxText, literal, start, self.cursor_position())
    }
}
