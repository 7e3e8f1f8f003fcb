//! Regular expression literal lexing

use crate::syntax::position::Position;
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::{
    Lexer,
    helpers::{is_id_part, is_line_terminator},
};

impl Lexer {
    /// Read `/pattern/flags`. The token literal is the full source text.
    pub(super) fn read_regex(&mut self) -> Token {
        let start = self.cursor_position();
        let start_index = self.position;
        self.read_char(); // opening '/'

        let mut in_class = false;
        loop {
            match self.current_char() {
                None => return self.unterminated_regex(start, start_index),
                Some(c) if is_line_terminator(c) => {
                    return self.unterminated_regex(start, start_index);
                }
                Some('\\') => {
                    self.read_char();
                    if self.current_char().is_some_and(|c| !is_line_terminator(c)) {
                        self.read_char();
                    }
                }
                Some('[') => {
                    in_class = true;
                    self.read_char();
                }
                Some(']') => {
                    in_class = false;
                    self.read_char();
                }
                Some('/') if !in_class => {
                    self.read_char();
                    break;
                }
                Some(_) => self.read_char(),
            }
        }

        while self.current_char().is_some_and(is_id_part) {
            self.read_char();
        }

        let literal: String = self.input[start_index..self.position].iter().collect();
        Token::new(TokenType::Regex, literal, start, self.cursor_position())
    }

    fn unterminated_regex(&self, start: Position, start_index: usize) -> Token {
        let literal: String = self.input[start_index..self.position].iter().collect();
        Token::new(
            TokenType::UnterminatedRegex,
            literal,
            start,
            self.cursor_position(),
        )
    }
}
