//! Identifier lexing

use super::{Lexer, helpers::is_id_part};

impl Lexer {
    pub(super) fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.current_char().is_some_and(is_id_part) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }
}
