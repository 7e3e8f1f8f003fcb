//! Number literal lexing
//!
//! Supports:
//! - Decimal integers and floats: 42, 3.14, .5, 2.5e10, 1.5e-3
//! - Hexadecimal, octal and binary: 0xFF, 0o17, 0b1010
//! - Numeric separators: 1_000_000
//! - BigInt suffix: 10n

use super::{Lexer, helpers::is_id_part};

impl Lexer {
    /// Returns the raw source text of the literal.
    pub(super) fn read_number(&mut self) -> String {
        let start = self.position;

        let radix_prefix = self.current_char() == Some('0')
            && matches!(
                self.peek_char(),
                Some('x' | 'X' | 'o' | 'O' | 'b' | 'B')
            );

        if radix_prefix {
            self.read_char(); // '0'
            self.read_char(); // radix letter
            self.consume_while(|c| c.is_ascii_hexdigit() || c == '_');
        } else {
            self.consume_while(|c| c.is_ascii_digit() || c == '_');

            if self.current_char() == Some('.') {
                self.read_char();
                self.consume_while(|c| c.is_ascii_digit() || c == '_');
            }

            if matches!(self.current_char(), Some('e' | 'E')) {
                self.read_char();
                if matches!(self.current_char(), Some('+' | '-')) {
                    self.read_char();
                }
                self.consume_while(|c| c.is_ascii_digit() || c == '_');
            }
        }

        if self.current_char() == Some('n') {
            self.read_char();
        }

        // `3in` is a syntax error in JS; keep the identifier glued on so the
        // parser reports it instead of silently splitting tokens.
        self.consume_while(is_id_part);

        self.input[start..self.position].iter().collect()
    }

    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.current_char().is_some_and(&predicate) {
            self.read_char();
        }
    }
}
