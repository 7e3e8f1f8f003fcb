//! Comment handling

use super::{Lexer, helpers::is_line_terminator};

impl Lexer {
    /// Skip a block comment (`/* ... */`). Block comments do not nest.
    /// Entry: current_char is '/' and peek_char is '*' (this function consumes both).
    /// Returns `(closed, contained_newline)`; `closed` is false when EOF was reached.
    pub(super) fn skip_block_comment(&mut self) -> (bool, bool) {
        debug_assert!(
            self.current_char() == Some('/') && self.peek_char() == Some('*'),
            "skip_block_comment expects current_char == '/' and peek_char == '*'"
        );
        self.read_char(); // consume '/'
        self.read_char(); // consume '*'

        let mut newline = false;
        while let Some(ch) = self.current_char() {
            if ch == '*' && self.peek_char() == Some('/') {
                self.read_char();
                self.read_char();
                return (true, newline);
            }
            newline |= is_line_terminator(ch);
            self.read_char();
        }

        (false, newline)
    }

    /// Skip a `//` comment up to, not including, the line terminator.
    pub(super) fn skip_line_comment(&mut self) {
        while self.current_char().is_some_and(|c| !is_line_terminator(c)) {
            self.read_char();
        }
    }
}
