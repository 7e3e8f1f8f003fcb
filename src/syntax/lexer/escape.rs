//! Escape sequence handling for string and template literals

use super::Lexer;

impl Lexer {
    /// Process an escape sequence after the backslash has been consumed,
    /// appending the cooked character(s) to `out`.
    pub(super) fn read_escape_sequence(&mut self, out: &mut String) {
        let Some(ch) = self.current_char() else {
            return;
        };
        self.read_char();

        match ch {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !self.current_char().is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            'x' => match self.read_hex_digits(2) {
                Some(c) => out.push(c),
                None => out.push('x'),
            },
            'u' => self.read_unicode_escape(out),
            // Line continuations contribute nothing.
            '\r' => {
                if self.current_char() == Some('\n') {
                    self.read_char();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            // Covers \' \" \\ \` \$ and non-escape characters alike.
            other => out.push(other),
        }
    }

    fn read_unicode_escape(&mut self, out: &mut String) {
        if self.current_char() == Some('{') {
            let start = self.position;
            self.read_char();
            let mut value: u32 = 0;
            let mut digits = 0;
            while let Some(d) = self.current_char().and_then(|c| c.to_digit(16)) {
                value = value.saturating_mul(16).saturating_add(d);
                digits += 1;
                self.read_char();
            }
            if digits > 0
                && self.current_char() == Some('}')
                && let Some(c) = char::from_u32(value)
            {
                self.read_char();
                out.push(c);
                return;
            }
            out.push('u');
            out.extend(self.input[start..self.position].iter());
            return;
        }

        let Some(high) = self.read_hex_value(4) else {
            out.push('u');
            return;
        };

        // Surrogate pairs arrive as two consecutive escapes.
        if (0xD800..0xDC00).contains(&high)
            && self.current_char() == Some('\\')
            && self.peek_char() == Some('u')
        {
            let checkpoint = self.position;
            let (line, column) = (self.line, self.column);
            self.read_char();
            self.read_char();
            if let Some(low) = self.read_hex_value(4)
                && (0xDC00..0xE000).contains(&low)
            {
                let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                if let Some(c) = char::from_u32(combined) {
                    out.push(c);
                    return;
                }
            }
            self.position = checkpoint;
            self.line = line;
            self.column = column;
        }

        out.push(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    fn read_hex_digits(&mut self, count: usize) -> Option<char> {
        self.read_hex_value(count).and_then(char::from_u32)
    }

    /// Consume exactly `count` hex digits, or nothing at all.
    fn read_hex_value(&mut self, count: usize) -> Option<u32> {
        let mut value = 0;
        for offset in 0..count {
            let digit = self.input.get(self.position + offset)?.to_digit(16)?;
            value = value * 16 + digit;
        }
        for _ in 0..count {
            self.read_char();
        }
        Some(value)
    }
}
