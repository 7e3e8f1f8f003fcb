//! String and template literal lexing

use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::Lexer;

/// How a run of template characters ended.
enum TemplateChunkEnd {
    Backtick,
    Substitution,
    Eof,
}

impl Lexer {
    /// Read a `'` or `"` quoted string. The token literal is the cooked value.
    pub(super) fn read_string(&mut self, quote: char) -> Token {
        let start = self.cursor_position();
        self.read_char(); // opening quote

        let mut value = String::new();
        loop {
            match self.current_char() {
                None => {
                    return Token::new(
                        TokenType::UnterminatedString,
                        value,
                        start,
                        self.cursor_position(),
                    );
                }
                Some(c) if c == quote => {
                    self.read_char();
                    break;
                }
                Some('\n' | '\r') => {
                    return Token::new(
                        TokenType::UnterminatedString,
                        value,
                        start,
                        self.cursor_position(),
                    );
                }
                Some('\\') => {
                    self.read_char();
                    self.read_escape_sequence(&mut value);
                }
                Some(c) => {
                    value.push(c);
                    self.read_char();
                }
            }
        }

        Token::new(TokenType::String, value, start, self.cursor_position())
    }

    /// Read from an opening backtick up to the closing backtick or the first `${`.
    pub(super) fn read_template_start(&mut self) -> Token {
        let start = self.cursor_position();
        self.read_char(); // opening backtick

        let (value, end) = self.read_template_chunk();
        let token_type = match end {
            TemplateChunkEnd::Backtick => TokenType::NoSubstitutionTemplate,
            TemplateChunkEnd::Substitution => {
                // Invariant: depth = 1 because we consumed the '{' of '${' internally.
                self.enter_template_substitution();
                TokenType::TemplateHead
            }
            TemplateChunkEnd::Eof => TokenType::UnterminatedTemplate,
        };
        Token::new(token_type, value, start, self.cursor_position())
    }

    /// Resume template text at the `}` closing a substitution.
    pub(super) fn read_template_continuation(&mut self) -> Token {
        let start = self.cursor_position();
        self.read_char(); // closing '}'

        let (value, end) = self.read_template_chunk();
        let token_type = match end {
            TemplateChunkEnd::Substitution => TokenType::TemplateMiddle,
            TemplateChunkEnd::Backtick => {
                self.exit_template();
                TokenType::TemplateTail
            }
            TemplateChunkEnd::Eof => {
                self.exit_template();
                TokenType::UnterminatedTemplate
            }
        };
        Token::new(token_type, value, start, self.cursor_position())
    }

    fn read_template_chunk(&mut self) -> (String, TemplateChunkEnd) {
        let mut value = String::new();
        loop {
            match self.current_char() {
                None => return (value, TemplateChunkEnd::Eof),
                Some('`') => {
                    self.read_char();
                    return (value, TemplateChunkEnd::Backtick);
                }
                Some('$') if self.peek_char() == Some('{') => {
                    self.read_char();
                    self.read_char();
                    return (value, TemplateChunkEnd::Substitution);
                }
                Some('\\') => {
                    self.read_char();
                    self.read_escape_sequence(&mut value);
                }
                // Template values normalize CRLF and CR to LF.
                Some('\r') => {
                    self.read_char();
                    if self.current_char() == Some('\n') {
                        self.read_char();
                    }
                    value.push('\n');
                }
                Some(c) => {
                    value.push(c);
                    self.read_char();
                }
            }
        }
    }
}
