//! JavaScript lexer - tokenizes source text into tokens

mod comments;
mod escape;
mod helpers;
mod identifiers;
mod jsx;
mod numbers;
mod regex;
mod state;
mod strings;

use std::rc::Rc;

use state::LexerState;

use crate::syntax::position::Position;
use crate::syntax::token::Token;
use crate::syntax::token_type::{TokenType, lookup_ident};

use helpers::{is_id_start, is_line_terminator, is_whitespace};

/// Longest-match punctuator table. Entries of equal prefix must be ordered
/// longest first.
const PUNCTUATORS: &[(&str, TokenType)] = &[
    (">>>=", TokenType::ShiftRightUnsignedAssign),
    ("...", TokenType::Ellipsis),
    ("===", TokenType::StrictEq),
    ("!==", TokenType::StrictNotEq),
    ("**=", TokenType::StarStarAssign),
    ("<<=", TokenType::ShiftLeftAssign),
    (">>=", TokenType::ShiftRightAssign),
    (">>>", TokenType::ShiftRightUnsigned),
    ("&&=", TokenType::AndAssign),
    ("||=", TokenType::OrAssign),
    ("??=", TokenType::CoalesceAssign),
    ("=>", TokenType::Arrow),
    ("==", TokenType::Eq),
    ("!=", TokenType::NotEq),
    ("<=", TokenType::Lte),
    (">=", TokenType::Gte),
    ("&&", TokenType::And),
    ("||", TokenType::Or),
    ("??", TokenType::Coalesce),
    ("?.", TokenType::OptionalChain),
    ("++", TokenType::PlusPlus),
    ("--", TokenType::MinusMinus),
    ("**", TokenType::StarStar),
    ("<<", TokenType::ShiftLeft),
    (">>", TokenType::ShiftRight),
    ("+=", TokenType::PlusAssign),
    ("-=", TokenType::MinusAssign),
    ("*=", TokenType::AsteriskAssign),
    ("/=", TokenType::SlashAssign),
    ("%=", TokenType::PercentAssign),
    ("&=", TokenType::AmpAssign),
    ("|=", TokenType::BarAssign),
    ("^=", TokenType::CaretAssign),
    ("=", TokenType::Assign),
    ("+", TokenType::Plus),
    ("-", TokenType::Minus),
    ("*", TokenType::Asterisk),
    ("/", TokenType::Slash),
    ("%", TokenType::Percent),
    ("<", TokenType::Lt),
    (">", TokenType::Gt),
    ("&", TokenType::Amp),
    ("|", TokenType::Bar),
    ("^", TokenType::Caret),
    ("~", TokenType::Tilde),
    ("!", TokenType::Bang),
    ("?", TokenType::Question),
    ("(", TokenType::LParen),
    (")", TokenType::RParen),
    ("{", TokenType::LBrace),
    ("}", TokenType::RBrace),
    ("[", TokenType::LBracket),
    ("]", TokenType::RBracket),
    (",", TokenType::Comma),
    (";", TokenType::Semicolon),
    (":", TokenType::Colon),
    (".", TokenType::Dot),
    ("@", TokenType::At),
];

/// Saved lexer cursor, used by the parser to rewind for JSX text and
/// by speculative lookahead.
#[derive(Debug, Clone)]
pub struct LexerCheckpoint {
    position: usize,
    line: usize,
    column: usize,
    state: LexerState,
    last_token: Option<TokenType>,
}

/// The JavaScript lexer
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Rc<[char]>,
    position: usize,
    line: usize,
    column: usize,
    state: LexerState,
    /// Last significant token, used to tell `/` division from a regex literal.
    last_token: Option<TokenType>,
    /// Track unterminated block comment error (position where /* started)
    unterminated_block_comment_pos: Option<Position>,
}

impl Lexer {
    pub fn new(input: impl AsRef<str>) -> Self {
        let input: Rc<[char]> = input.as_ref().chars().collect();
        Self {
            input,
            position: 0,
            line: 1,
            column: 0,
            state: LexerState::Normal,
            last_token: None,
            unterminated_block_comment_pos: None,
        }
    }

    pub fn checkpoint(&self) -> LexerCheckpoint {
        LexerCheckpoint {
            position: self.position,
            line: self.line,
            column: self.column,
            state: self.state.clone(),
            last_token: self.last_token,
        }
    }

    pub fn restore(&mut self, checkpoint: LexerCheckpoint) {
        self.position = checkpoint.position;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
        self.state = checkpoint.state;
        self.last_token = checkpoint.last_token;
        self.unterminated_block_comment_pos = None;
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Token {
        let newline_before = self.skip_ignorable();

        // Check if we encountered an unterminated block comment
        if let Some(error_pos) = self.unterminated_block_comment_pos.take() {
            return Token::new(
                TokenType::UnterminatedBlockComment,
                "",
                error_pos,
                self.cursor_position(),
            );
        }

        let mut token = self.lex_token();
        token.newline_before = newline_before;
        if token.token_type != TokenType::Eof {
            self.last_token = Some(token.token_type);
        }
        token
    }

    /// Lex the next token as a regular expression literal. Used by the
    /// parser when a `/` or `/=` sits where an expression must start.
    pub fn next_regex_token(&mut self) -> Token {
        let newline_before = self.skip_ignorable();
        let mut token = self.read_regex();
        token.newline_before = newline_before;
        self.last_token = Some(token.token_type);
        token
    }

    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.token_type == TokenType::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn lex_token(&mut self) -> Token {
        let start = self.cursor_position();

        let Some(ch) = self.current_char() else {
            self.clear_template_state();
            return Token::eof(start);
        };

        match ch {
            '`' => self.read_template_start(),
            '}' if self.at_template_resume() => self.read_template_continuation(),
            '"' | '\'' => self.read_string(ch),
            '/' if self.regex_allowed() => self.read_regex(),
            '#' if self.peek_char().is_some_and(is_id_start) => {
                self.read_char();
                let name = self.read_identifier();
                Token::new(
                    TokenType::PrivateName,
                    format!("#{name}"),
                    start,
                    self.cursor_position(),
                )
            }
            '.' if self.peek_char().is_some_and(|c| c.is_ascii_digit()) => {
                let raw = self.read_number();
                Token::new(TokenType::Number, raw, start, self.cursor_position())
            }
            c if c.is_ascii_digit() => {
                let raw = self.read_number();
                Token::new(TokenType::Number, raw, start, self.cursor_position())
            }
            c if is_id_start(c) => {
                let ident = self.read_identifier();
                let token_type = lookup_ident(&ident);
                Token::new(token_type, ident, start, self.cursor_position())
            }
            _ => self.read_punctuator(start),
        }
    }

    fn read_punctuator(&mut self, start: Position) -> Token {
        let Some((text, token_type)) = PUNCTUATORS
            .iter()
            .find(|(text, _)| self.matches_ahead(text))
            .copied()
        else {
            let ch = self.current_char().unwrap_or_default();
            self.read_char();
            return Token::new(
                TokenType::Illegal,
                ch.to_string(),
                start,
                self.cursor_position(),
            );
        };

        // `a?.5:b` is a conditional, not optional chaining.
        let (text, token_type) = if token_type == TokenType::OptionalChain
            && self.peek_n(2).is_some_and(|c| c.is_ascii_digit())
        {
            ("?", TokenType::Question)
        } else {
            (text, token_type)
        };

        for _ in 0..text.len() {
            self.read_char();
        }

        match token_type {
            TokenType::LBrace if self.in_template_context() => {
                self.increment_substitution_depth();
            }
            TokenType::RBrace if self.in_template_context() => {
                self.decrement_substitution_depth();
            }
            _ => {}
        }

        Token::new(token_type, text, start, self.cursor_position())
    }

    fn matches_ahead(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(offset, expected)| self.input.get(self.position + offset) == Some(&expected))
    }

    fn regex_allowed(&self) -> bool {
        self.last_token.is_none_or(TokenType::allows_regex_after)
    }

    pub(super) fn cursor_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub(super) fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    pub(super) fn peek_char(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    /// Look ahead n chars without advancing.
    /// n=1 is equivalent to peek_char() (next char), n=2 is the char after that.
    pub(super) fn peek_n(&self, n: usize) -> Option<char> {
        debug_assert!(n > 0, "peek_n expects n >= 1");
        self.input.get(self.position + n).copied()
    }

    pub(super) fn read_char(&mut self) {
        let Some(ch) = self.current_char() else {
            return;
        };
        // Column represents the position of current_char, not the next char.
        // CRLF counts as one line break on the '\n'.
        if ch == '\n' || (is_line_terminator(ch) && ch != '\r') {
            self.line += 1;
            self.column = 0;
        } else if ch == '\r' && self.peek_char() != Some('\n') {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    /// Skips whitespace and comments, returning whether a line terminator was crossed.
    fn skip_ignorable(&mut self) -> bool {
        let mut newline = false;

        // Hashbang line at the very start of the file.
        if self.position == 0 && self.current_char() == Some('#') && self.peek_char() == Some('!')
        {
            self.skip_line_comment();
        }

        loop {
            match self.current_char() {
                Some(c) if is_whitespace(c) => self.read_char(),
                Some(c) if is_line_terminator(c) => {
                    newline = true;
                    self.read_char();
                }
                Some('/') if self.peek_char() == Some('/') => self.skip_line_comment(),
                Some('/') if self.peek_char() == Some('*') => {
                    let comment_start = self.cursor_position();
                    let (closed, crossed) = self.skip_block_comment();
                    newline |= crossed;
                    if !closed {
                        self.unterminated_block_comment_pos = Some(comment_start);
                        break;
                    }
                }
                _ => break,
            }
        }

        newline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(input: &str) -> Vec<TokenType> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| t.token_type)
            .collect()
    }

    #[test]
    fn longest_match_punctuators() {
        assert_eq!(
            types("a >>>= b ?? c?.d"),
            vec![
                TokenType::Ident,
                TokenType::ShiftRightUnsignedAssign,
                TokenType::Ident,
                TokenType::Coalesce,
                TokenType::Ident,
                TokenType::OptionalChain,
                TokenType::Ident,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn optional_chain_before_digit_is_conditional() {
        assert_eq!(
            types("a?.5:b"),
            vec![
                TokenType::Ident,
                TokenType::Question,
                TokenType::Number,
                TokenType::Colon,
                TokenType::Ident,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn checkpoint_restore_replays_tokens() {
        let mut lexer = Lexer::new("foo(bar)");
        lexer.next_token();
        let checkpoint = lexer.checkpoint();
        let first = lexer.next_token();
        lexer.next_token();
        lexer.restore(checkpoint);
        assert_eq!(lexer.next_token(), first);
    }

    #[test]
    fn hashbang_is_skipped() {
        assert_eq!(
            types("#!/usr/bin/env node\nx"),
            vec![TokenType::Ident, TokenType::Eof]
        );
    }

    #[test]
    fn unterminated_block_comment_is_reported() {
        let tokens = Lexer::new("x /* never closed").tokenize();
        assert_eq!(tokens[1].token_type, TokenType::UnterminatedBlockComment);
    }
}
