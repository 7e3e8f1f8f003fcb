use crate::syntax::{
    block::Block,
    diagnostic::{
        Diagnostic, EXPECTED_EXPRESSION, ILLEGAL_CHARACTER, UNEXPECTED_TOKEN, UNTERMINATED_COMMENT,
        UNTERMINATED_LITERAL,
    },
    lexer::Lexer,
    position::{Position, Span},
    precedence::{Precedence, is_prefix_op, token_precedence},
    token_type::TokenType,
};

use super::Parser;

impl Parser {
    // Token navigation
    pub(super) fn next_token(&mut self) {
        self.before_current = std::mem::replace(&mut self.after_current, self.lexer.checkpoint());
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Rewind the lexer to the end of the current token and let `read` take
    /// the raw text that follows. Current and peek are re-lexed afterwards.
    pub(super) fn rescan_after_current<T>(&mut self, read: impl FnOnce(&mut Lexer) -> T) -> T {
        self.before_current = self.after_current.clone();
        self.lexer.restore(self.after_current.clone());
        let value = read(&mut self.lexer);
        self.current_token = self.lexer.next_token();
        self.after_current = self.lexer.checkpoint();
        self.peek_token = self.lexer.next_token();
        value
    }

    /// Re-lex a current `/` or `/=` as a regex literal. The lexer only sees
    /// the previous token, so `if (a) /re/` and `{}\n/re/` arrive as division.
    pub(super) fn rescan_current_as_regex(&mut self) {
        self.lexer.restore(self.before_current.clone());
        self.current_token = self.lexer.next_regex_token();
        self.after_current = self.lexer.checkpoint();
        self.peek_token = self.lexer.next_token();
    }

    pub(super) fn is_current_token(&self, token_type: TokenType) -> bool {
        self.current_token.token_type == token_type
    }

    pub(super) fn is_peek_token(&self, token_type: TokenType) -> bool {
        self.peek_token.token_type == token_type
    }

    pub(super) fn expect_peek(&mut self, token_type: TokenType) -> bool {
        if self.is_peek_token(token_type) {
            self.next_token();
            true
        } else {
            self.peek_error(token_type);
            false
        }
    }

    /// Consume a `;` if one follows. Missing semicolons are tolerated.
    pub(super) fn skip_optional_semicolon(&mut self) {
        if self.is_peek_token(TokenType::Semicolon) {
            self.next_token();
        }
    }

    /// Run `parse` with `in` re-enabled as an operator, e.g. inside
    /// parentheses nested in a `for` head.
    pub(super) fn allow_in<T>(&mut self, parse: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.no_in, false);
        let value = parse(self);
        self.no_in = saved;
        value
    }

    // Span/position utilities
    pub(super) fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.current_token.end_position)
    }

    // Precedence helpers
    pub(super) fn peek_precedence(&self) -> Precedence {
        token_precedence(&self.peek_token.token_type)
    }

    pub(super) fn peek_starts_expression(&self) -> bool {
        let token_type = self.peek_token.token_type;
        is_prefix_op(&token_type)
            || matches!(
                token_type,
                TokenType::Ident
                    | TokenType::PrivateName
                    | TokenType::Number
                    | TokenType::String
                    | TokenType::Regex
                    | TokenType::NoSubstitutionTemplate
                    | TokenType::TemplateHead
                    | TokenType::LParen
                    | TokenType::LBracket
                    | TokenType::LBrace
                    | TokenType::Lt
                    | TokenType::Function
                    | TokenType::Class
                    | TokenType::New
                    | TokenType::This
                    | TokenType::Super
                    | TokenType::Null
                    | TokenType::True
                    | TokenType::False
                    | TokenType::Import
                    | TokenType::Yield
            )
    }

    /// With the current token on `(` (or just before it when `open_is_peek`),
    /// scan ahead to the matching `)` and report whether `=>` follows.
    pub(super) fn arrow_follows_parens(&self, open_is_peek: bool) -> bool {
        let mut lexer = self.lexer.clone();
        let mut token = if open_is_peek {
            lexer.next_token()
        } else {
            self.peek_token.clone()
        };
        let mut depth = 1usize;
        loop {
            match token.token_type {
                TokenType::LParen | TokenType::LBracket | TokenType::LBrace => depth += 1,
                TokenType::RParen | TokenType::RBracket | TokenType::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                TokenType::Eof => return false,
                _ => {}
            }
            token = lexer.next_token();
        }
        let after = lexer.next_token();
        after.token_type == TokenType::Arrow && !after.newline_before
    }

    /// Whether the token after the peek token is `=>` (for `async x => ...`).
    pub(super) fn arrow_follows_peek(&self) -> bool {
        let mut lexer = self.lexer.clone();
        let after = lexer.next_token();
        after.token_type == TokenType::Arrow && !after.newline_before
    }

    pub(super) fn parse_block(&mut self) -> Block {
        let start = self.current_token.position;
        let mut statements = Vec::new();
        self.allow_in(|parser| {
            parser.next_token();
            while !parser.is_current_token(TokenType::RBrace)
                && !parser.is_current_token(TokenType::Eof)
            {
                if let Some(statement) = parser.parse_statement() {
                    statements.push(statement);
                }
                parser.next_token();
            }
        });

        if self.is_current_token(TokenType::Eof) {
            self.errors.push(
                Diagnostic::error("UNEXPECTED TOKEN")
                    .with_code(UNEXPECTED_TOKEN)
                    .with_span(self.current_token.span())
                    .with_message("Missing } before end of file."),
            );
        }

        Block {
            statements,
            span: self.span_from(start),
        }
    }

    // Error handling
    pub(super) fn no_prefix_parse_error(&mut self) {
        let message = match self.current_token.token_type {
            TokenType::Eof => "Unexpected end of file.".to_string(),
            other => format!("Expected an expression, got {}.", other),
        };
        self.errors.push(
            Diagnostic::error("EXPECTED EXPRESSION")
                .with_code(EXPECTED_EXPRESSION)
                .with_span(self.current_token.span())
                .with_message(message),
        );
    }

    /// Report a lexer error token sitting in the current position.
    pub(super) fn lexical_error(&mut self) {
        let (code, title, message) = match self.current_token.token_type {
            TokenType::UnterminatedString => (
                UNTERMINATED_LITERAL,
                "UNTERMINATED STRING",
                "String literal is missing its closing quote.",
            ),
            TokenType::UnterminatedTemplate => (
                UNTERMINATED_LITERAL,
                "UNTERMINATED TEMPLATE",
                "Template literal is missing its closing backtick.",
            ),
            TokenType::UnterminatedRegex => (
                UNTERMINATED_LITERAL,
                "UNTERMINATED REGEX",
                "Regular expression literal is missing its closing slash.",
            ),
            TokenType::UnterminatedBlockComment => (
                UNTERMINATED_COMMENT,
                "UNTERMINATED COMMENT",
                "Block comment is missing its closing */.",
            ),
            _ => (
                ILLEGAL_CHARACTER,
                "ILLEGAL CHARACTER",
                "Unexpected character in source.",
            ),
        };
        self.errors.push(
            Diagnostic::error(title)
                .with_code(code)
                .with_span(self.current_token.span())
                .with_message(message),
        );
    }

    pub(super) fn synchronize_after_error(&mut self) {
        // Stop on the statement's `;`, or before a `}` that may close an enclosing block.
        while !matches!(
            self.current_token.token_type,
            TokenType::Semicolon | TokenType::Eof
        ) && !matches!(
            self.peek_token.token_type,
            TokenType::RBrace | TokenType::Eof
        ) {
            self.next_token();
        }
    }

    pub(super) fn peek_error(&mut self, expected: TokenType) {
        self.errors.push(
            Diagnostic::error("UNEXPECTED TOKEN")
                .with_code(UNEXPECTED_TOKEN)
                .with_span(self.peek_token.span())
                .with_message(format!(
                    "Expected {}, got {}.",
                    expected, self.peek_token.token_type
                )),
        );
    }

    pub(super) fn current_error(&mut self, message: impl Into<String>) {
        self.errors.push(
            Diagnostic::error("UNEXPECTED TOKEN")
                .with_code(UNEXPECTED_TOKEN)
                .with_span(self.current_token.span())
                .with_message(message),
        );
    }
}
