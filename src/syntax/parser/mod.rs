use crate::syntax::{
    diagnostic::{Diagnostic, UNEXPECTED_TOKEN},
    lexer::{Lexer, LexerCheckpoint},
    position::Span,
    program::Program,
    token::Token,
    token_type::TokenType,
};

mod class;
mod expression;
mod helpers;
mod jsx;
mod literal;
mod statement;

/// Recursive-descent parser with Pratt expression parsing.
///
/// Parsing never aborts: errors are collected in `errors` and the parser
/// resynchronizes at the next statement boundary.
pub struct Parser {
    pub(super) lexer: Lexer,
    pub(super) current_token: Token,
    pub(super) peek_token: Token,
    /// Lexer state immediately before `current_token`, used to re-lex `/`.
    pub(super) before_current: LexerCheckpoint,
    /// Lexer state immediately after `current_token`, used to rescan JSX text.
    pub(super) after_current: LexerCheckpoint,
    /// Disables `in` as a binary operator inside `for (...)` heads.
    pub(super) no_in: bool,
    pub errors: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let before_current = lexer.checkpoint();
        let current_token = lexer.next_token();
        let after_current = lexer.checkpoint();
        let peek_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
            peek_token,
            before_current,
            after_current,
            no_in: false,
            errors: Vec::new(),
        }
    }

    pub fn parse_program(&mut self) -> Program {
        let start = self.current_token.position;
        let mut program = Program::new();

        while self.current_token.token_type != TokenType::Eof {
            if self.current_token.token_type == TokenType::RBrace {
                self.errors.push(
                    Diagnostic::error("UNEXPECTED TOKEN")
                        .with_code(UNEXPECTED_TOKEN)
                        .with_span(self.current_token.span())
                        .with_message("Unexpected `}` outside of a block."),
                );
                self.next_token();
                continue;
            }
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program.span = Span::new(start, self.current_token.end_position);
        program
    }
}

#[cfg(test)]
mod parser_test;
