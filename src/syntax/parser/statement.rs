use crate::syntax::{
    expression::Expression,
    position::Position,
    precedence::Precedence,
    statement::{CatchClause, ForInit, Statement, SwitchCase, VariableDeclarator, VariableKind},
    token_type::TokenType,
};

use super::Parser;

impl Parser {
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        let statement = self.parse_statement_inner();
        if statement.is_none() {
            self.synchronize_after_error();
        }
        statement
    }

    fn parse_statement_inner(&mut self) -> Option<Statement> {
        match self.current_token.token_type {
            TokenType::Var | TokenType::Const => self.parse_variable_statement(),
            TokenType::Let if self.peek_starts_binding() => self.parse_variable_statement(),
            TokenType::Function => {
                let start = self.current_token.position;
                self.parse_function_statement(false, start)
            }
            TokenType::Ident
                if self.current_token.literal == "async"
                    && self.is_peek_token(TokenType::Function)
                    && !self.peek_token.newline_before =>
            {
                let start = self.current_token.position;
                self.next_token();
                self.parse_function_statement(true, start)
            }
            TokenType::Ident if self.is_peek_token(TokenType::Colon) => {
                self.parse_labeled_statement()
            }
            TokenType::Class => self.parse_class_statement(),
            TokenType::Return => self.parse_return_statement(),
            TokenType::Throw => self.parse_throw_statement(),
            TokenType::If => self.parse_if_statement(),
            TokenType::For => self.parse_for_statement(),
            TokenType::While => self.parse_while_statement(),
            TokenType::Do => self.parse_do_while_statement(),
            TokenType::Switch => self.parse_switch_statement(),
            TokenType::Try => self.parse_try_statement(),
            TokenType::Break | TokenType::Continue => self.parse_jump_statement(),
            TokenType::Import
                if !matches!(
                    self.peek_token.token_type,
                    TokenType::LParen | TokenType::Dot
                ) =>
            {
                self.parse_import_statement()
            }
            TokenType::Export => self.parse_export_statement(),
            TokenType::LBrace => Some(Statement::Block(self.parse_block())),
            TokenType::Semicolon => Some(Statement::Empty {
                span: self.current_token.span(),
            }),
            TokenType::Debugger => {
                let start = self.current_token.position;
                self.skip_optional_semicolon();
                Some(Statement::Debugger {
                    span: self.span_from(start),
                })
            }
            _ => self.parse_expression_statement(),
        }
    }

    fn peek_starts_binding(&self) -> bool {
        matches!(
            self.peek_token.token_type,
            TokenType::Ident | TokenType::LBracket | TokenType::LBrace | TokenType::Yield
        )
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Statement::Expression {
            expression,
            span: self.span_from(start),
        })
    }

    fn parse_variable_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        let (kind, declarators) = self.parse_variable_declarations()?;
        self.skip_optional_semicolon();
        Some(Statement::Variable {
            kind,
            declarators,
            span: self.span_from(start),
        })
    }

    /// Current token is `var`, `let` or `const`.
    fn parse_variable_declarations(&mut self) -> Option<(VariableKind, Vec<VariableDeclarator>)> {
        let kind = match self.current_token.token_type {
            TokenType::Let => VariableKind::Let,
            TokenType::Const => VariableKind::Const,
            _ => VariableKind::Var,
        };
        let mut declarators = Vec::new();
        loop {
            self.next_token();
            let target = self.parse_binding_target()?;
            let init = if self.is_peek_token(TokenType::Assign) {
                self.next_token();
                self.next_token();
                Some(self.parse_expression(Precedence::Sequence)?)
            } else {
                None
            };
            declarators.push(VariableDeclarator { target, init });
            if !self.is_peek_token(TokenType::Comma) {
                break;
            }
            self.next_token();
        }
        Some((kind, declarators))
    }

    /// Current token is `function`.
    fn parse_function_statement(&mut self, is_async: bool, start: Position) -> Option<Statement> {
        let function = self.parse_function(is_async, start)?;
        Some(Statement::Function {
            function,
            span: self.span_from(start),
        })
    }

    fn parse_class_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        let class = self.parse_class()?;
        Some(Statement::Class {
            class,
            span: self.span_from(start),
        })
    }

    fn parse_labeled_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        let label = self.current_token.literal.clone();
        self.next_token();
        self.next_token();
        let body = self.parse_statement_inner()?;
        Some(Statement::Labeled {
            label,
            body: Box::new(body),
            span: self.span_from(start),
        })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        let value = if self.peek_token.newline_before
            || matches!(
                self.peek_token.token_type,
                TokenType::Semicolon | TokenType::RBrace | TokenType::Eof
            ) {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };
        self.skip_optional_semicolon();
        Some(Statement::Return {
            value,
            span: self.span_from(start),
        })
    }

    fn parse_throw_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Statement::Throw {
            value,
            span: self.span_from(start),
        })
    }

    /// `(condition)` following the current keyword; leaves the current token on `)`.
    fn parse_parenthesized_condition(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.allow_in(|parser| parser.parse_expression(Precedence::Lowest))?;
        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        Some(condition)
    }

    fn parse_if_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        let condition = self.parse_parenthesized_condition()?;
        self.next_token();
        let consequence = self.parse_statement_inner()?;
        let alternative = if self.is_peek_token(TokenType::Else) {
            self.next_token();
            self.next_token();
            Some(Box::new(self.parse_statement_inner()?))
        } else {
            None
        };
        Some(Statement::If {
            condition,
            consequence: Box::new(consequence),
            alternative,
            span: self.span_from(start),
        })
    }

    fn parse_while_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        let condition = self.parse_parenthesized_condition()?;
        self.next_token();
        let body = self.parse_statement_inner()?;
        Some(Statement::While {
            condition,
            body: Box::new(body),
            span: self.span_from(start),
        })
    }

    fn parse_do_while_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        self.next_token();
        let body = self.parse_statement_inner()?;
        if !self.expect_peek(TokenType::While) {
            return None;
        }
        let condition = self.parse_parenthesized_condition()?;
        self.skip_optional_semicolon();
        Some(Statement::DoWhile {
            body: Box::new(body),
            condition,
            span: self.span_from(start),
        })
    }

    fn parse_for_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        // `for await (...)`
        if self.peek_token.is_contextual("await") {
            self.next_token();
        }
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }
        self.next_token();

        let init = if self.is_current_token(TokenType::Semicolon) {
            None
        } else {
            self.no_in = true;
            let init = self.parse_for_init();
            self.no_in = false;
            Some(init?)
        };

        if let Some(left) = init {
            let is_of = self.peek_token.is_contextual("of");
            if is_of || self.is_peek_token(TokenType::In) {
                self.next_token();
                self.next_token();
                let right = if is_of {
                    self.parse_expression(Precedence::Sequence)?
                } else {
                    self.parse_expression(Precedence::Lowest)?
                };
                if !self.expect_peek(TokenType::RParen) {
                    return None;
                }
                self.next_token();
                let body = self.parse_statement_inner()?;
                return Some(Statement::ForIn {
                    left,
                    right,
                    body: Box::new(body),
                    is_of,
                    span: self.span_from(start),
                });
            }
            if !self.expect_peek(TokenType::Semicolon) {
                return None;
            }
            return self.parse_for_rest(Some(left), start);
        }
        self.parse_for_rest(None, start)
    }

    fn parse_for_init(&mut self) -> Option<ForInit> {
        match self.current_token.token_type {
            TokenType::Var | TokenType::Const => {
                let (kind, declarators) = self.parse_variable_declarations()?;
                Some(ForInit::Declaration { kind, declarators })
            }
            TokenType::Let if self.peek_starts_binding() => {
                let (kind, declarators) = self.parse_variable_declarations()?;
                Some(ForInit::Declaration { kind, declarators })
            }
            _ => Some(ForInit::Expression(
                self.parse_expression(Precedence::Lowest)?,
            )),
        }
    }

    /// Current token is the `;` after the initializer.
    fn parse_for_rest(&mut self, init: Option<ForInit>, start: Position) -> Option<Statement> {
        let condition = if self.is_peek_token(TokenType::Semicolon) {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };
        if !self.expect_peek(TokenType::Semicolon) {
            return None;
        }
        let update = if self.is_peek_token(TokenType::RParen) {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };
        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        self.next_token();
        let body = self.parse_statement_inner()?;
        Some(Statement::For {
            init,
            condition,
            update,
            body: Box::new(body),
            span: self.span_from(start),
        })
    }

    fn parse_switch_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        let discriminant = self.parse_parenthesized_condition()?;
        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }
        self.next_token();

        let mut cases = Vec::new();
        while !self.is_current_token(TokenType::RBrace) {
            let test = match self.current_token.token_type {
                TokenType::Case => {
                    self.next_token();
                    Some(self.parse_expression(Precedence::Lowest)?)
                }
                TokenType::Default => None,
                other => {
                    self.current_error(format!("Expected case or default, got {}.", other));
                    return None;
                }
            };
            if !self.expect_peek(TokenType::Colon) {
                return None;
            }
            self.next_token();

            let mut consequent = Vec::new();
            while !matches!(
                self.current_token.token_type,
                TokenType::Case | TokenType::Default | TokenType::RBrace | TokenType::Eof
            ) {
                if let Some(statement) = self.parse_statement() {
                    consequent.push(statement);
                }
                self.next_token();
            }
            cases.push(SwitchCase { test, consequent });
        }

        Some(Statement::Switch {
            discriminant,
            cases,
            span: self.span_from(start),
        })
    }

    fn parse_try_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }
        let block = self.parse_block();

        let handler = if self.is_peek_token(TokenType::Catch) {
            self.next_token();
            let parameter = if self.is_peek_token(TokenType::LParen) {
                self.next_token();
                self.next_token();
                let parameter = self.parse_binding_target()?;
                if !self.expect_peek(TokenType::RParen) {
                    return None;
                }
                Some(parameter)
            } else {
                None
            };
            if !self.expect_peek(TokenType::LBrace) {
                return None;
            }
            Some(CatchClause {
                parameter,
                body: self.parse_block(),
            })
        } else {
            None
        };

        let finalizer = if self.is_peek_token(TokenType::Finally) {
            self.next_token();
            if !self.expect_peek(TokenType::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            self.peek_error(TokenType::Catch);
            return None;
        }

        Some(Statement::Try {
            block,
            handler,
            finalizer,
            span: self.span_from(start),
        })
    }

    /// `break` and `continue`, with an optional label on the same line.
    fn parse_jump_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        let is_break = self.is_current_token(TokenType::Break);
        let label = if self.is_peek_token(TokenType::Ident) && !self.peek_token.newline_before {
            self.next_token();
            Some(self.current_token.literal.clone())
        } else {
            None
        };
        self.skip_optional_semicolon();
        let span = self.span_from(start);
        Some(if is_break {
            Statement::Break { label, span }
        } else {
            Statement::Continue { label, span }
        })
    }

    /// Import bindings are skipped; only the module source is kept.
    fn parse_import_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        while !self.is_peek_token(TokenType::String) {
            if matches!(
                self.peek_token.token_type,
                TokenType::Eof | TokenType::Semicolon
            ) {
                self.peek_error(TokenType::String);
                return None;
            }
            self.next_token();
        }
        self.next_token();
        let source = self.current_token.literal.clone();
        self.skip_optional_semicolon();
        Some(Statement::Import {
            source,
            span: self.span_from(start),
        })
    }

    fn parse_export_statement(&mut self) -> Option<Statement> {
        let start = self.current_token.position;
        match self.peek_token.token_type {
            TokenType::Default => {
                self.next_token();
                self.next_token();
                let expression = self.parse_expression(Precedence::Sequence)?;
                self.skip_optional_semicolon();
                Some(Statement::ExportDefault {
                    expression,
                    span: self.span_from(start),
                })
            }
            TokenType::LBrace | TokenType::Asterisk => {
                self.next_token();
                if self.is_current_token(TokenType::LBrace) {
                    while !self.is_current_token(TokenType::RBrace) {
                        if self.is_peek_token(TokenType::Eof) {
                            self.peek_error(TokenType::RBrace);
                            return None;
                        }
                        self.next_token();
                    }
                } else if self.peek_token.is_contextual("as") {
                    self.next_token();
                    self.next_token();
                }
                let source = if self.peek_token.is_contextual("from") {
                    self.next_token();
                    if !self.expect_peek(TokenType::String) {
                        return None;
                    }
                    Some(self.current_token.literal.clone())
                } else {
                    None
                };
                self.skip_optional_semicolon();
                Some(Statement::ExportNamed {
                    source,
                    span: self.span_from(start),
                })
            }
            _ => {
                self.next_token();
                let declaration = self.parse_statement_inner()?;
                Some(Statement::Export {
                    declaration: Box::new(declaration),
                    span: self.span_from(start),
                })
            }
        }
    }
}
