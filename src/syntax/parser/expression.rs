use crate::syntax::{
    expression::{ArrowBody, Expression},
    position::Position,
    precedence::{Precedence, is_prefix_op, rhs_precedence_for_infix},
    token_type::TokenType,
};

use super::Parser;

impl Parser {
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while precedence < self.peek_precedence() {
            let peek = &self.peek_token;
            // `a \n ++b` is two statements.
            if matches!(peek.token_type, TokenType::PlusPlus | TokenType::MinusMinus)
                && peek.newline_before
            {
                break;
            }
            if self.no_in && peek.token_type == TokenType::In {
                break;
            }
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        let span = token.span();
        match token.token_type {
            TokenType::Ident => self.parse_identifier_expression(),
            TokenType::PrivateName => Some(Expression::Identifier {
                name: token.literal,
                span,
            }),
            TokenType::Number => Some(Expression::Number {
                raw: token.literal,
                span,
            }),
            TokenType::String => Some(Expression::String {
                value: token.literal,
                span,
            }),
            TokenType::Regex => Some(Expression::Regex {
                raw: token.literal,
                span,
            }),
            TokenType::NoSubstitutionTemplate | TokenType::TemplateHead => {
                let (quasis, expressions) = self.parse_template_parts()?;
                Some(Expression::Template {
                    quasis,
                    expressions,
                    span: self.span_from(token.position),
                })
            }
            TokenType::True | TokenType::False => Some(Expression::Boolean {
                value: token.token_type == TokenType::True,
                span,
            }),
            TokenType::Null => Some(Expression::Null { span }),
            TokenType::This => Some(Expression::This { span }),
            TokenType::Super => Some(Expression::Super { span }),
            // `import(...)` and `import.meta`
            TokenType::Import => Some(Expression::Identifier {
                name: token.literal,
                span,
            }),
            TokenType::LParen => {
                if self.arrow_follows_parens(false) {
                    self.parse_arrow_function(token.position, false)
                } else {
                    self.parse_grouped_expression()
                }
            }
            TokenType::LBracket => self.parse_array_literal(),
            TokenType::LBrace => self.parse_object_literal(),
            TokenType::Function => {
                let function = self.parse_function(false, token.position)?;
                Some(Expression::Function {
                    function: Box::new(function),
                    span: self.span_from(token.position),
                })
            }
            TokenType::Class => {
                let class = self.parse_class()?;
                Some(Expression::Class {
                    class: Box::new(class),
                    span: self.span_from(token.position),
                })
            }
            TokenType::New => self.parse_new_expression(),
            TokenType::Yield => self.parse_yield_expression(),
            TokenType::Lt => {
                let element = self.parse_jsx_element()?;
                Some(Expression::Jsx {
                    element: Box::new(element),
                    span: self.span_from(token.position),
                })
            }
            TokenType::Slash | TokenType::SlashAssign => {
                self.rescan_current_as_regex();
                if !self.is_current_token(TokenType::Regex) {
                    self.lexical_error();
                    return None;
                }
                Some(Expression::Regex {
                    raw: self.current_token.literal.clone(),
                    span: self.current_token.span(),
                })
            }
            TokenType::UnterminatedString
            | TokenType::UnterminatedTemplate
            | TokenType::UnterminatedRegex
            | TokenType::UnterminatedBlockComment
            | TokenType::Illegal => {
                self.lexical_error();
                None
            }
            token_type if is_prefix_op(&token_type) => self.parse_prefix_expression(),
            _ => {
                self.no_prefix_parse_error();
                None
            }
        }
    }

    fn parse_identifier_expression(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        let start = token.position;
        let same_line = !self.peek_token.newline_before;

        if token.literal == "async" && same_line {
            if self.is_peek_token(TokenType::Function) {
                self.next_token();
                let function = self.parse_function(true, start)?;
                return Some(Expression::Function {
                    function: Box::new(function),
                    span: self.span_from(start),
                });
            }
            if self.is_peek_token(TokenType::Ident) && self.arrow_follows_peek() {
                self.next_token();
                return self.parse_single_parameter_arrow(start, true);
            }
            if self.is_peek_token(TokenType::LParen) && self.arrow_follows_parens(true) {
                self.next_token();
                return self.parse_arrow_function(start, true);
            }
        }

        if token.literal == "await" && same_line && self.peek_starts_expression() {
            self.next_token();
            let argument = self.parse_expression(Precedence::Prefix)?;
            return Some(Expression::Await {
                argument: Box::new(argument),
                span: self.span_from(start),
            });
        }

        if self.is_peek_token(TokenType::Arrow) && same_line {
            return self.parse_single_parameter_arrow(start, false);
        }

        Some(Expression::Identifier {
            span: token.span(),
            name: token.literal,
        })
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let start = self.current_token.position;
        let operator = self.current_token.literal.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix {
            operator,
            right: Box::new(right),
            span: self.span_from(start),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.allow_in(|parser| parser.parse_expression(Precedence::Lowest))?;
        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        Some(expression)
    }

    fn parse_yield_expression(&mut self) -> Option<Expression> {
        let start = self.current_token.position;
        let delegate = self.is_peek_token(TokenType::Asterisk);
        if delegate {
            self.next_token();
        }
        if !delegate && (self.peek_token.newline_before || !self.peek_starts_expression()) {
            return Some(Expression::Yield {
                argument: None,
                delegate,
                span: self.span_from(start),
            });
        }
        self.next_token();
        let argument = self.parse_expression(Precedence::Sequence)?;
        Some(Expression::Yield {
            argument: Some(Box::new(argument)),
            delegate,
            span: self.span_from(start),
        })
    }

    fn parse_new_expression(&mut self) -> Option<Expression> {
        let start = self.current_token.position;

        // `new.target`
        if self.is_peek_token(TokenType::Dot) {
            let object = Expression::Identifier {
                name: self.current_token.literal.clone(),
                span: self.current_token.span(),
            };
            self.next_token();
            return self.parse_member_expression(object, false);
        }

        self.next_token();
        let mut callee = if self.is_current_token(TokenType::New) {
            self.parse_new_expression()?
        } else {
            self.parse_prefix()?
        };
        // Member accesses bind to the callee; the first call ends it.
        while matches!(
            self.peek_token.token_type,
            TokenType::Dot
                | TokenType::LBracket
                | TokenType::NoSubstitutionTemplate
                | TokenType::TemplateHead
        ) {
            self.next_token();
            callee = self.parse_infix(callee)?;
        }

        let arguments = if self.is_peek_token(TokenType::LParen) {
            self.next_token();
            self.parse_arguments()?
        } else {
            Vec::new()
        };

        Some(Expression::New {
            callee: Box::new(callee),
            arguments,
            span: self.span_from(start),
        })
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        let start = left.span().start;
        let token_type = self.current_token.token_type;
        match token_type {
            TokenType::Comma => {
                let mut expressions = match left {
                    Expression::Sequence { expressions, .. } => expressions,
                    other => vec![other],
                };
                self.next_token();
                expressions.push(self.parse_expression(Precedence::Sequence)?);
                Some(Expression::Sequence {
                    expressions,
                    span: self.span_from(start),
                })
            }
            TokenType::Question => {
                self.next_token();
                let consequence =
                    self.allow_in(|parser| parser.parse_expression(Precedence::Sequence))?;
                if !self.expect_peek(TokenType::Colon) {
                    return None;
                }
                self.next_token();
                let alternative = self.parse_expression(Precedence::Sequence)?;
                Some(Expression::Conditional {
                    condition: Box::new(left),
                    consequence: Box::new(consequence),
                    alternative: Box::new(alternative),
                    span: self.span_from(start),
                })
            }
            TokenType::PlusPlus | TokenType::MinusMinus => Some(Expression::Postfix {
                operator: self.current_token.literal.clone(),
                left: Box::new(left),
                span: self.span_from(start),
            }),
            TokenType::LParen => self.parse_call_expression(left, false),
            TokenType::LBracket => self.parse_index_expression(left, false),
            TokenType::Dot => self.parse_member_expression(left, false),
            TokenType::OptionalChain => match self.peek_token.token_type {
                TokenType::LParen => {
                    self.next_token();
                    self.parse_call_expression(left, true)
                }
                TokenType::LBracket => {
                    self.next_token();
                    self.parse_index_expression(left, true)
                }
                _ => self.parse_member_expression(left, true),
            },
            TokenType::NoSubstitutionTemplate | TokenType::TemplateHead => {
                let (quasis, expressions) = self.parse_template_parts()?;
                Some(Expression::TaggedTemplate {
                    tag: Box::new(left),
                    quasis,
                    expressions,
                    span: self.span_from(start),
                })
            }
            token_type if token_type.is_assignment() => {
                let operator = self.current_token.literal.clone();
                let precedence = rhs_precedence_for_infix(&token_type)?;
                self.next_token();
                let value = self.parse_expression(precedence)?;
                Some(Expression::Assign {
                    target: Box::new(left),
                    operator,
                    value: Box::new(value),
                    span: self.span_from(start),
                })
            }
            _ => {
                let operator = self.current_token.literal.clone();
                let precedence = rhs_precedence_for_infix(&token_type)?;
                self.next_token();
                let right = self.parse_expression(precedence)?;
                Some(Expression::Infix {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                    span: self.span_from(start),
                })
            }
        }
    }

    fn parse_call_expression(&mut self, function: Expression, optional: bool) -> Option<Expression> {
        let start = function.span().start;
        let arguments = self.parse_arguments()?;
        Some(Expression::Call {
            function: Box::new(function),
            arguments,
            optional,
            span: self.span_from(start),
        })
    }

    fn parse_index_expression(&mut self, left: Expression, optional: bool) -> Option<Expression> {
        let start = left.span().start;
        self.next_token();
        let index = self.allow_in(|parser| parser.parse_expression(Precedence::Lowest))?;
        if !self.expect_peek(TokenType::RBracket) {
            return None;
        }
        Some(Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
            optional,
            span: self.span_from(start),
        })
    }

    /// Current token is `.` or `?.`; the property name follows.
    fn parse_member_expression(&mut self, object: Expression, optional: bool) -> Option<Expression> {
        let start = object.span().start;
        if !(self.peek_token.is_identifier_name() || self.is_peek_token(TokenType::PrivateName)) {
            self.peek_error(TokenType::Ident);
            return None;
        }
        self.next_token();
        Some(Expression::Member {
            object: Box::new(object),
            property: self.current_token.literal.clone(),
            optional,
            span: self.span_from(start),
        })
    }

    /// Current token is `(`; leaves the current token on `)`.
    pub(super) fn parse_arguments(&mut self) -> Option<Vec<Expression>> {
        self.allow_in(|parser| {
            let mut arguments = Vec::new();
            loop {
                if parser.is_peek_token(TokenType::RParen) {
                    parser.next_token();
                    break;
                }
                parser.next_token();
                arguments.push(parser.parse_spread_or_expression()?);
                if parser.is_peek_token(TokenType::Comma) {
                    parser.next_token();
                    continue;
                }
                if !parser.expect_peek(TokenType::RParen) {
                    return None;
                }
                break;
            }
            Some(arguments)
        })
    }

    pub(super) fn parse_spread_or_expression(&mut self) -> Option<Expression> {
        if self.is_current_token(TokenType::Ellipsis) {
            let start = self.current_token.position;
            self.next_token();
            let argument = self.parse_expression(Precedence::Sequence)?;
            return Some(Expression::Spread {
                argument: Box::new(argument),
                span: self.span_from(start),
            });
        }
        self.parse_expression(Precedence::Sequence)
    }

    /// Current token is the parameter identifier, peek is `=>`.
    fn parse_single_parameter_arrow(&mut self, start: Position, is_async: bool) -> Option<Expression> {
        let parameter = Expression::Identifier {
            name: self.current_token.literal.clone(),
            span: self.current_token.span(),
        };
        if !self.expect_peek(TokenType::Arrow) {
            return None;
        }
        self.parse_arrow_body(vec![parameter], is_async, start)
    }

    /// Current token is the `(` opening the parameter list.
    fn parse_arrow_function(&mut self, start: Position, is_async: bool) -> Option<Expression> {
        let parameters = self.parse_parameters()?;
        if !self.expect_peek(TokenType::Arrow) {
            return None;
        }
        self.parse_arrow_body(parameters, is_async, start)
    }

    fn parse_arrow_body(
        &mut self,
        parameters: Vec<Expression>,
        is_async: bool,
        start: Position,
    ) -> Option<Expression> {
        let body = if self.is_peek_token(TokenType::LBrace) {
            self.next_token();
            ArrowBody::Block(self.parse_block())
        } else {
            self.next_token();
            ArrowBody::Expression(Box::new(self.parse_expression(Precedence::Sequence)?))
        };
        Some(Expression::Arrow {
            parameters,
            body,
            is_async,
            span: self.span_from(start),
        })
    }
}
