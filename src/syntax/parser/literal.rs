use crate::syntax::{
    Identifier,
    expression::{Expression, Function, MethodKind, Property, PropertyKey},
    position::Position,
    precedence::Precedence,
    token_type::TokenType,
};

use super::Parser;

impl Parser {
    /// Current token is a template head or a complete template. Leaves the
    /// current token on the template's last chunk.
    pub(super) fn parse_template_parts(&mut self) -> Option<(Vec<String>, Vec<Expression>)> {
        let mut quasis = vec![self.current_token.literal.clone()];
        let mut expressions = Vec::new();
        if self.is_current_token(TokenType::NoSubstitutionTemplate) {
            return Some((quasis, expressions));
        }

        loop {
            self.next_token();
            expressions.push(self.allow_in(|parser| parser.parse_expression(Precedence::Lowest))?);
            self.next_token();
            match self.current_token.token_type {
                TokenType::TemplateMiddle => quasis.push(self.current_token.literal.clone()),
                TokenType::TemplateTail => {
                    quasis.push(self.current_token.literal.clone());
                    return Some((quasis, expressions));
                }
                TokenType::UnterminatedTemplate => {
                    self.lexical_error();
                    return None;
                }
                other => {
                    self.current_error(format!(
                        "Expected }} to close template substitution, got {}.",
                        other
                    ));
                    return None;
                }
            }
        }
    }

    pub(super) fn parse_array_literal(&mut self) -> Option<Expression> {
        let start = self.current_token.position;
        let elements = self.allow_in(|parser| {
            let mut elements = Vec::new();
            loop {
                if parser.is_peek_token(TokenType::RBracket) {
                    parser.next_token();
                    break;
                }
                parser.next_token();
                if parser.is_current_token(TokenType::Comma) {
                    elements.push(None);
                    continue;
                }
                elements.push(Some(parser.parse_spread_or_expression()?));
                if parser.is_peek_token(TokenType::Comma) {
                    parser.next_token();
                    continue;
                }
                if !parser.expect_peek(TokenType::RBracket) {
                    return None;
                }
                break;
            }
            Some(elements)
        })?;
        Some(Expression::Array {
            elements,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_object_literal(&mut self) -> Option<Expression> {
        let start = self.current_token.position;
        let properties = self.allow_in(|parser| {
            let mut properties = Vec::new();
            loop {
                if parser.is_peek_token(TokenType::RBrace) {
                    parser.next_token();
                    break;
                }
                parser.next_token();
                properties.push(parser.parse_object_property()?);
                if parser.is_peek_token(TokenType::Comma) {
                    parser.next_token();
                    continue;
                }
                if !parser.expect_peek(TokenType::RBrace) {
                    return None;
                }
                break;
            }
            Some(properties)
        })?;
        Some(Expression::Object {
            properties,
            span: self.span_from(start),
        })
    }

    fn parse_object_property(&mut self) -> Option<Property> {
        let start = self.current_token.position;
        if self.is_current_token(TokenType::Ellipsis) {
            self.next_token();
            return Some(Property::Spread(
                self.parse_expression(Precedence::Sequence)?,
            ));
        }

        let (kind, is_async, is_generator) = self.parse_method_modifiers();
        let has_modifiers = kind != MethodKind::Method || is_async || is_generator;
        let key_is_plain_identifier = self.is_current_token(TokenType::Ident);
        let key = self.parse_property_key()?;

        if self.is_peek_token(TokenType::LParen) {
            self.next_token();
            let function = self.parse_function_rest(None, is_async, is_generator, start)?;
            return Some(Property::Method {
                key,
                kind,
                function,
            });
        }
        if has_modifiers {
            self.peek_error(TokenType::LParen);
            return None;
        }

        if self.is_peek_token(TokenType::Colon) {
            self.next_token();
            self.next_token();
            let value = self.parse_expression(Precedence::Sequence)?;
            return Some(Property::KeyValue { key, value });
        }

        match key {
            PropertyKey::Identifier(name) if key_is_plain_identifier => {
                let default = if self.is_peek_token(TokenType::Assign) {
                    self.next_token();
                    self.next_token();
                    Some(self.parse_expression(Precedence::Sequence)?)
                } else {
                    None
                };
                Some(Property::Shorthand { name, default })
            }
            _ => {
                self.peek_error(TokenType::Colon);
                None
            }
        }
    }

    /// Consume method prefixes (`async`, `*`, `get`, `set`). A modifier word
    /// directly followed by punctuation is a plain key.
    pub(super) fn parse_method_modifiers(&mut self) -> (MethodKind, bool, bool) {
        let mut is_async = false;
        if self.current_token.is_contextual("async")
            && !self.peek_token.newline_before
            && !self.peek_ends_key()
        {
            is_async = true;
            self.next_token();
        }
        let mut is_generator = false;
        if self.is_current_token(TokenType::Asterisk) {
            is_generator = true;
            self.next_token();
        }
        let mut kind = MethodKind::Method;
        if !is_async && !is_generator && !self.peek_ends_key() {
            if self.current_token.is_contextual("get") {
                kind = MethodKind::Getter;
                self.next_token();
            } else if self.current_token.is_contextual("set") {
                kind = MethodKind::Setter;
                self.next_token();
            }
        }
        (kind, is_async, is_generator)
    }

    fn peek_ends_key(&self) -> bool {
        matches!(
            self.peek_token.token_type,
            TokenType::LParen
                | TokenType::Comma
                | TokenType::Colon
                | TokenType::Assign
                | TokenType::Semicolon
                | TokenType::RBrace
        )
    }

    /// Leaves the current token on the last token of the key.
    pub(super) fn parse_property_key(&mut self) -> Option<PropertyKey> {
        let token = self.current_token.clone();
        match token.token_type {
            TokenType::String => Some(PropertyKey::String(token.literal)),
            TokenType::Number => Some(PropertyKey::Number(token.literal)),
            TokenType::PrivateName => Some(PropertyKey::Private(token.literal)),
            TokenType::LBracket => {
                self.next_token();
                let key = self.allow_in(|parser| parser.parse_expression(Precedence::Sequence))?;
                if !self.expect_peek(TokenType::RBracket) {
                    return None;
                }
                Some(PropertyKey::Computed(Box::new(key)))
            }
            _ if token.is_identifier_name() => Some(PropertyKey::Identifier(token.literal)),
            _ => {
                self.current_error(format!("Expected a property name, got {}.", token.token_type));
                None
            }
        }
    }

    /// Current token is `function`.
    pub(super) fn parse_function(&mut self, is_async: bool, start: Position) -> Option<Function> {
        let is_generator = self.is_peek_token(TokenType::Asterisk);
        if is_generator {
            self.next_token();
        }
        let name = if self.is_peek_token(TokenType::Ident) || self.is_peek_token(TokenType::Yield) {
            self.next_token();
            Some(self.current_token.literal.clone())
        } else {
            None
        };
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }
        self.parse_function_rest(name, is_async, is_generator, start)
    }

    /// Current token is the `(` of the parameter list. Leaves the current
    /// token on the body's closing `}`.
    pub(super) fn parse_function_rest(
        &mut self,
        name: Option<Identifier>,
        is_async: bool,
        is_generator: bool,
        start: Position,
    ) -> Option<Function> {
        let parameters = self.parse_parameters()?;
        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }
        let body = self.parse_block();
        Some(Function {
            name,
            parameters,
            body,
            is_async,
            is_generator,
            span: self.span_from(start),
        })
    }

    /// Current token is `(`; leaves the current token on `)`.
    pub(super) fn parse_parameters(&mut self) -> Option<Vec<Expression>> {
        self.allow_in(|parser| {
            let mut parameters = Vec::new();
            loop {
                if parser.is_peek_token(TokenType::RParen) {
                    parser.next_token();
                    break;
                }
                parser.next_token();
                parameters.push(parser.parse_parameter()?);
                if parser.is_peek_token(TokenType::Comma) {
                    parser.next_token();
                    continue;
                }
                if !parser.expect_peek(TokenType::RParen) {
                    return None;
                }
                break;
            }
            Some(parameters)
        })
    }

    fn parse_parameter(&mut self) -> Option<Expression> {
        let start = self.current_token.position;
        if self.is_current_token(TokenType::Ellipsis) {
            self.next_token();
            let argument = self.parse_binding_target()?;
            return Some(Expression::Spread {
                argument: Box::new(argument),
                span: self.span_from(start),
            });
        }
        let target = self.parse_binding_target()?;
        if !self.is_peek_token(TokenType::Assign) {
            return Some(target);
        }
        self.next_token();
        let operator = self.current_token.literal.clone();
        self.next_token();
        let value = self.parse_expression(Precedence::Sequence)?;
        Some(Expression::Assign {
            target: Box::new(target),
            operator,
            value: Box::new(value),
            span: self.span_from(start),
        })
    }

    /// A binding identifier or a destructuring pattern.
    pub(super) fn parse_binding_target(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        match token.token_type {
            TokenType::Ident | TokenType::Yield => Some(Expression::Identifier {
                span: token.span(),
                name: token.literal,
            }),
            TokenType::LBracket => self.parse_array_literal(),
            TokenType::LBrace => self.parse_object_literal(),
            other => {
                self.current_error(format!("Expected a binding name, got {}.", other));
                None
            }
        }
    }
}
