use crate::syntax::{
    class::{Class, ClassMember},
    expression::{MethodKind, PropertyKey},
    precedence::Precedence,
    token_type::TokenType,
};

use super::Parser;

impl Parser {
    /// Current token is `class`; leaves the current token on the closing `}`.
    pub(super) fn parse_class(&mut self) -> Option<Class> {
        let start = self.current_token.position;

        let name = if self.is_peek_token(TokenType::Ident) {
            self.next_token();
            Some(self.current_token.literal.clone())
        } else {
            None
        };

        let super_class = if self.is_peek_token(TokenType::Extends) {
            self.next_token();
            self.next_token();
            Some(self.parse_expression(Precedence::Postfix)?)
        } else {
            None
        };

        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }
        self.next_token();

        let mut members = Vec::new();
        while !self.is_current_token(TokenType::RBrace) {
            if self.is_current_token(TokenType::Eof) {
                self.current_error("Missing } at end of class body.");
                return None;
            }
            if !self.is_current_token(TokenType::Semicolon) {
                members.push(self.parse_class_member()?);
            }
            self.next_token();
        }

        Some(Class {
            name,
            super_class,
            members,
            span: self.span_from(start),
        })
    }

    fn parse_class_member(&mut self) -> Option<ClassMember> {
        let start = self.current_token.position;

        let mut is_static = false;
        if self.current_token.is_contextual("static")
            && !matches!(
                self.peek_token.token_type,
                TokenType::LParen | TokenType::Assign | TokenType::Semicolon | TokenType::RBrace
            )
        {
            if self.is_peek_token(TokenType::LBrace) {
                self.next_token();
                return Some(ClassMember::StaticBlock(self.parse_block()));
            }
            is_static = true;
            self.next_token();
        }

        let (mut kind, is_async, is_generator) = self.parse_method_modifiers();
        let key = self.parse_property_key()?;

        if self.is_peek_token(TokenType::LParen) {
            if !is_static
                && kind == MethodKind::Method
                && matches!(&key, PropertyKey::Identifier(name) if name == "constructor")
            {
                kind = MethodKind::Constructor;
            }
            self.next_token();
            let function = self.parse_function_rest(None, is_async, is_generator, start)?;
            return Some(ClassMember::Method {
                key,
                kind,
                is_static,
                function,
            });
        }

        let value = if self.is_peek_token(TokenType::Assign) {
            self.next_token();
            self.next_token();
            Some(self.parse_expression(Precedence::Sequence)?)
        } else {
            None
        };
        self.skip_optional_semicolon();

        Some(ClassMember::Field {
            key,
            value,
            is_static,
            span: self.span_from(start),
        })
    }
}
