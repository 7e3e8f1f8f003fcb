use crate::syntax::{
    diagnostic::{Diagnostic, JSX_MISMATCHED_TAG},
    jsx::{JsxAttribute, JsxAttributeValue, JsxChild, JsxElement},
    precedence::Precedence,
    token_type::TokenType,
};

use super::Parser;

impl Parser {
    /// Current token is the opening `<`. Leaves the current token on the
    /// final `>` of the element.
    pub(super) fn parse_jsx_element(&mut self) -> Option<JsxElement> {
        let start = self.current_token.position;

        if self.is_peek_token(TokenType::Gt) {
            self.next_token();
            let children = self.parse_jsx_children(None)?;
            return Some(JsxElement {
                name: None,
                attributes: Vec::new(),
                children,
                self_closing: false,
                span: self.span_from(start),
            });
        }

        self.next_token();
        let name = self.parse_jsx_name()?;
        let mut attributes = Vec::new();

        loop {
            match self.peek_token.token_type {
                TokenType::Slash => {
                    self.next_token();
                    if !self.expect_peek(TokenType::Gt) {
                        return None;
                    }
                    return Some(JsxElement {
                        name: Some(name),
                        attributes,
                        children: Vec::new(),
                        self_closing: true,
                        span: self.span_from(start),
                    });
                }
                TokenType::Gt => {
                    self.next_token();
                    break;
                }
                TokenType::LBrace => {
                    self.next_token();
                    if !self.expect_peek(TokenType::Ellipsis) {
                        return None;
                    }
                    self.next_token();
                    let argument =
                        self.allow_in(|parser| parser.parse_expression(Precedence::Sequence))?;
                    if !self.expect_peek(TokenType::RBrace) {
                        return None;
                    }
                    attributes.push(JsxAttribute::Spread(argument));
                }
                _ if self.peek_token.is_identifier_name() => {
                    self.next_token();
                    let attribute_name = self.parse_jsx_name()?;
                    let value = if self.is_peek_token(TokenType::Assign) {
                        self.next_token();
                        self.next_token();
                        Some(self.parse_jsx_attribute_value()?)
                    } else {
                        None
                    };
                    attributes.push(JsxAttribute::Named {
                        name: attribute_name,
                        value,
                    });
                }
                _ => {
                    self.peek_error(TokenType::Gt);
                    return None;
                }
            }
        }

        let children = self.parse_jsx_children(Some(&name))?;
        Some(JsxElement {
            name: Some(name),
            attributes,
            children,
            self_closing: false,
            span: self.span_from(start),
        })
    }

    fn parse_jsx_attribute_value(&mut self) -> Option<JsxAttributeValue> {
        match self.current_token.token_type {
            TokenType::String => Some(JsxAttributeValue::String(
                self.current_token.literal.clone(),
            )),
            TokenType::LBrace => {
                self.next_token();
                let expression =
                    self.allow_in(|parser| parser.parse_expression(Precedence::Sequence))?;
                if !self.expect_peek(TokenType::RBrace) {
                    return None;
                }
                Some(JsxAttributeValue::Expression(expression))
            }
            TokenType::Lt => Some(JsxAttributeValue::Element(Box::new(
                self.parse_jsx_element()?,
            ))),
            other => {
                self.current_error(format!("Expected a JSX attribute value, got {}.", other));
                None
            }
        }
    }

    /// Names like `div`, `my-widget`, `Foo.Bar` and `xlink:href`.
    fn parse_jsx_name(&mut self) -> Option<String> {
        if !self.current_token.is_identifier_name() {
            self.current_error(format!(
                "Expected a JSX name, got {}.",
                self.current_token.token_type
            ));
            return None;
        }
        let mut name = self.current_token.literal.clone();
        while matches!(
            self.peek_token.token_type,
            TokenType::Minus | TokenType::Dot | TokenType::Colon
        ) {
            self.next_token();
            name.push_str(&self.current_token.literal);
            if !self.peek_token.is_identifier_name() {
                self.peek_error(TokenType::Ident);
                return None;
            }
            self.next_token();
            name.push_str(&self.current_token.literal);
        }
        Some(name)
    }

    /// Current token is the `>` ending the opening tag. Consumes children up
    /// to and including the closing tag.
    fn parse_jsx_children(&mut self, name: Option<&str>) -> Option<Vec<JsxChild>> {
        let mut children = Vec::new();
        loop {
            let text = self.rescan_after_current(|lexer| lexer.read_jsx_text());
            if !text.literal.trim().is_empty() {
                children.push(JsxChild::Text(text.literal));
            }

            match self.current_token.token_type {
                TokenType::LBrace => {
                    // `{}` and `{/* comment */}`
                    if self.is_peek_token(TokenType::RBrace) {
                        self.next_token();
                        continue;
                    }
                    self.next_token();
                    let spread = self.is_current_token(TokenType::Ellipsis);
                    if spread {
                        self.next_token();
                    }
                    let expression =
                        self.allow_in(|parser| parser.parse_expression(Precedence::Lowest))?;
                    if !self.expect_peek(TokenType::RBrace) {
                        return None;
                    }
                    children.push(if spread {
                        JsxChild::Spread(expression)
                    } else {
                        JsxChild::Expression(expression)
                    });
                }
                TokenType::Lt if self.is_peek_token(TokenType::Slash) => {
                    let closing_start = self.current_token.position;
                    self.next_token();
                    let closing = if self.is_peek_token(TokenType::Gt) {
                        None
                    } else {
                        self.next_token();
                        Some(self.parse_jsx_name()?)
                    };
                    if !self.expect_peek(TokenType::Gt) {
                        return None;
                    }
                    if closing.as_deref() != name {
                        self.errors.push(
                            Diagnostic::error("MISMATCHED JSX TAG")
                                .with_code(JSX_MISMATCHED_TAG)
                                .with_span(self.span_from(closing_start))
                                .with_message(format!(
                                    "Expected closing tag for <{}>, got </{}>.",
                                    name.unwrap_or_default(),
                                    closing.as_deref().unwrap_or_default()
                                )),
                        );
                        return None;
                    }
                    return Some(children);
                }
                TokenType::Lt => {
                    children.push(JsxChild::Element(self.parse_jsx_element()?));
                }
                _ => {
                    self.current_error(format!(
                        "Unterminated JSX contents: expected a closing tag, got {}.",
                        self.current_token.token_type
                    ));
                    return None;
                }
            }
        }
    }
}
