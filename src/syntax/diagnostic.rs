use std::fmt;

use crate::syntax::position::Span;

pub const UNEXPECTED_TOKEN: &str = "E100";
pub const EXPECTED_EXPRESSION: &str = "E101";
pub const UNTERMINATED_LITERAL: &str = "E102";
pub const UNTERMINATED_COMMENT: &str = "E103";
pub const JSX_MISMATCHED_TAG: &str = "E104";
pub const ILLEGAL_CHARACTER: &str = "E105";

/// A syntax error collected by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: &'static str,
    pub title: String,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            code: UNEXPECTED_TOKEN,
            title: title.into(),
            message: String::new(),
            span: Span::default(),
        }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = code;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.code, self.title, self.span.start)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}
