//! Folding of assertion message expressions into message templates.
//!
//! A message argument becomes a string in which literal text is kept and
//! every runtime value is replaced by a `%s` placeholder, in evaluation order:
//!
//! ```text
//! 'Expected ' + name + ' to be ' + `a ${kind}`   =>   "Expected %s to be a %s"
//! ```

use std::fmt;

use crate::syntax::expression::Expression;

/// Marker substituted for each non-literal operand.
pub const PLACEHOLDER: &str = "%s";

/// The closed set of shapes the folder distinguishes.
#[derive(Debug, Clone, Copy)]
pub enum MessageShape<'a> {
    /// A string literal; contributes its cooked text.
    Literal(&'a str),
    /// A `+` whose operand tree contains at least one string literal.
    Concat {
        left: &'a Expression,
        right: &'a Expression,
    },
    /// A template literal: quasis are literal, substitutions are folded.
    Template {
        quasis: &'a [String],
        expressions: &'a [Expression],
    },
    /// Anything else is a single runtime value.
    Other,
}

impl<'a> MessageShape<'a> {
    pub fn of(expr: &'a Expression) -> Self {
        match expr {
            Expression::String { value, .. } => MessageShape::Literal(value),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } if operator == "+" && (contains_string(left) || contains_string(right)) => {
                MessageShape::Concat { left, right }
            }
            Expression::Template {
                quasis,
                expressions,
                ..
            } => MessageShape::Template { quasis, expressions },
            _ => MessageShape::Other,
        }
    }
}

/// Whether a `+` chain is string concatenation rather than arithmetic.
fn contains_string(expr: &Expression) -> bool {
    match expr {
        Expression::String { .. } | Expression::Template { .. } => true,
        Expression::Infix {
            left,
            operator,
            right,
            ..
        } if operator == "+" => contains_string(left) || contains_string(right),
        _ => false,
    }
}

/// A folded message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageTemplate {
    pub text: String,
    pub placeholders: usize,
}

impl MessageTemplate {
    fn push_literal(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn push_placeholder(&mut self) {
        self.text.push_str(PLACEHOLDER);
        self.placeholders += 1;
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Fold a message expression. A top-level expression that is not a
/// literal, a string concatenation or a template folds to `"%s"`.
pub fn fold_message(expr: &Expression) -> MessageTemplate {
    let mut template = MessageTemplate::default();
    fold_into(expr, &mut template);
    template
}

fn fold_into(expr: &Expression, template: &mut MessageTemplate) {
    match MessageShape::of(expr) {
        MessageShape::Literal(text) => template.push_literal(text),
        MessageShape::Concat { left, right } => {
            fold_into(left, template);
            fold_into(right, template);
        }
        MessageShape::Template {
            quasis,
            expressions,
        } => {
            for (index, quasi) in quasis.iter().enumerate() {
                template.push_literal(quasi);
                if let Some(expr) = expressions.get(index) {
                    fold_into(expr, template);
                }
            }
        }
        MessageShape::Other => template.push_placeholder(),
    }
}
