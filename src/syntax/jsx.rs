use crate::syntax::{expression::Expression, position::Span};

/// A JSX element, or a fragment when `name` is `None`.
#[derive(Debug, Clone)]
pub struct JsxElement {
    pub name: Option<String>,
    pub attributes: Vec<JsxAttribute>,
    pub children: Vec<JsxChild>,
    pub self_closing: bool,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum JsxAttribute {
    Named {
        name: String,
        value: Option<JsxAttributeValue>,
    },
    Spread(Expression),
}

#[derive(Debug, Clone)]
pub enum JsxAttributeValue {
    String(String),
    Expression(Expression),
    Element(Box<JsxElement>),
}

#[derive(Debug, Clone)]
pub enum JsxChild {
    Text(String),
    Expression(Expression),
    Spread(Expression),
    Element(JsxElement),
}
