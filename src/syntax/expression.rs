use crate::syntax::{
    Identifier, block::Block, class::Class, jsx::JsxElement, position::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Method,
    Getter,
    Setter,
    Constructor,
}

#[derive(Debug, Clone)]
pub enum PropertyKey {
    Identifier(Identifier),
    String(String),
    Number(String),
    Private(Identifier),
    Computed(Box<Expression>),
}

#[derive(Debug, Clone)]
pub enum Property {
    KeyValue {
        key: PropertyKey,
        value: Expression,
    },
    /// `{ a }`, or `{ a = 1 }` inside a destructuring pattern.
    Shorthand {
        name: Identifier,
        default: Option<Expression>,
    },
    Method {
        key: PropertyKey,
        kind: MethodKind,
        function: Function,
    },
    Spread(Expression),
}

/// Function declarations, expressions and methods share this shape.
/// Parameters are binding patterns expressed as expressions.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: Option<Identifier>,
    pub parameters: Vec<Expression>,
    pub body: Block,
    pub is_async: bool,
    pub is_generator: bool,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ArrowBody {
    Expression(Box<Expression>),
    Block(Block),
}

#[derive(Debug, Clone)]
pub enum Expression {
    Identifier {
        name: Identifier,
        span: Span,
    },
    This {
        span: Span,
    },
    Super {
        span: Span,
    },
    Null {
        span: Span,
    },
    Boolean {
        value: bool,
        span: Span,
    },
    Number {
        raw: String,
        span: Span,
    },
    String {
        value: String,
        span: Span,
    },
    Regex {
        raw: String,
        span: Span,
    },
    /// `quasis.len() == expressions.len() + 1`
    Template {
        quasis: Vec<String>,
        expressions: Vec<Expression>,
        span: Span,
    },
    TaggedTemplate {
        tag: Box<Expression>,
        quasis: Vec<String>,
        expressions: Vec<Expression>,
        span: Span,
    },
    /// `None` elements are holes: `[a, , b]`.
    Array {
        elements: Vec<Option<Expression>>,
        span: Span,
    },
    Object {
        properties: Vec<Property>,
        span: Span,
    },
    Function {
        function: Box<Function>,
        span: Span,
    },
    Arrow {
        parameters: Vec<Expression>,
        body: ArrowBody,
        is_async: bool,
        span: Span,
    },
    Class {
        class: Box<Class>,
        span: Span,
    },
    Prefix {
        operator: String,
        right: Box<Expression>,
        span: Span,
    },
    Postfix {
        operator: String,
        left: Box<Expression>,
        span: Span,
    },
    Infix {
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
        span: Span,
    },
    Assign {
        target: Box<Expression>,
        operator: String,
        value: Box<Expression>,
        span: Span,
    },
    Conditional {
        condition: Box<Expression>,
        consequence: Box<Expression>,
        alternative: Box<Expression>,
        span: Span,
    },
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
        optional: bool,
        span: Span,
    },
    New {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
        span: Span,
    },
    Member {
        object: Box<Expression>,
        property: Identifier,
        optional: bool,
        span: Span,
    },
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
        optional: bool,
        span: Span,
    },
    Sequence {
        expressions: Vec<Expression>,
        span: Span,
    },
    Spread {
        argument: Box<Expression>,
        span: Span,
    },
    Yield {
        argument: Option<Box<Expression>>,
        delegate: bool,
        span: Span,
    },
    Await {
        argument: Box<Expression>,
        span: Span,
    },
    Jsx {
        element: Box<JsxElement>,
        span: Span,
    },
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier { span, .. }
            | Expression::This { span }
            | Expression::Super { span }
            | Expression::Null { span }
            | Expression::Boolean { span, .. }
            | Expression::Number { span, .. }
            | Expression::String { span, .. }
            | Expression::Regex { span, .. }
            | Expression::Template { span, .. }
            | Expression::TaggedTemplate { span, .. }
            | Expression::Array { span, .. }
            | Expression::Object { span, .. }
            | Expression::Function { span, .. }
            | Expression::Arrow { span, .. }
            | Expression::Class { span, .. }
            | Expression::Prefix { span, .. }
            | Expression::Postfix { span, .. }
            | Expression::Infix { span, .. }
            | Expression::Assign { span, .. }
            | Expression::Conditional { span, .. }
            | Expression::Call { span, .. }
            | Expression::New { span, .. }
            | Expression::Member { span, .. }
            | Expression::Index { span, .. }
            | Expression::Sequence { span, .. }
            | Expression::Spread { span, .. }
            | Expression::Yield { span, .. }
            | Expression::Await { span, .. }
            | Expression::Jsx { span, .. } => *span,
        }
    }

    /// The name of a bare identifier, if this is one.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Expression::Identifier { name, .. } => Some(name),
            _ => None,
        }
    }
}
