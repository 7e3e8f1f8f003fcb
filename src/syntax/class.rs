use crate::syntax::{
    Identifier,
    block::Block,
    expression::{Expression, Function, MethodKind, PropertyKey},
    position::Span,
};

#[derive(Debug, Clone)]
pub struct Class {
    pub name: Option<Identifier>,
    pub super_class: Option<Expression>,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ClassMember {
    Method {
        key: PropertyKey,
        kind: MethodKind,
        is_static: bool,
        function: Function,
    },
    Field {
        key: PropertyKey,
        value: Option<Expression>,
        is_static: bool,
        span: Span,
    },
    StaticBlock(Block),
}
