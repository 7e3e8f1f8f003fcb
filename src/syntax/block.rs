use crate::syntax::{position::Span, statement::Statement};

#[derive(Debug, Clone, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}
