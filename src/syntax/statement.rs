use crate::syntax::{
    Identifier,
    block::Block,
    class::Class,
    expression::{Expression, Function},
    position::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone)]
pub struct VariableDeclarator {
    pub target: Expression,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone)]
pub enum ForInit {
    Declaration {
        kind: VariableKind,
        declarators: Vec<VariableDeclarator>,
    },
    Expression(Expression),
}

#[derive(Debug, Clone)]
pub struct SwitchCase {
    /// `None` for `default:`.
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone)]
pub struct CatchClause {
    pub parameter: Option<Expression>,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub enum Statement {
    Variable {
        kind: VariableKind,
        declarators: Vec<VariableDeclarator>,
        span: Span,
    },
    Function {
        function: Function,
        span: Span,
    },
    Class {
        class: Class,
        span: Span,
    },
    Expression {
        expression: Expression,
        span: Span,
    },
    Block(Block),
    Return {
        value: Option<Expression>,
        span: Span,
    },
    Throw {
        value: Expression,
        span: Span,
    },
    If {
        condition: Expression,
        consequence: Box<Statement>,
        alternative: Option<Box<Statement>>,
        span: Span,
    },
    For {
        init: Option<ForInit>,
        condition: Option<Expression>,
        update: Option<Expression>,
        body: Box<Statement>,
        span: Span,
    },
    /// `for (left in right)` or, when `is_of`, `for (left of right)`.
    ForIn {
        left: ForInit,
        right: Expression,
        body: Box<Statement>,
        is_of: bool,
        span: Span,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
        span: Span,
    },
    DoWhile {
        body: Box<Statement>,
        condition: Expression,
        span: Span,
    },
    Switch {
        discriminant: Expression,
        cases: Vec<SwitchCase>,
        span: Span,
    },
    Try {
        block: Block,
        handler: Option<CatchClause>,
        finalizer: Option<Block>,
        span: Span,
    },
    Labeled {
        label: Identifier,
        body: Box<Statement>,
        span: Span,
    },
    Break {
        label: Option<Identifier>,
        span: Span,
    },
    Continue {
        label: Option<Identifier>,
        span: Span,
    },
    Import {
        source: String,
        span: Span,
    },
    /// `export` in front of a variable, function or class declaration.
    Export {
        declaration: Box<Statement>,
        span: Span,
    },
    ExportDefault {
        expression: Expression,
        span: Span,
    },
    /// `export { a, b }`, `export * from "x"` and friends.
    ExportNamed {
        source: Option<String>,
        span: Span,
    },
    Debugger {
        span: Span,
    },
    Empty {
        span: Span,
    },
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Block(block) => block.span,
            Statement::Variable { span, .. }
            | Statement::Function { span, .. }
            | Statement::Class { span, .. }
            | Statement::Expression { span, .. }
            | Statement::Return { span, .. }
            | Statement::Throw { span, .. }
            | Statement::If { span, .. }
            | Statement::For { span, .. }
            | Statement::ForIn { span, .. }
            | Statement::While { span, .. }
            | Statement::DoWhile { span, .. }
            | Statement::Switch { span, .. }
            | Statement::Try { span, .. }
            | Statement::Labeled { span, .. }
            | Statement::Break { span, .. }
            | Statement::Continue { span, .. }
            | Statement::Import { span, .. }
            | Statement::Export { span, .. }
            | Statement::ExportDefault { span, .. }
            | Statement::ExportNamed { span, .. }
            | Statement::Debugger { span }
            | Statement::Empty { span } => *span,
        }
    }
}
