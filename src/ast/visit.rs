use crate::syntax::{
    block::Block,
    class::{Class, ClassMember},
    expression::{ArrowBody, Expression, Function, Property, PropertyKey},
    jsx::{JsxAttribute, JsxAttributeValue, JsxChild, JsxElement},
    program::Program,
    statement::{CatchClause, ForInit, Statement, SwitchCase, VariableDeclarator},
};

/// Read-only AST visitor.
///
/// Every `visit_*` method has a default that calls the corresponding `walk_*`
/// free function, which recurses into child nodes in source order. Override a
/// method to intercept a node; call `walk_*` from within your override to
/// continue the traversal.
pub trait Visitor<'ast> {
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }

    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &'ast Statement) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'ast Expression) {
        walk_expr(self, expr);
    }

    fn visit_function(&mut self, function: &'ast Function) {
        walk_function(self, function);
    }

    fn visit_class(&mut self, class: &'ast Class) {
        walk_class(self, class);
    }

    fn visit_jsx_element(&mut self, element: &'ast JsxElement) {
        walk_jsx_element(self, element);
    }
}

// ---------------------------------------------------------------------------
// walk_* free functions: exhaustive destructuring so that adding a new
// field or variant causes a compile error until this code is updated.
// ---------------------------------------------------------------------------

pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, program: &'ast Program) {
    let Program {
        statements,
        span: _,
    } = program;
    for stmt in statements {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast Block) {
    let Block {
        statements,
        span: _,
    } = block;
    for stmt in statements {
        visitor.visit_stmt(stmt);
    }
}

fn walk_declarators<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    declarators: &'ast [VariableDeclarator],
) {
    for VariableDeclarator { target, init } in declarators {
        visitor.visit_expr(target);
        if let Some(init) = init {
            visitor.visit_expr(init);
        }
    }
}

fn walk_for_init<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, init: &'ast ForInit) {
    match init {
        ForInit::Declaration {
            kind: _,
            declarators,
        } => walk_declarators(visitor, declarators),
        ForInit::Expression(expr) => visitor.visit_expr(expr),
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Statement) {
    match stmt {
        Statement::Variable {
            kind: _,
            declarators,
            span: _,
        } => walk_declarators(visitor, declarators),
        Statement::Function { function, span: _ } => visitor.visit_function(function),
        Statement::Class { class, span: _ } => visitor.visit_class(class),
        Statement::Expression {
            expression,
            span: _,
        } => visitor.visit_expr(expression),
        Statement::Block(block) => visitor.visit_block(block),
        Statement::Return { value, span: _ } => {
            if let Some(expr) = value {
                visitor.visit_expr(expr);
            }
        }
        Statement::Throw { value, span: _ } => visitor.visit_expr(value),
        Statement::If {
            condition,
            consequence,
            alternative,
            span: _,
        } => {
            visitor.visit_expr(condition);
            visitor.visit_stmt(consequence);
            if let Some(alternative) = alternative {
                visitor.visit_stmt(alternative);
            }
        }
        Statement::For {
            init,
            condition,
            update,
            body,
            span: _,
        } => {
            if let Some(init) = init {
                walk_for_init(visitor, init);
            }
            if let Some(condition) = condition {
                visitor.visit_expr(condition);
            }
            if let Some(update) = update {
                visitor.visit_expr(update);
            }
            visitor.visit_stmt(body);
        }
        Statement::ForIn {
            left,
            right,
            body,
            is_of: _,
            span: _,
        } => {
            walk_for_init(visitor, left);
            visitor.visit_expr(right);
            visitor.visit_stmt(body);
        }
        Statement::While {
            condition,
            body,
            span: _,
        } => {
            visitor.visit_expr(condition);
            visitor.visit_stmt(body);
        }
        Statement::DoWhile {
            body,
            condition,
            span: _,
        } => {
            visitor.visit_stmt(body);
            visitor.visit_expr(condition);
        }
        Statement::Switch {
            discriminant,
            cases,
            span: _,
        } => {
            visitor.visit_expr(discriminant);
            for SwitchCase { test, consequent } in cases {
                if let Some(test) = test {
                    visitor.visit_expr(test);
                }
                for stmt in consequent {
                    visitor.visit_stmt(stmt);
                }
            }
        }
        Statement::Try {
            block,
            handler,
            finalizer,
            span: _,
        } => {
            visitor.visit_block(block);
            if let Some(CatchClause { parameter, body }) = handler {
                if let Some(parameter) = parameter {
                    visitor.visit_expr(parameter);
                }
                visitor.visit_block(body);
            }
            if let Some(finalizer) = finalizer {
                visitor.visit_block(finalizer);
            }
        }
        Statement::Labeled {
            label: _,
            body,
            span: _,
        } => visitor.visit_stmt(body),
        Statement::Export {
            declaration,
            span: _,
        } => visitor.visit_stmt(declaration),
        Statement::ExportDefault {
            expression,
            span: _,
        } => visitor.visit_expr(expression),
        Statement::Break { label: _, span: _ }
        | Statement::Continue { label: _, span: _ }
        | Statement::Import { source: _, span: _ }
        | Statement::ExportNamed { source: _, span: _ }
        | Statement::Debugger { span: _ }
        | Statement::Empty { span: _ } => {}
    }
}

pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, function: &'ast Function) {
    let Function {
        name: _,
        parameters,
        body,
        is_async: _,
        is_generator: _,
        span: _,
    } = function;
    for parameter in parameters {
        visitor.visit_expr(parameter);
    }
    visitor.visit_block(body);
}

fn walk_property_key<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, key: &'ast PropertyKey) {
    match key {
        PropertyKey::Computed(expr) => visitor.visit_expr(expr),
        PropertyKey::Identifier(_)
        | PropertyKey::String(_)
        | PropertyKey::Number(_)
        | PropertyKey::Private(_) => {}
    }
}

pub fn walk_class<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, class: &'ast Class) {
    let Class {
        name: _,
        super_class,
        members,
        span: _,
    } = class;
    if let Some(super_class) = super_class {
        visitor.visit_expr(super_class);
    }
    for member in members {
        match member {
            ClassMember::Method {
                key,
                kind: _,
                is_static: _,
                function,
            } => {
                walk_property_key(visitor, key);
                visitor.visit_function(function);
            }
            ClassMember::Field {
                key,
                value,
                is_static: _,
                span: _,
            } => {
                walk_property_key(visitor, key);
                if let Some(value) = value {
                    visitor.visit_expr(value);
                }
            }
            ClassMember::StaticBlock(block) => visitor.visit_block(block),
        }
    }
}

pub fn walk_jsx_element<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    element: &'ast JsxElement,
) {
    let JsxElement {
        name: _,
        attributes,
        children,
        self_closing: _,
        span: _,
    } = element;
    for attribute in attributes {
        match attribute {
            JsxAttribute::Named { name: _, value } => match value {
                Some(JsxAttributeValue::Expression(expr)) => visitor.visit_expr(expr),
                Some(JsxAttributeValue::Element(element)) => visitor.visit_jsx_element(element),
                Some(JsxAttributeValue::String(_)) | None => {}
            },
            JsxAttribute::Spread(expr) => visitor.visit_expr(expr),
        }
    }
    for child in children {
        match child {
            JsxChild::Expression(expr) | JsxChild::Spread(expr) => visitor.visit_expr(expr),
            JsxChild::Element(element) => visitor.visit_jsx_element(element),
            JsxChild::Text(_) => {}
        }
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expression) {
    match expr {
        Expression::Identifier { name: _, span: _ }
        | Expression::This { span: _ }
        | Expression::Super { span: _ }
        | Expression::Null { span: _ }
        | Expression::Boolean { value: _, span: _ }
        | Expression::Number { raw: _, span: _ }
        | Expression::String { value: _, span: _ }
        | Expression::Regex { raw: _, span: _ } => {}
        Expression::Template {
            quasis: _,
            expressions,
            span: _,
        } => {
            for expr in expressions {
                visitor.visit_expr(expr);
            }
        }
        Expression::TaggedTemplate {
            tag,
            quasis: _,
            expressions,
            span: _,
        } => {
            visitor.visit_expr(tag);
            for expr in expressions {
                visitor.visit_expr(expr);
            }
        }
        Expression::Array { elements, span: _ } => {
            for element in elements.iter().flatten() {
                visitor.visit_expr(element);
            }
        }
        Expression::Object {
            properties,
            span: _,
        } => {
            for property in properties {
                match property {
                    Property::KeyValue { key, value } => {
                        walk_property_key(visitor, key);
                        visitor.visit_expr(value);
                    }
                    Property::Shorthand { name: _, default } => {
                        if let Some(default) = default {
                            visitor.visit_expr(default);
                        }
                    }
                    Property::Method {
                        key,
                        kind: _,
                        function,
                    } => {
                        walk_property_key(visitor, key);
                        visitor.visit_function(function);
                    }
                    Property::Spread(expr) => visitor.visit_expr(expr),
                }
            }
        }
        Expression::Function { function, span: _ } => visitor.visit_function(function),
        Expression::Arrow {
            parameters,
            body,
            is_async: _,
            span: _,
        } => {
            for parameter in parameters {
                visitor.visit_expr(parameter);
            }
            match body {
                ArrowBody::Expression(expr) => visitor.visit_expr(expr),
                ArrowBody::Block(block) => visitor.visit_block(block),
            }
        }
        Expression::Class { class, span: _ } => visitor.visit_class(class),
        Expression::Prefix {
            operator: _,
            right,
            span: _,
        } => visitor.visit_expr(right),
        Expression::Postfix {
            operator: _,
            left,
            span: _,
        } => visitor.visit_expr(left),
        Expression::Infix {
            left,
            operator: _,
            right,
            span: _,
        } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        Expression::Assign {
            target,
            operator: _,
            value,
            span: _,
        } => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
        Expression::Conditional {
            condition,
            consequence,
            alternative,
            span: _,
        } => {
            visitor.visit_expr(condition);
            visitor.visit_expr(consequence);
            visitor.visit_expr(alternative);
        }
        Expression::Call {
            function,
            arguments,
            optional: _,
            span: _,
        } => {
            visitor.visit_expr(function);
            for argument in arguments {
                visitor.visit_expr(argument);
            }
        }
        Expression::New {
            callee,
            arguments,
            span: _,
        } => {
            visitor.visit_expr(callee);
            for argument in arguments {
                visitor.visit_expr(argument);
            }
        }
        Expression::Member {
            object,
            property: _,
            optional: _,
            span: _,
        } => visitor.visit_expr(object),
        Expression::Index {
            left,
            index,
            optional: _,
            span: _,
        } => {
            visitor.visit_expr(left);
            visitor.visit_expr(index);
        }
        Expression::Sequence {
            expressions,
            span: _,
        } => {
            for expr in expressions {
                visitor.visit_expr(expr);
            }
        }
        Expression::Spread { argument, span: _ } | Expression::Await { argument, span: _ } => {
            visitor.visit_expr(argument)
        }
        Expression::Yield {
            argument,
            delegate: _,
            span: _,
        } => {
            if let Some(argument) = argument {
                visitor.visit_expr(argument);
            }
        }
        Expression::Jsx { element, span: _ } => visitor.visit_jsx_element(element),
    }
}
