use crate::syntax::{
    class::ClassMember,
    diagnostic::{Diagnostic, JSX_MISMATCHED_TAG, UNTERMINATED_LITERAL},
    expression::{ArrowBody, Expression, Property},
    jsx::{JsxAttribute, JsxChild},
    lexer::Lexer,
    parser::Parser,
    program::Program,
    statement::{ForInit, Statement},
};

fn parse_ok(input: &str) -> Program {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors.is_empty(),
        "parser errors: {:?}",
        parser.errors
    );
    program
}

fn parse_errors(input: &str) -> Vec<Diagnostic> {
    let mut parser = Parser::new(Lexer::new(input));
    let _ = parser.parse_program();
    parser.errors
}

fn single_expression(input: &str) -> Expression {
    let program = parse_ok(input);
    assert_eq!(program.statements.len(), 1, "{:?}", program.statements);
    match program.statements.into_iter().next() {
        Some(Statement::Expression { expression, .. }) => expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn parses_call_with_concatenated_message() {
    let expression = single_expression("invariant(cond, 'a' + b + \"c\");");
    let Expression::Call {
        function,
        arguments,
        optional,
        ..
    } = expression
    else {
        panic!("expected call");
    };
    assert_eq!(function.as_identifier(), Some("invariant"));
    assert!(!optional);
    assert_eq!(arguments.len(), 2);
    match &arguments[1] {
        Expression::Infix {
            left, operator, right, ..
        } => {
            assert_eq!(operator, "+");
            assert!(matches!(**right, Expression::String { ref value, .. } if value == "c"));
            assert!(matches!(**left, Expression::Infix { .. }));
        }
        other => panic!("expected infix, got {:?}", other),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expression = single_expression("a + b * c");
    let Expression::Infix { operator, right, .. } = expression else {
        panic!("expected infix");
    };
    assert_eq!(operator, "+");
    assert!(matches!(*right, Expression::Infix { ref operator, .. } if operator == "*"));
}

#[test]
fn assignment_is_right_associative() {
    let expression = single_expression("a = b = c;");
    let Expression::Assign { target, value, .. } = expression else {
        panic!("expected assignment");
    };
    assert_eq!(target.as_identifier(), Some("a"));
    assert!(matches!(*value, Expression::Assign { .. }));
}

#[test]
fn parses_arrow_functions() {
    let program = parse_ok("const f = (a, {b}, ...rest) => a + b;");
    let Statement::Variable { declarators, .. } = &program.statements[0] else {
        panic!("expected variable statement");
    };
    match &declarators[0].init {
        Some(Expression::Arrow { parameters, .. }) => {
            assert_eq!(parameters.len(), 3);
            assert!(matches!(parameters[1], Expression::Object { .. }));
            assert!(matches!(parameters[2], Expression::Spread { .. }));
        }
        other => panic!("expected arrow, got {:?}", other),
    }
}

#[test]
fn parses_arrow_function_bodies() {
    let program = parse_ok("x => x; async (a = 1) => { await a; };");
    assert_eq!(program.statements.len(), 2);
    match &program.statements[0] {
        Statement::Expression {
            expression: Expression::Arrow { parameters, body, is_async, .. },
            ..
        } => {
            assert_eq!(parameters.len(), 1);
            assert!(matches!(body, ArrowBody::Expression(_)));
            assert!(!is_async);
        }
        other => panic!("expected arrow, got {:?}", other),
    }
    match &program.statements[1] {
        Statement::Expression {
            expression: Expression::Arrow { body, is_async, .. },
            ..
        } => {
            assert!(is_async);
            assert!(matches!(body, ArrowBody::Block(block) if block.statements.len() == 1));
        }
        other => panic!("expected async arrow, got {:?}", other),
    }
}

#[test]
fn parenthesized_expression_is_not_an_arrow() {
    let expression = single_expression("(a, b)");
    assert!(matches!(expression, Expression::Sequence { ref expressions, .. } if expressions.len() == 2));
}

#[test]
fn parses_template_literal_parts() {
    let expression = single_expression("`x ${a} y ${b + 1} z`");
    let Expression::Template {
        quasis,
        expressions,
        ..
    } = expression
    else {
        panic!("expected template");
    };
    assert_eq!(quasis, vec!["x ", " y ", " z"]);
    assert_eq!(expressions.len(), 2);
}

#[test]
fn parses_tagged_template() {
    let expression = single_expression("gql`query ${name}`");
    assert!(matches!(expression, Expression::TaggedTemplate { ref tag, .. } if tag.as_identifier() == Some("gql")));
}

#[test]
fn parses_object_literal_forms() {
    let program = parse_ok(
        "var o = { a: 1, b, [c]: 2, 'd': 3, get e() { return 1; }, async *f() {}, ...g };",
    );
    let Statement::Variable { declarators, .. } = &program.statements[0] else {
        panic!("expected variable statement");
    };
    let Some(Expression::Object { properties, .. }) = &declarators[0].init else {
        panic!("expected object literal");
    };
    assert_eq!(properties.len(), 7);
    assert!(matches!(properties[1], Property::Shorthand { ref name, .. } if name == "b"));
    assert!(matches!(properties[4], Property::Method { .. }));
    assert!(matches!(properties[6], Property::Spread(_)));
}

#[test]
fn parses_class_members() {
    let program = parse_ok(
        "class A extends B.C { static x = 1; #y; constructor() { super(); } get z() { return 1; } static { init(); } }",
    );
    let Statement::Class { class, .. } = &program.statements[0] else {
        panic!("expected class");
    };
    assert_eq!(class.name.as_deref(), Some("A"));
    assert!(class.super_class.is_some());
    assert_eq!(class.members.len(), 5);
    assert!(matches!(class.members[0], ClassMember::Field { is_static: true, .. }));
    assert!(matches!(class.members[4], ClassMember::StaticBlock(_)));
}

#[test]
fn parses_control_flow_statements() {
    let program = parse_ok(
        r#"
        for (let i = 0; i < n; i++) { if (i in seen) continue; }
        for (const key of keys) {}
        for (k in obj) break;
        while (x) x--;
        do { y(); } while (y)
        switch (v) { case 1: a(); break; default: b(); }
        try { risky(); } catch (e) { handle(e); } finally { done(); }
        outer: for (;;) { break outer; }
        "#,
    );
    assert_eq!(program.statements.len(), 8);
    assert!(matches!(program.statements[0], Statement::For { init: Some(ForInit::Declaration { .. }), .. }));
    assert!(matches!(program.statements[1], Statement::ForIn { is_of: true, .. }));
    assert!(matches!(program.statements[2], Statement::ForIn { is_of: false, .. }));
    assert!(matches!(program.statements[5], Statement::Switch { ref cases, .. } if cases.len() == 2));
    assert!(matches!(program.statements[7], Statement::Labeled { .. }));
}

#[test]
fn return_without_value_on_new_line() {
    let program = parse_ok("function f() { return\n1; }");
    let Statement::Function { function, .. } = &program.statements[0] else {
        panic!("expected function");
    };
    assert_eq!(function.body.statements.len(), 2);
    assert!(matches!(function.body.statements[0], Statement::Return { value: None, .. }));
}

#[test]
fn parses_modules_syntax() {
    let program = parse_ok(
        "import invariant from 'shared/invariant';\nimport {a as b} from \"x\";\nexport default function f() {}\nexport const c = 1;\nexport { c };\nexport * from './y';",
    );
    assert_eq!(program.statements.len(), 6);
    assert!(matches!(program.statements[0], Statement::Import { ref source, .. } if source == "shared/invariant"));
    assert!(matches!(program.statements[2], Statement::ExportDefault { .. }));
    assert!(matches!(program.statements[3], Statement::Export { .. }));
    assert!(matches!(program.statements[5], Statement::ExportNamed { source: Some(ref s), .. } if s == "./y"));
}

#[test]
fn regex_and_division_are_distinguished() {
    let program = parse_ok("var r = /ab+c/g.test(s); var d = a / b / c;");
    assert_eq!(program.statements.len(), 2);
}

/// The callee object of `<regex>.method(...)` in an expression statement.
fn regex_receiver(statement: &Statement) -> Option<&str> {
    let Statement::Expression { expression, .. } = statement else {
        return None;
    };
    let Expression::Call { function, .. } = expression else {
        return None;
    };
    let Expression::Member { object, .. } = function.as_ref() else {
        return None;
    };
    match object.as_ref() {
        Expression::Regex { raw, .. } => Some(raw),
        _ => None,
    }
}

#[test]
fn regex_after_statement_head_parens() {
    let program = parse_ok("if (a) /foo/.test(b);");
    let Some(Statement::If { consequence, .. }) = program.statements.first() else {
        panic!("expected if statement");
    };
    assert_eq!(regex_receiver(consequence), Some("/foo/"));

    let program = parse_ok("while (a) /x/g.exec(s);");
    let Some(Statement::While { body, .. }) = program.statements.first() else {
        panic!("expected while statement");
    };
    assert_eq!(regex_receiver(body), Some("/x/g"));

    let program = parse_ok("for (;;) /=a/.test(s);");
    let Some(Statement::For { body, .. }) = program.statements.first() else {
        panic!("expected for statement");
    };
    assert_eq!(regex_receiver(body), Some("/=a/"));
}

#[test]
fn regex_after_block_statement() {
    let program = parse_ok("if (a) {}\n/re/.test(x);\n{}\n/[/]/i.exec(y);");
    assert_eq!(program.statements.len(), 4);
    assert_eq!(regex_receiver(&program.statements[1]), Some("/re/"));
    assert_eq!(regex_receiver(&program.statements[3]), Some("/[/]/i"));
}

#[test]
fn division_after_parens_is_unchanged() {
    let expression = single_expression("(a + b) / c / d;");
    let Expression::Infix { operator, .. } = expression else {
        panic!("expected division");
    };
    assert_eq!(operator, "/");
}

#[test]
fn parses_jsx_elements() {
    let expression = single_expression(
        "<div className=\"x\" {...props} disabled>\n  Don't {value} <br/>\n  <Foo.Bar a={1}>text</Foo.Bar>\n  <>frag</>\n</div>",
    );
    let Expression::Jsx { element, .. } = expression else {
        panic!("expected JSX");
    };
    assert_eq!(element.name.as_deref(), Some("div"));
    assert_eq!(element.attributes.len(), 3);
    assert!(matches!(element.attributes[1], JsxAttribute::Spread(_)));
    let kinds: Vec<&str> = element
        .children
        .iter()
        .map(|child| match child {
            JsxChild::Text(_) => "text",
            JsxChild::Expression(_) => "expr",
            JsxChild::Spread(_) => "spread",
            JsxChild::Element(_) => "element",
        })
        .collect();
    assert_eq!(kinds, vec!["text", "expr", "element", "element", "element"]);
}

#[test]
fn jsx_closing_tag_mismatch_is_reported() {
    let errors = parse_errors("<a>text</b>;");
    assert!(errors.iter().any(|e| e.code == JSX_MISMATCHED_TAG), "{:?}", errors);
}

#[test]
fn jsx_less_than_is_still_comparison_after_operand() {
    let expression = single_expression("a < b");
    assert!(matches!(expression, Expression::Infix { ref operator, .. } if operator == "<"));
}

#[test]
fn optional_chaining_and_new() {
    let program = parse_ok("a?.b?.(c)?.[d]; new Foo.Bar(1).baz(); new Date;");
    assert_eq!(program.statements.len(), 3);
    match &program.statements[1] {
        Statement::Expression {
            expression: Expression::Call { function, .. },
            ..
        } => match &**function {
            Expression::Member { object, property, .. } => {
                assert_eq!(property, "baz");
                assert!(matches!(**object, Expression::New { ref arguments, .. } if arguments.len() == 1));
            }
            other => panic!("expected member, got {:?}", other),
        },
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn unterminated_string_is_reported() {
    let errors = parse_errors("invariant(x, 'oops);\n");
    assert!(errors.iter().any(|e| e.code == UNTERMINATED_LITERAL), "{:?}", errors);
}

#[test]
fn parser_recovers_after_error() {
    let mut parser = Parser::new(Lexer::new("let = ;\nfoo();\n"));
    let program = parser.parse_program();
    assert!(!parser.errors.is_empty());
    assert!(program.statements.iter().any(|statement| matches!(
        statement,
        Statement::Expression { expression: Expression::Call { .. }, .. }
    )));
}

#[test]
fn stray_closing_brace_is_an_error() {
    assert!(!parse_errors("}").is_empty());
}
