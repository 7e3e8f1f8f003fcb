use extract_errors::ast::{MessageShape, MessageTemplate, PLACEHOLDER, fold_message};
use extract_errors::syntax::{self, expression::Expression, statement::Statement};

/// Parse `invariant(cond, <message>)` and fold the message argument.
fn fold(message: &str) -> MessageTemplate {
    let source = format!("invariant(cond, {message});");
    let (program, errors) = syntax::parse(&source);
    assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");
    let Some(Statement::Expression { expression, .. }) = program.statements.first() else {
        panic!("expected expression statement in {source:?}");
    };
    let Expression::Call { arguments, .. } = expression else {
        panic!("expected call, got {expression:?}");
    };
    fold_message(&arguments[1])
}

fn text(message: &str) -> String {
    fold(message).text
}

#[test]
fn plain_literal_is_kept() {
    let template = fold("'Expected a function.'");
    assert_eq!(template.text, "Expected a function.");
    assert_eq!(template.placeholders, 0);
}

#[test]
fn concatenation_replaces_runtime_values() {
    let template = fold("'Expected ' + name + ' to be ' + kind + '.'");
    assert_eq!(template.text, "Expected %s to be %s.");
    assert_eq!(template.placeholders, 2);
}

#[test]
fn any_non_literal_operand_is_one_placeholder() {
    assert_eq!(text("'a' + obj.prop"), "a%s");
    assert_eq!(text("'a' + fn(x, y)"), "a%s");
    assert_eq!(text("'a' + (x ? 'y' : 'z')"), "a%s");
    assert_eq!(text("'a' + 42"), "a%s");
    assert_eq!(text("'a' + typeof x"), "a%s");
}

#[test]
fn arithmetic_subtree_folds_to_single_placeholder() {
    assert_eq!(text("(count + 1) + ' items'"), "%s items");
    assert_eq!(text("'n=' + (a + b)"), "n=%s");
}

#[test]
fn adjacent_literals_merge() {
    assert_eq!(text("'foo' + 'bar' + \"baz\""), "foobarbaz");
}

#[test]
fn template_literal_substitutions_are_placeholders() {
    let template = fold("`Expected ${name} to be ${'a ' + kind}`");
    assert_eq!(template.text, "Expected %s to be a %s");
    assert_eq!(template.placeholders, 2);
    assert_eq!(text("`no substitutions`"), "no substitutions");
}

#[test]
fn template_inside_concatenation() {
    assert_eq!(text("'x' + `y${z}` + w"), "xy%s%s");
}

#[test]
fn non_string_message_is_a_single_placeholder() {
    let template = fold("message");
    assert_eq!(template.text, PLACEHOLDER);
    assert_eq!(template.placeholders, 1);
    assert_eq!(text("a + b"), PLACEHOLDER);
    assert_eq!(text("getMessage()"), PLACEHOLDER);
}

#[test]
fn escapes_are_cooked_before_folding() {
    assert_eq!(text(r"'line\none ' + x"), "line\none %s");
    assert_eq!(text(r#"'say \"hi\"'"#), "say \"hi\"");
}

#[test]
fn literal_percent_signs_are_not_escaped() {
    assert_eq!(text("'100% of ' + x"), "100% of %s");
}

#[test]
fn shape_classification() {
    let (program, _) = syntax::parse("'a' + 1; 1 + 2; `t`; x;");
    let shapes: Vec<&str> = program
        .statements
        .iter()
        .map(|statement| match statement {
            Statement::Expression { expression, .. } => match MessageShape::of(expression) {
                MessageShape::Literal(_) => "literal",
                MessageShape::Concat { .. } => "concat",
                MessageShape::Template { .. } => "template",
                MessageShape::Other => "other",
            },
            other => panic!("unexpected statement {other:?}"),
        })
        .collect();
    assert_eq!(shapes, vec!["concat", "other", "template", "other"]);
}
