use extract_errors::error_map::{Code, ErrorMap, ErrorMapStore};
use extract_errors::scanner::Scanner;
use extract_errors::syntax::diagnostic::UNTERMINATED_LITERAL;

fn templates(source: &str) -> Vec<String> {
    let report = Scanner::default().scan(source);
    assert!(!report.has_errors(), "unexpected errors: {:?}", report.errors);
    report.templates().map(str::to_string).collect()
}

#[test]
fn finds_calls_in_source_order() {
    let source = r#"
        invariant(a, 'first');
        function check(x) {
            invariant(x != null, 'second %s', x);
            return x;
        }
        invariant(b, 'third ' + b);
    "#;
    assert_eq!(templates(source), vec!["first", "second %s", "third %s"]);
}

#[test]
fn nested_calls_are_reported_outer_first() {
    let source = "invariant(a, 'outer ' + check(() => invariant(b, 'inner')));";
    assert_eq!(templates(source), vec!["outer %s", "inner"]);
}

#[test]
fn calls_inside_every_construct_are_found() {
    let source = r#"
        class Widget extends Base {
            static create() { invariant(a, 'static'); }
            render() {
                return <div onClick={() => invariant(b, 'jsx')}>{items.map(i => i)}</div>;
            }
        }
        const handler = async function () {
            try { await load(); } catch (e) { invariant(false, 'caught ' + e.message); }
        };
        switch (kind) {
            case 1: invariant(c, `case ${kind}`); break;
        }
        export default () => invariant(d, 'arrow');
    "#;
    assert_eq!(
        templates(source),
        vec!["static", "jsx", "caught %s", "case %s", "arrow"]
    );
}

#[test]
fn ignores_non_matching_callees() {
    let source = r#"
        obj.invariant(a, 'member');
        invariant?.(a, 'optional');
        invariantX(a, 'other name');
        new invariant(a, 'constructed');
        invariant(onlyCondition);
    "#;
    assert!(templates(source).is_empty());
}

#[test]
fn custom_assertion_name() {
    let report = Scanner::new("assert").scan("assert(a, 'x'); invariant(b, 'y');");
    let found: Vec<&str> = report.templates().collect();
    assert_eq!(found, vec!["x"]);
}

#[test]
fn site_positions_point_at_the_call() {
    let report = Scanner::default().scan("x;\n  invariant(a, 'm');");
    assert_eq!(report.sites.len(), 1);
    assert_eq!(report.sites[0].position.line, 2);
    assert_eq!(report.sites[0].position.column, 2);
}

#[test]
fn scan_into_allocates_in_site_order() {
    let mut store = ErrorMapStore::new();
    let scanner = Scanner::default();
    let (_, codes) = scanner
        .scan_into("invariant(a, 'a'); invariant(b, 'b'); invariant(c, 'a');", &mut store)
        .unwrap();
    assert_eq!(codes, vec![Code::new(0), Code::new(1), Code::new(0)]);
    assert_eq!(store.len(), 2);
}

#[test]
fn scan_into_reuses_existing_codes() {
    let map: ErrorMap = [(Code::new(5), "known %s".to_string())].into_iter().collect();
    let mut store = ErrorMapStore::build_index(map).unwrap();
    let (_, codes) = Scanner::default()
        .scan_into("invariant(a, 'new'); invariant(b, 'known ' + b);", &mut store)
        .unwrap();
    assert_eq!(codes, vec![Code::new(6), Code::new(5)]);
}

#[test]
fn syntax_errors_register_nothing() {
    let mut store = ErrorMapStore::new();
    let (report, codes) =
        Scanner::default().scan_into("invariant(a, 'ok');\nconst s = 'open", &mut store).unwrap();
    assert!(report.has_errors());
    assert_eq!(report.errors[0].code, UNTERMINATED_LITERAL);
    assert!(codes.is_empty());
    assert!(store.is_empty());
}

#[test]
fn regex_literals_at_statement_start_do_not_stop_the_scan() {
    let source = r#"
        if (a) /foo/.test(b);
        invariant(a, 'after if');
        while (c) /x/g.exec(s);
        if (d) {}
        /re/.test(x);
        invariant(d, 'after ' + 'block');
    "#;
    assert_eq!(templates(source), vec!["after if", "after block"]);
}
