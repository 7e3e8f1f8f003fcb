use extract_errors::emit::{HelperNames, render_dev_helper, render_prod_helper};
use extract_errors::error_map::{Code, ErrorMap};

#[test]
fn dev_helper() {
    let names = HelperNames::for_display_name("React DOM");
    insta::assert_snapshot!("dev_helper", render_dev_helper("React DOM", &names));
}

#[test]
fn prod_helper() {
    let names = HelperNames::for_display_name("React DOM");
    insta::assert_snapshot!(
        "prod_helper",
        render_prod_helper(
            "React DOM",
            "https://reactjs.org/docs/error-decoder.html?invariant=",
            &names
        )
    );
}

#[test]
fn error_map_json() {
    let map: ErrorMap = [
        (Code::new(0), "Expected %s to be a function.".to_string()),
        (Code::new(1), "Cannot \"quote\" %s\nacross lines.".to_string()),
        (Code::new(10), "Unicode stays: caf\u{e9}".to_string()),
    ]
    .into_iter()
    .collect();
    insta::assert_snapshot!("error_map_json", map.to_json().unwrap());
}

#[test]
fn helper_names_for_awkward_display_names() {
    assert_eq!(HelperNames::for_display_name("react").dev, "ReactDevError");
    assert_eq!(HelperNames::for_display_name("my_lib-v2").prod, "MyLibV2ProdError");
    assert_eq!(HelperNames::for_display_name("3d engine").dev, "_3dEngineDevError");
    assert_eq!(HelperNames::for_display_name("Lib").dev_file(), "LibDevError.js");
}

#[test]
fn display_name_is_quoted_safely() {
    let names = HelperNames::for_display_name("Evil");
    let source = render_prod_helper("Evil'\"</script>", "x?c='", &names);
    assert!(source.contains(r#"var DISPLAY_NAME = "Evil'\"</script>";"#));
    assert!(source.contains(r#"var LOOKUP_URL_PREFIX = "x?c='";"#));
}

#[test]
fn line_separators_are_escaped_in_generated_strings() {
    let names = HelperNames::for_display_name("Lib");
    let helper = render_prod_helper("Lib\u{2028}", "https://x.test/?a=\u{2029}", &names);
    assert!(!helper.contains('\u{2028}'));
    assert!(!helper.contains('\u{2029}'));
    assert!(helper.contains("\"https://x.test/?a=\\u2029\""), "{helper}");
}
