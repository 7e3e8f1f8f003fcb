//! JavaScript source for the generated error helpers.

use heck::ToUpperCamelCase;

/// Exported function names for one display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperNames {
    pub dev: String,
    pub prod: String,
}

impl HelperNames {
    /// `"react dom"` gives `ReactDomDevError` and `ReactDomProdError`.
    pub fn for_display_name(display_name: &str) -> Self {
        let mut stem = display_name.to_upper_camel_case();
        if stem.starts_with(|c: char| c.is_ascii_digit()) {
            stem.insert(0, '_');
        }
        HelperNames {
            dev: format!("{stem}DevError"),
            prod: format!("{stem}ProdError"),
        }
    }

    pub fn dev_file(&self) -> String {
        format!("{}.js", self.dev)
    }

    pub fn prod_file(&self) -> String {
        format!("{}.js", self.prod)
    }
}

/// Quote `value` as a JavaScript string literal.
/// JSON string quoting, plus the two line terminators JSON allows raw but
/// pre-ES2019 JavaScript string literals do not.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

pub fn render_dev_helper(display_name: &str, names: &HelperNames) -> String {
    format!(
        "\
// Generated by extract-errors for {name}. Do not edit.
'use strict';

function {function}(message) {{
  var error = new Error(message);
  error.name = 'Invariant Violation';
  return error;
}}

module.exports = {function};
",
        name = js_string(display_name),
        function = names.dev,
    )
}

pub fn render_prod_helper(display_name: &str, lookup_url_prefix: &str, names: &HelperNames) -> String {
    format!(
        "\
// Generated by extract-errors for {name}. Do not edit.
'use strict';

var DISPLAY_NAME = {name};
var LOOKUP_URL_PREFIX = {prefix};

function {function}(code) {{
  var url = LOOKUP_URL_PREFIX + code;
  for (var i = 1; i < arguments.length; i++) {{
    url += '&args[]=' + encodeURIComponent(arguments[i]);
  }}
  var error = new Error(
    'Minified ' + DISPLAY_NAME + ' error #' + code + '; visit ' + url +
      ' for the full message or use the non-minified dev environment' +
      ' for full errors and additional helpful warnings.'
  );
  error.name = 'Invariant Violation';
  return error;
}}

module.exports = {function};
",
        name = js_string(display_name),
        prefix = js_string(lookup_url_prefix),
        function = names.prod,
    )
}
