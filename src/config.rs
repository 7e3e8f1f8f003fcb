//! Run configuration: an optional JSON file merged with command-line flags,
//! validated before any source or map I/O happens.

use std::path::PathBuf;

use heck::ToUpperCamelCase;
use serde::Deserialize;
use serde_json::Value;

use crate::{error::ExtractError, scanner::DEFAULT_ASSERTION_NAME};

/// Options as supplied. Values stay untyped until [`RawConfig::validate`]
/// so that a wrongly typed option is reported by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub error_map_file_path: Option<Value>,
    pub name: Option<Value>,
    pub lookup_url_prefix: Option<Value>,
    pub helpers_dir: Option<Value>,
    pub assertion_name: Option<Value>,
    pub strict: Option<Value>,
}

/// Validated options for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub error_map_file_path: PathBuf,
    /// Display name embedded in generated helpers.
    pub name: String,
    pub lookup_url_prefix: String,
    /// Where helpers are written; defaults to the error map's directory.
    pub helpers_dir: Option<PathBuf>,
    pub assertion_name: String,
    /// Fail instead of resetting an unreadable map or tolerating duplicate templates.
    pub strict: bool,
}

impl RawConfig {
    pub fn from_json(raw: &str) -> Result<Self, ExtractError> {
        serde_json::from_str(raw).map_err(|err| ExtractError::config("config", err.to_string()))
    }

    /// Fields set in `overrides` replace ours.
    pub fn merge(self, overrides: RawConfig) -> RawConfig {
        RawConfig {
            error_map_file_path: overrides.error_map_file_path.or(self.error_map_file_path),
            name: overrides.name.or(self.name),
            lookup_url_prefix: overrides.lookup_url_prefix.or(self.lookup_url_prefix),
            helpers_dir: overrides.helpers_dir.or(self.helpers_dir),
            assertion_name: overrides.assertion_name.or(self.assertion_name),
            strict: overrides.strict.or(self.strict),
        }
    }

    pub fn validate(self) -> Result<ExtractConfig, ExtractError> {
        let error_map_file_path =
            required_string("errorMapFilePath", self.error_map_file_path)?.into();
        let name = required_string("name", self.name)?;
        if name.to_upper_camel_case().is_empty() {
            return Err(ExtractError::config(
                "name",
                "must contain at least one letter or digit",
            ));
        }
        let lookup_url_prefix = optional_string("lookupUrlPrefix", self.lookup_url_prefix)?
            .ok_or_else(|| ExtractError::config("lookupUrlPrefix", "is required"))?;
        let helpers_dir = optional_string("helpersDir", self.helpers_dir)?
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let assertion_name = optional_string("assertionName", self.assertion_name)?
            .unwrap_or_else(|| DEFAULT_ASSERTION_NAME.to_string());
        if !is_identifier(&assertion_name) {
            return Err(ExtractError::config(
                "assertionName",
                format!("{assertion_name:?} is not a JavaScript identifier"),
            ));
        }
        let strict = match self.strict {
            None | Some(Value::Null) => false,
            Some(Value::Bool(strict)) => strict,
            Some(other) => {
                return Err(ExtractError::config(
                    "strict",
                    format!("must be a boolean, got {}", type_name(&other)),
                ));
            }
        };

        Ok(ExtractConfig {
            error_map_file_path,
            name,
            lookup_url_prefix,
            helpers_dir,
            assertion_name,
            strict,
        })
    }
}

impl ExtractConfig {
    /// Directory receiving the generated helpers.
    pub fn helpers_dir(&self) -> PathBuf {
        match &self.helpers_dir {
            Some(dir) => dir.clone(),
            None => self
                .error_map_file_path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default(),
        }
    }
}

fn required_string(option: &'static str, value: Option<Value>) -> Result<String, ExtractError> {
    match optional_string(option, value)? {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ExtractError::config(option, "is required")),
    }
}

fn optional_string(
    option: &'static str,
    value: Option<Value>,
) -> Result<Option<String>, ExtractError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(ExtractError::config(
            option,
            format!("must be a string, got {}", type_name(&other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c == '$' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c == '$' || c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawConfig {
        RawConfig::from_json(json).unwrap()
    }

    fn option_of(err: ExtractError) -> &'static str {
        match err {
            ExtractError::Config { option, .. } => option,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn validates_complete_config() {
        let config = raw(
            r#"{"errorMapFilePath": "out/codes.json", "name": "My Lib", "lookupUrlPrefix": "https://x/?code=", "helpersDir": "gen"}"#,
        )
        .validate()
        .unwrap();
        assert_eq!(config.error_map_file_path, PathBuf::from("out/codes.json"));
        assert_eq!(config.name, "My Lib");
        assert_eq!(config.lookup_url_prefix, "https://x/?code=");
        assert_eq!(config.helpers_dir(), PathBuf::from("gen"));
        assert_eq!(config.assertion_name, "invariant");
        assert!(!config.strict);
    }

    #[test]
    fn missing_required_options_fail() {
        let err = raw(r#"{"name": "x"}"#).validate().unwrap_err();
        assert_eq!(option_of(err), "errorMapFilePath");
        let err = raw(r#"{"errorMapFilePath": "m.json"}"#).validate().unwrap_err();
        assert_eq!(option_of(err), "name");
        let err = raw(r#"{"errorMapFilePath": "", "name": "x"}"#)
            .validate()
            .unwrap_err();
        assert_eq!(option_of(err), "errorMapFilePath");
    }

    #[test]
    fn lookup_url_prefix_is_required_but_may_be_empty() {
        let err = raw(r#"{"errorMapFilePath": "m.json", "name": "x"}"#)
            .validate()
            .unwrap_err();
        assert!(
            matches!(err, ExtractError::Config { option: "lookupUrlPrefix", .. }),
            "{err:?}"
        );
        let err = raw(r#"{"errorMapFilePath": "m.json", "name": "x", "lookupUrlPrefix": null}"#)
            .validate()
            .unwrap_err();
        assert_eq!(option_of(err), "lookupUrlPrefix");
        let err = raw(r#"{"errorMapFilePath": "m.json", "name": "x", "lookupUrlPrefix": 3}"#)
            .validate()
            .unwrap_err();
        assert_eq!(option_of(err), "lookupUrlPrefix");
        let config = raw(r#"{"errorMapFilePath": "m.json", "name": "x", "lookupUrlPrefix": ""}"#)
            .validate()
            .unwrap();
        assert_eq!(config.lookup_url_prefix, "");
    }

    #[test]
    fn helpers_default_next_to_the_map() {
        let config = raw(r#"{"errorMapFilePath": "dir/sub/m.json", "name": "x", "lookupUrlPrefix": ""}"#)
            .validate()
            .unwrap();
        assert_eq!(config.helpers_dir(), PathBuf::from("dir/sub"));
    }

    #[test]
    fn flags_override_file_values() {
        let file = raw(r#"{"errorMapFilePath": "a.json", "name": "File", "lookupUrlPrefix": ""}"#);
        let flags = RawConfig {
            name: Some(Value::String("Flag".into())),
            ..RawConfig::default()
        };
        let config = file.merge(flags).validate().unwrap();
        assert_eq!(config.name, "Flag");
        assert_eq!(config.error_map_file_path, PathBuf::from("a.json"));
    }

    #[test]
    fn rejects_bad_assertion_name_and_unusable_display_name() {
        let err = raw(
            r#"{"errorMapFilePath": "m.json", "name": "x", "lookupUrlPrefix": "", "assertionName": "a.b"}"#,
        )
            .validate()
            .unwrap_err();
        assert_eq!(option_of(err), "assertionName");
        let err = raw(r#"{"errorMapFilePath": "m.json", "name": "--", "lookupUrlPrefix": ""}"#)
            .validate()
            .unwrap_err();
        assert_eq!(option_of(err), "name");
    }

    #[test]
    fn malformed_config_file_is_a_config_error() {
        let err = RawConfig::from_json("{").unwrap_err();
        assert_eq!(option_of(err), "config");
    }
}
