//! The persisted error map: decimal code strings to message templates.
//!
//! ```json
//! {
//!   "0": "Expected %s to be a function.",
//!   "1": "Cannot read property %s of undefined."
//! }
//! ```

mod store;

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
};
use thiserror::Error;

pub use store::ErrorMapStore;

/// A stable error code. Serialized as its canonical decimal string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(u64);

impl Code {
    pub const ZERO: Code = Code(0);

    pub const fn new(value: u64) -> Self {
        Code(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// `None` once the code space is used up.
    pub(crate) fn next(self) -> Option<Code> {
        self.0.checked_add(1).map(Code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Code {
    type Err = ErrorMapError;

    /// Only canonical decimal strings are codes: `"7"`, not `"07"` or `"+7"`.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || ErrorMapError::InvalidCode {
            key: key.to_string(),
        };
        if key.is_empty()
            || !key.bytes().all(|b| b.is_ascii_digit())
            || (key.len() > 1 && key.starts_with('0'))
        {
            return Err(invalid());
        }
        key.parse::<u64>().map(Code).map_err(|_| invalid())
    }
}

#[derive(Debug, Error)]
pub enum ErrorMapError {
    #[error("malformed error map JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error map key `{key}` is not a decimal error code")]
    InvalidCode { key: String },

    #[error("template {template:?} is mapped by both code {first} and code {second}")]
    DuplicateTemplate {
        template: String,
        first: Code,
        second: Code,
    },

    #[error("no error code is left after {last} for template {template:?}")]
    CodesExhausted { template: String, last: Code },

    #[error("error code {code} appears more than once")]
    DuplicateCode { code: Code },
}

/// Ordered code to template mapping, as read from or written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: IndexMap<Code, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strictly parse the on-disk JSON object.
    pub fn parse(raw: &str) -> Result<Self, ErrorMapError> {
        let RawEntries(object) = serde_json::from_str(raw)?;
        let mut entries = IndexMap::with_capacity(object.len());
        for (key, template) in object {
            let code = key.parse::<Code>()?;
            if entries.insert(code, template).is_some() {
                return Err(ErrorMapError::DuplicateCode { code });
            }
        }
        Ok(ErrorMap { entries })
    }

    /// Parse the on-disk JSON, falling back to an empty map when it is
    /// malformed. The fallback is logged since the next write discards the
    /// previous contents.
    pub fn load(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(error = %err, "error map is unreadable; starting from an empty map");
                ErrorMap::new()
            }
        }
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, ErrorMapError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn get(&self, code: Code) -> Option<&str> {
        self.entries.get(&code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (Code, &str)> {
        self.entries
            .iter()
            .map(|(code, template)| (*code, template.as_str()))
    }

    pub fn max_code(&self) -> Option<Code> {
        self.entries.keys().max().copied()
    }

    pub(crate) fn insert(&mut self, code: Code, template: String) {
        self.entries.insert(code, template);
    }
}

impl FromIterator<(Code, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (Code, String)>>(iter: I) -> Self {
        ErrorMap {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Object entries in document order, duplicates included.
struct RawEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of error codes to message templates")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawEntries, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.entries
                .iter()
                .map(|(code, template)| (code.to_string(), template)),
        )
    }
}

#[cfg(test)]
mod error_map_test;
