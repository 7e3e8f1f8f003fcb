use std::collections::HashMap;

use super::{Code, ErrorMap, ErrorMapError};

/// In-memory error map with a reverse template index.
///
/// `lookup_or_allocate` is the only mutation: existing templates keep their
/// code forever and new templates get `max + 1`.
#[derive(Debug, Clone)]
pub struct ErrorMapStore {
    map: ErrorMap,
    index: HashMap<String, Code>,
    /// `None` when the highest code is `u64::MAX`.
    next_code: Option<Code>,
}

impl Default for ErrorMapStore {
    fn default() -> Self {
        ErrorMapStore {
            map: ErrorMap::new(),
            index: HashMap::new(),
            next_code: Some(Code::ZERO),
        }
    }
}

impl ErrorMapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the reverse index, rejecting maps where a template appears
    /// under more than one code.
    pub fn build_index(map: ErrorMap) -> Result<Self, ErrorMapError> {
        let mut index = HashMap::with_capacity(map.len());
        for (code, template) in map.iter() {
            if let Some(&first) = index.get(template) {
                return Err(ErrorMapError::DuplicateTemplate {
                    template: template.to_string(),
                    first,
                    second: code,
                });
            }
            index.insert(template.to_string(), code);
        }
        Ok(Self::with_index(map, index))
    }

    /// Like [`build_index`](Self::build_index), but duplicate templates are
    /// logged and resolved to their first code in file order. Every entry is
    /// still written back unchanged.
    pub fn build_index_lenient(map: ErrorMap) -> Self {
        let mut index: HashMap<String, Code> = HashMap::with_capacity(map.len());
        for (code, template) in map.iter() {
            match index.get(template) {
                Some(&first) => {
                    tracing::warn!(
                        template,
                        first = %first,
                        duplicate = %code,
                        "template appears under several codes; using the first"
                    );
                }
                None => {
                    index.insert(template.to_string(), code);
                }
            }
        }
        Self::with_index(map, index)
    }

    fn with_index(map: ErrorMap, index: HashMap<String, Code>) -> Self {
        let next_code = map.max_code().map_or(Some(Code::ZERO), Code::next);
        ErrorMapStore {
            map,
            index,
            next_code,
        }
    }

    /// The code for `template`, allocating the next free code when unseen.
    /// Fails only when every code is taken; codes are never reused.
    pub fn lookup_or_allocate(&mut self, template: &str) -> Result<Code, ErrorMapError> {
        if let Some(&code) = self.index.get(template) {
            return Ok(code);
        }
        let Some(code) = self.next_code else {
            return Err(ErrorMapError::CodesExhausted {
                template: template.to_string(),
                last: self.map.max_code().unwrap_or_default(),
            });
        };
        self.next_code = code.next();
        self.index.insert(template.to_string(), code);
        self.map.insert(code, template.to_string());
        tracing::debug!(code = %code, template, "allocated error code");
        Ok(code)
    }

    pub fn lookup(&self, template: &str) -> Option<Code> {
        self.index.get(template).copied()
    }

    pub fn next_code(&self) -> Option<Code> {
        self.next_code
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn map(&self) -> &ErrorMap {
        &self.map
    }

    pub fn into_map(self) -> ErrorMap {
        self.map
    }

    /// The full map as written to disk.
    pub fn serialize(&self) -> Result<String, ErrorMapError> {
        self.map.to_json()
    }
}
