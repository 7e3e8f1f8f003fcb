mod templates;

use std::path::{Path, PathBuf};

pub use templates::{HelperNames, render_dev_helper, render_prod_helper};

use crate::{
    config::ExtractConfig,
    error::ExtractError,
    error_map::{ErrorMap, ErrorMapStore},
    fs::FileSystem,
};

/// Paths written by one emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFiles {
    pub error_map: PathBuf,
    pub dev_helper: PathBuf,
    pub prod_helper: PathBuf,
}

/// Writes the error map and both helpers. Every file is fully overwritten.
pub struct Emitter<'a, F: FileSystem> {
    fs: &'a F,
    config: &'a ExtractConfig,
}

impl<'a, F: FileSystem> Emitter<'a, F> {
    pub fn new(fs: &'a F, config: &'a ExtractConfig) -> Self {
        Emitter { fs, config }
    }

    pub fn emit(&self, store: &ErrorMapStore) -> Result<EmittedFiles, ExtractError> {
        self.emit_map(store.map())
    }

    pub fn emit_map(&self, map: &ErrorMap) -> Result<EmittedFiles, ExtractError> {
        let map_path = self.config.error_map_file_path.clone();
        let json = map.to_json().map_err(|source| ExtractError::ErrorMap {
            path: map_path.clone(),
            source,
        })?;
        if let Some(parent) = map_path.parent() {
            self.ensure_dir(parent)?;
        }
        self.write(&map_path, &json)?;

        let helpers_dir = self.config.helpers_dir();
        self.ensure_dir(&helpers_dir)?;
        let names = HelperNames::for_display_name(&self.config.name);

        let dev_helper = helpers_dir.join(names.dev_file());
        self.write(&dev_helper, &render_dev_helper(&self.config.name, &names))?;

        let prod_helper = helpers_dir.join(names.prod_file());
        self.write(
            &prod_helper,
            &render_prod_helper(&self.config.name, &self.config.lookup_url_prefix, &names),
        )?;

        tracing::debug!(
            map = %map_path.display(),
            entries = map.len(),
            dev = %dev_helper.display(),
            prod = %prod_helper.display(),
            "wrote error map and helpers"
        );
        Ok(EmittedFiles {
            error_map: map_path,
            dev_helper,
            prod_helper,
        })
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), ExtractError> {
        if dir.as_os_str().is_empty() {
            return Ok(());
        }
        self.fs
            .create_dir_all(dir)
            .map_err(|err| ExtractError::io("create directory", dir, err))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), ExtractError> {
        self.fs
            .write(path, contents)
            .map_err(|err| ExtractError::io("write", path, err))
    }
}
