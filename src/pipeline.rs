//! One extraction run: load the map, scan sources in a fixed order,
//! allocate codes, write the map and helpers.

use std::{
    io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    config::ExtractConfig,
    emit::{EmittedFiles, Emitter},
    error::ExtractError,
    error_map::{ErrorMap, ErrorMapStore},
    fs::FileSystem,
    scanner::Scanner,
};

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files_scanned: usize,
    pub assertion_sites: usize,
    pub new_codes: usize,
    pub total_codes: usize,
    pub emitted: EmittedFiles,
}

/// Expand `inputs` into the sorted, de-duplicated list of source files.
/// Directories are walked recursively for JavaScript files; explicit file
/// paths are kept regardless of extension.
pub fn collect_source_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, ExtractError> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }
        for entry in WalkDir::new(input).follow_links(true) {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(input.as_path()).to_path_buf();
                ExtractError::io("walk", path, io::Error::other(err))
            })?;
            if entry.file_type().is_file() && is_source_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

pub struct Pipeline<'a, F: FileSystem> {
    fs: &'a F,
    config: &'a ExtractConfig,
    scanner: Scanner,
}

impl<'a, F: FileSystem> Pipeline<'a, F> {
    pub fn new(fs: &'a F, config: &'a ExtractConfig) -> Self {
        Pipeline {
            fs,
            config,
            scanner: Scanner::new(config.assertion_name.clone()),
        }
    }

    /// Load the existing map. A missing file is an empty map; an unreadable
    /// one is reset unless the run is strict.
    pub fn load_store(&self) -> Result<ErrorMapStore, ExtractError> {
        let path = &self.config.error_map_file_path;
        let raw = match self.fs.read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no existing error map");
                return Ok(ErrorMapStore::new());
            }
            Err(err) => return Err(ExtractError::io("read", path, err)),
        };

        let map_error = |source| ExtractError::ErrorMap {
            path: path.clone(),
            source,
        };
        if self.config.strict {
            let map = ErrorMap::parse(&raw).map_err(map_error)?;
            ErrorMapStore::build_index(map).map_err(map_error)
        } else {
            Ok(ErrorMapStore::build_index_lenient(ErrorMap::load(&raw)))
        }
    }

    /// Scan one file and register its templates. Syntax errors are fatal.
    pub fn scan_file(&self, path: &Path, store: &mut ErrorMapStore) -> Result<usize, ExtractError> {
        let source = self
            .fs
            .read_to_string(path)
            .map_err(|err| ExtractError::io("read", path, err))?;
        let (report, codes) =
            self.scanner
                .scan_into(&source, store)
                .map_err(|source| ExtractError::ErrorMap {
                    path: self.config.error_map_file_path.clone(),
                    source,
                })?;
        if report.has_errors() {
            return Err(ExtractError::Syntax {
                path: path.to_path_buf(),
                diagnostics: report.errors,
            });
        }
        tracing::debug!(path = %path.display(), sites = codes.len(), "scanned");
        Ok(codes.len())
    }

    /// Run over `files`, which are processed in sorted order. Nothing is
    /// written unless every file scans cleanly.
    pub fn run(&self, files: &[PathBuf]) -> Result<ExtractSummary, ExtractError> {
        let mut files = files.to_vec();
        files.sort();
        files.dedup();

        let mut store = self.load_store()?;
        let existing = store.len();

        let mut assertion_sites = 0;
        for path in &files {
            assertion_sites += self.scan_file(path, &mut store)?;
        }

        let emitted = Emitter::new(self.fs, self.config).emit(&store)?;
        let summary = ExtractSummary {
            files_scanned: files.len(),
            assertion_sites,
            new_codes: store.len() - existing,
            total_codes: store.len(),
            emitted,
        };
        tracing::info!(
            files = summary.files_scanned,
            sites = summary.assertion_sites,
            new_codes = summary.new_codes,
            total_codes = summary.total_codes,
            "extraction finished"
        );
        Ok(summary)
    }
}
