use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{error_map::ErrorMapError, syntax::diagnostic::Diagnostic};

/// Errors that abort an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid option `{option}`: {reason}")]
    Config { option: &'static str, reason: String },

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {}", .path.display(), summarize(.diagnostics))]
    Syntax {
        path: PathBuf,
        diagnostics: Vec<Diagnostic>,
    },

    #[error("error map {}: {source}", .path.display())]
    ErrorMap {
        path: PathBuf,
        #[source]
        source: ErrorMapError,
    },
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => "syntax error".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

impl ExtractError {
    pub(crate) fn config(option: &'static str, reason: impl Into<String>) -> Self {
        ExtractError::Config {
            option,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExtractError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
