pub mod ast;
pub mod config;
pub mod emit;
pub mod error;
pub mod error_map;
pub mod fs;
pub mod pipeline;
pub mod scanner;
pub mod syntax;

pub use config::{ExtractConfig, RawConfig};
pub use error::ExtractError;
pub use pipeline::{ExtractSummary, Pipeline, collect_source_files};
