use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use extract_errors::{
    ExtractError, Pipeline, RawConfig, collect_source_files, fs::OsFileSystem,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Collect invariant messages into a stable error-code map and write the
/// dev/prod error helpers.
#[derive(Parser, Debug)]
#[command(name = "extract-errors", version, about)]
struct Cli {
    /// Source files or directories to scan.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON file with default options; flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path of the error-code map to read and rewrite.
    #[arg(long = "error-map")]
    error_map_file_path: Option<String>,

    /// Display name used in the generated helpers.
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    lookup_url_prefix: Option<String>,

    /// Output directory for the helpers (defaults to the map's directory).
    #[arg(long)]
    helpers_dir: Option<String>,

    /// Callee name treated as the assertion function.
    #[arg(long)]
    assertion_name: Option<String>,

    /// Fail on a corrupt map or duplicate templates instead of repairing.
    #[arg(long)]
    strict: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> RawConfig {
        let string = |value: &Option<String>| value.clone().map(Value::String);
        RawConfig {
            error_map_file_path: string(&self.error_map_file_path),
            name: string(&self.name),
            lookup_url_prefix: string(&self.lookup_url_prefix),
            helpers_dir: string(&self.helpers_dir),
            assertion_name: string(&self.assertion_name),
            strict: self.strict.then_some(Value::Bool(true)),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("extract-errors: {err}");
            if let ExtractError::Syntax { diagnostics, .. } = &err {
                for diagnostic in diagnostics.iter().skip(1) {
                    eprintln!("  {diagnostic}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ExtractError> {
    let file_config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| ExtractError::Io {
                action: "read",
                path: path.clone(),
                source,
            })?;
            RawConfig::from_json(&raw)?
        }
        None => RawConfig::default(),
    };
    let config = file_config.merge(cli.overrides()).validate()?;

    let files = collect_source_files(&cli.inputs)?;
    let summary = Pipeline::new(&OsFileSystem, &config).run(&files)?;
    println!(
        "{} files, {} assertion sites, {} new codes ({} total) -> {}",
        summary.files_scanned,
        summary.assertion_sites,
        summary.new_codes,
        summary.total_codes,
        summary.emitted.error_map.display()
    );
    Ok(())
}
