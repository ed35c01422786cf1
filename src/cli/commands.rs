//! CLI arguments and parsing

use clap::Parser;
use std::path::PathBuf;

/// Infer Swagger definitions from a sample JSON document
#[derive(Parser, Debug)]
#[command(name = "swaggen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sample JSON document to infer definitions from
    pub json_file: PathBuf,

    /// Name of the root entity
    #[arg(default_value = "RootEntity")]
    pub root_entity: String,

    /// Swagger YAML file to merge into (default: `<input>.swagger.yaml`
    /// beside the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum JSON nesting depth (unbounded if not set)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Verbose output (traces the traversal)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The swagger file to read and write: the explicit `--output` flag, or
    /// the input path with its extension swapped for `swagger.yaml`.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.json_file.with_extension("swagger.yaml"))
    }
}
