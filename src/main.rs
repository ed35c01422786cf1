//! swaggen CLI
//!
//! Generates Swagger definitions from sample JSON documents

use clap::Parser;
use swaggen::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging; -v shows the traversal trace
    let default_level = if cli.verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    let runner = Runner::new(cli);
    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
