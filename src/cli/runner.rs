//! CLI runner - executes the inference pipeline

use std::fs;

use serde_json::Value;
use tracing::info;

use crate::cli::commands::Cli;
use crate::document::SwaggerDocument;
use crate::error::{Error, Result, ResultExt};
use crate::schema::SchemaInferrer;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the pipeline: read the sample document, merge inferred
    /// definitions into the swagger file, write it back.
    pub fn run(&self) -> Result<()> {
        let sample = self.read_sample()?;
        let output_path = self.cli.output_path();

        let mut document = SwaggerDocument::load(&output_path)?;
        let mut definitions = document.definitions()?;
        let known = definitions.len();

        let mut inferrer = SchemaInferrer::new();
        if let Some(depth) = self.cli.max_depth {
            inferrer = inferrer.with_max_depth(depth);
        }
        inferrer.infer(&mut definitions, &sample, &self.cli.root_entity)?;

        info!(
            entities = definitions.len(),
            new = definitions.len() - known,
            "inference complete"
        );

        document.set_definitions(&definitions)?;
        document.save(&output_path)?;

        println!(
            "Wrote {} definition(s) to {}",
            definitions.len(),
            output_path.display()
        );
        Ok(())
    }

    /// Read and parse the sample JSON document
    fn read_sample(&self) -> Result<Value> {
        let path = &self.cli.json_file;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON file '{}'", path.display()))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse JSON file '{}': {e}", path.display())))
    }
}
