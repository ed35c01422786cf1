//! CLI module
//!
//! Command-line interface for the inference pipeline.
//!
//! # Usage
//!
//! - `swaggen sample.json User` - infer definitions under root entity `User`
//! - `swaggen sample.json User -o api.yaml` - merge into an explicit file
//! - `swaggen sample.json -v` - trace the traversal

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
