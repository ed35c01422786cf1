//! # swaggen
//!
//! Infer Swagger `definitions` from sample JSON documents, based on an
//! entities concept.
//!
//! ## Features
//!
//! - **Entity Inference**: every nested object becomes a named entity
//! - **Array Item Entities**: array keys are singularized (`tags` → `Tag`)
//!   and every element contributes to the item entity's schema
//! - **Merge Semantics**: inferred definitions merge into an existing
//!   swagger document without clobbering unrelated entities
//! - **Scalar Examples**: sampled scalar values are kept as `example`s
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use swaggen::{infer_definitions, DefinitionsTable};
//!
//! let sample = serde_json::json!({"user": {"name": "Ann"}});
//! let mut definitions = DefinitionsTable::new();
//! infer_definitions(&mut definitions, &sample, "Root")?;
//!
//! // definitions now holds "Root" (with a $ref property) and "User"
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        cli / document                     │
//! │   parse args → load swagger YAML → infer → save merged    │
//! └───────────────────────────────┬───────────────────────────┘
//!                                 │
//! ┌───────────────┬───────────────┴────────────┬──────────────┐
//! │    naming     │           schema           │    error     │
//! ├───────────────┼────────────────────────────┼──────────────┤
//! │ entity names  │ SchemaInferrer (traversal) │ one enum,    │
//! │ word splits   │ DefinitionsTable model     │ Result alias │
//! │ singulars     │ property overlay           │              │
//! └───────────────┴────────────────────────────┴──────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the crate
pub mod error;

/// Entity naming helpers
pub mod naming;

/// Definitions data model and inference
pub mod schema;

/// Swagger document load/merge/save
pub mod document;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use document::SwaggerDocument;
pub use error::{Error, Result};
pub use schema::{
    infer_definitions, DefinitionsTable, EntityDefinition, PropertySchema, SchemaInferrer,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
