//! Schema inference module
//!
//! Builds Swagger "definitions" entries from sample JSON documents.
//!
//! # Features
//!
//! - **Entity Derivation**: nested objects become named entity definitions
//! - **Reference Properties**: object-valued keys link entities via `$ref`
//! - **Array Item Entities**: array keys are singularized to name the item
//!   entity, and every element overlays the same item definition
//! - **Scalar Examples**: scalar properties carry the sampled value
//! - **Merge Semantics**: repeated runs extend a table without clobbering it

mod inference;
mod types;

pub use inference::{infer_definitions, SchemaInferrer};
pub use types::{
    ArrayItems, DefinitionsTable, EntityDefinition, PropertySchema, ScalarKind, SchemaType,
};
