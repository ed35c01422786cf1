//! Definitions inference from sample JSON documents
//!
//! Walks a parsed JSON value depth-first and accumulates Swagger entity
//! definitions into a caller-owned table.

use serde_json::Value;
use tracing::{debug, trace};

use super::types::{DefinitionsTable, PropertySchema, ScalarKind};
use crate::error::{Error, Result};
use crate::naming;

/// Schema inferrer with configuration options
#[derive(Debug, Clone, Default)]
pub struct SchemaInferrer {
    /// Maximum nesting depth, unbounded when `None`
    max_depth: Option<usize>,
}

impl SchemaInferrer {
    /// Create a new inferrer with default settings
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    /// Bound the recursion depth.
    ///
    /// Without a bound, recursion depth equals the nesting depth of the
    /// input document. Inference past the bound aborts with
    /// [`Error::MaxDepthExceeded`].
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Infer entity definitions for `value` under the entity named `root`,
    /// merging into `definitions`.
    ///
    /// The table accumulates across calls: entities already present keep
    /// their title and description, and their properties are extended by
    /// field-by-field overlay. Unrelated entities are never touched or
    /// deleted. On error the table is left exactly as it was before the
    /// call.
    pub fn infer(
        &self,
        definitions: &mut DefinitionsTable,
        value: &Value,
        root: &str,
    ) -> Result<()> {
        // Work on a scratch copy so a failed traversal cannot leave the
        // caller's table half-updated.
        let mut working = definitions.clone();
        ensure_entity(&mut working, root);
        self.walk(&mut working, value, root, 0)?;
        *definitions = working;
        Ok(())
    }

    fn walk(
        &self,
        definitions: &mut DefinitionsTable,
        value: &Value,
        entity: &str,
        depth: usize,
    ) -> Result<()> {
        if let Some(limit) = self.max_depth {
            if depth > limit {
                return Err(Error::MaxDepthExceeded { limit });
            }
        }

        let Value::Object(members) = value else {
            // Scalar array elements have no members to contribute.
            return Ok(());
        };

        for (key, member) in members {
            match member {
                Value::Object(_) => {
                    let child = naming::entity_name(key);
                    overlay_property(definitions, entity, key, PropertySchema::reference(&child));
                    ensure_entity(definitions, &child);
                    trace!(depth, entity = %child, "descending into nested object");
                    self.walk(definitions, member, &child, depth + 1)?;
                }
                Value::Array(elements) => {
                    let item_entity = naming::singularize(&naming::entity_name(key));
                    overlay_property(definitions, entity, key, PropertySchema::array(&item_entity));
                    // Every element overlays the same item entity, so the
                    // item schema is the union of all element shapes.
                    for element in elements {
                        ensure_entity(definitions, &item_entity);
                        self.walk(definitions, element, &item_entity, depth + 1)?;
                    }
                }
                scalar => {
                    let kind = ScalarKind::of(scalar)?;
                    trace!(depth, entity, key, r#type = %kind.schema_type(), "recording scalar property");
                    overlay_property(
                        definitions,
                        entity,
                        key,
                        PropertySchema::scalar(kind, scalar.clone()),
                    );
                }
            }
        }

        Ok(())
    }
}

/// Create the entity's default definition if it is not in the table yet.
fn ensure_entity(definitions: &mut DefinitionsTable, name: &str) {
    definitions.entry(name.to_string()).or_insert_with(|| {
        debug!(entity = name, "creating entity definition");
        naming::default_definition(name)
    });
}

/// Overlay a property patch onto an entity already present in the table.
fn overlay_property(
    definitions: &mut DefinitionsTable,
    entity: &str,
    key: &str,
    patch: PropertySchema,
) {
    if let Some(definition) = definitions.get_mut(entity) {
        definition.overlay_property(key, patch);
    }
}

/// Infer definitions with default settings (convenience function)
pub fn infer_definitions(
    definitions: &mut DefinitionsTable,
    value: &Value,
    root: &str,
) -> Result<()> {
    SchemaInferrer::new().infer(definitions, value, root)
}
