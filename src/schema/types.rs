//! Definitions-table types
//!
//! The Swagger-style data model: entity definitions keyed by entity name,
//! and the property schemas that accumulate inside them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// The full mapping of entity name to entity definition, the unit of
/// merge/persistence. Entities are never deleted during inference.
pub type DefinitionsTable = BTreeMap<String, EntityDefinition>;

/// Schema primitive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// Entity definitions
    Object,
    /// Array properties
    Array,
    /// Text values, and nulls by convention
    String,
    /// Integral numbers
    Integer,
    /// Booleans
    Boolean,
    /// Floating-point numbers
    Number,
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::Object => write!(f, "object"),
            SchemaType::Array => write!(f, "array"),
            SchemaType::String => write!(f, "string"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::Number => write!(f, "number"),
        }
    }
}

/// Runtime kind of a scalar JSON value.
///
/// A closed enumeration with exhaustive handling: anything outside it is a
/// named failure, never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Text
    String,
    /// Integral number
    Integer,
    /// Boolean
    Boolean,
    /// Floating-point number
    Number,
    /// Null
    Null,
}

impl ScalarKind {
    /// Classify a scalar JSON value.
    ///
    /// Objects and arrays are not scalars and fail with
    /// [`Error::UnsupportedType`]; the tree walker intercepts them before
    /// this point. A number that classifies as neither integral nor floating
    /// point fails the same way.
    pub fn of(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(_) => Ok(Self::Boolean),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Ok(Self::Integer)
                } else if n.is_f64() {
                    Ok(Self::Number)
                } else {
                    Err(Error::unsupported_type("number"))
                }
            }
            Value::String(_) => Ok(Self::String),
            Value::Array(_) => Err(Error::unsupported_type("array")),
            Value::Object(_) => Err(Error::unsupported_type("object")),
        }
    }

    /// The schema primitive this kind documents as. Nulls document as
    /// strings.
    pub fn schema_type(self) -> SchemaType {
        match self {
            Self::String | Self::Null => SchemaType::String,
            Self::Integer => SchemaType::Integer,
            Self::Boolean => SchemaType::Boolean,
            Self::Number => SchemaType::Number,
        }
    }
}

/// `items` clause of an array property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayItems {
    /// Pointer to the item entity's definition
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// One property of an entity definition.
///
/// Not a closed variant: overlay semantics let facets from differently
/// shaped samples coexist on one property (a `$ref` recorded by one
/// traversal and an `example` recorded by a later one). Absent facets stay
/// absent in the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Schema primitive, or `array`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    /// Pointer to another entity's definition
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Item entity pointer for array properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ArrayItems>,

    /// Sampled value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Keys from pre-existing documents this tool does not model; preserved
    /// across load/infer/save round trips
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PropertySchema {
    /// Reference property pointing at a nested entity
    pub fn reference(entity: &str) -> Self {
        Self {
            reference: Some(format!("#/definitions/{entity}")),
            ..Self::default()
        }
    }

    /// Array property pointing at an item entity
    pub fn array(item_entity: &str) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(ArrayItems {
                reference: format!("#/definitions/{item_entity}"),
            }),
            ..Self::default()
        }
    }

    /// Scalar property with the sampled value as its example
    pub fn scalar(kind: ScalarKind, example: Value) -> Self {
        Self {
            schema_type: Some(kind.schema_type()),
            example: Some(example),
            ..Self::default()
        }
    }

    /// Field-by-field overlay: facets present on `patch` overwrite, facets
    /// absent on `patch` are preserved.
    pub fn overlay(&mut self, patch: PropertySchema) {
        if let Some(schema_type) = patch.schema_type {
            self.schema_type = Some(schema_type);
        }
        if let Some(reference) = patch.reference {
            self.reference = Some(reference);
        }
        if let Some(items) = patch.items {
            self.items = Some(items);
        }
        if let Some(example) = patch.example {
            self.example = Some(example);
        }
        self.extra.extend(patch.extra);
    }
}

/// A named object schema in the definitions table, corresponding to one JSON
/// object shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDefinition {
    /// Always `object` for entities created by inference
    #[serde(rename = "type", default = "SchemaType::object")]
    pub entity_type: SchemaType,

    /// Human-readable title, set once on creation and never overwritten
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Human-readable description, set once on creation and never
    /// overwritten
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Accumulated properties; individual entries are added or updated,
    /// the map itself is never wholesale-replaced
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertySchema>,

    /// Keys from pre-existing documents this tool does not model
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SchemaType {
    fn object() -> Self {
        SchemaType::Object
    }
}

impl EntityDefinition {
    /// Overlay a property patch, creating the property slot if absent.
    pub fn overlay_property(&mut self, name: &str, patch: PropertySchema) {
        self.properties
            .entry(name.to_string())
            .or_default()
            .overlay(patch);
    }

    /// Get a property
    pub fn get_property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(name)
    }
}
