//! Swagger document shell
//!
//! Loads an existing Swagger/OpenAPI YAML document, exposes its
//! `definitions` section as a typed table, and writes the merged result back
//! without touching any other top-level section.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value as YamlValue};
use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::DefinitionsTable;

const DEFINITIONS_KEY: &str = "definitions";

/// An in-memory Swagger document: arbitrary top-level sections plus the
/// `definitions` section this tool maintains.
#[derive(Debug, Clone, Default)]
pub struct SwaggerDocument {
    root: Mapping,
}

impl SwaggerDocument {
    /// Load a document from a YAML file.
    ///
    /// An absent or empty file yields an empty document; a merged schema can
    /// always be seeded from nothing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no existing swagger file, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read swagger file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse a document from a YAML string. Blank input yields an empty
    /// document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let root: YamlValue = serde_yaml::from_str(content)?;
        match root {
            YamlValue::Null => Ok(Self::default()),
            YamlValue::Mapping(map) => Ok(Self { root: map }),
            _ => Err(Error::config("Swagger document root must be a mapping")),
        }
    }

    /// Deserialize the `definitions` section, empty if the section is
    /// absent.
    pub fn definitions(&self) -> Result<DefinitionsTable> {
        match self.root.get(DEFINITIONS_KEY) {
            Some(value) => Ok(serde_yaml::from_value(value.clone())?),
            None => Ok(DefinitionsTable::new()),
        }
    }

    /// Replace the `definitions` section, leaving every other top-level
    /// section as it was.
    pub fn set_definitions(&mut self, definitions: &DefinitionsTable) -> Result<()> {
        let value = serde_yaml::to_value(definitions)?;
        self.root
            .insert(YamlValue::String(DEFINITIONS_KEY.to_string()), value);
        Ok(())
    }

    /// Serialize the document to a YAML string.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Write the document to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.to_yaml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_file_yields_empty_document() {
        let document = SwaggerDocument::load("/nonexistent/swagger.yaml").unwrap();
        assert!(document.definitions().unwrap().is_empty());
    }

    #[test]
    fn test_blank_content_yields_empty_document() {
        let document = SwaggerDocument::from_yaml_str("   \n").unwrap();
        assert!(document.definitions().unwrap().is_empty());
    }

    #[test]
    fn test_non_mapping_root_rejected() {
        let result = SwaggerDocument::from_yaml_str("- just\n- a\n- list\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_definitions_section_round_trip() {
        let yaml = "\
swagger: '2.0'
info:
  title: Sample API
definitions:
  User:
    type: object
    title: User
    description: User Entity
    properties:
      name:
        type: string
        example: Ann
";
        let document = SwaggerDocument::from_yaml_str(yaml).unwrap();
        let definitions = document.definitions().unwrap();

        let user = definitions.get("User").unwrap();
        assert_eq!(user.title, "User");
        let name = user.get_property("name").unwrap();
        assert_eq!(name.example, Some(serde_json::json!("Ann")));
    }

    #[test]
    fn test_set_definitions_preserves_other_sections() {
        let yaml = "\
swagger: '2.0'
info:
  title: Sample API
paths:
  /users:
    get:
      summary: List users
";
        let mut document = SwaggerDocument::from_yaml_str(yaml).unwrap();
        let mut definitions = document.definitions().unwrap();
        crate::schema::infer_definitions(
            &mut definitions,
            &serde_json::json!({"name": "Ann"}),
            "User",
        )
        .unwrap();
        document.set_definitions(&definitions).unwrap();

        let output = document.to_yaml_string().unwrap();
        let reloaded = SwaggerDocument::from_yaml_str(&output).unwrap();

        assert!(output.contains("swagger: '2.0'"));
        assert!(output.contains("/users"));
        assert!(reloaded.definitions().unwrap().contains_key("User"));
    }

    #[test]
    fn test_unmodeled_property_keys_survive() {
        let yaml = "\
definitions:
  Legacy:
    type: object
    title: Legacy
    description: Legacy Entity
    properties:
      code:
        type: string
        format: uuid
        example: abc
";
        let document = SwaggerDocument::from_yaml_str(yaml).unwrap();
        let definitions = document.definitions().unwrap();

        let code = definitions.get("Legacy").unwrap().get_property("code").unwrap();
        assert_eq!(code.extra.get("format"), Some(&serde_json::json!("uuid")));

        let mut document = document;
        document.set_definitions(&definitions).unwrap();
        assert!(document.to_yaml_string().unwrap().contains("format: uuid"));
    }
}
