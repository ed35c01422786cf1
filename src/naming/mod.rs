//! Entity naming helpers
//!
//! Derives definitions-table entity names and human-readable titles from raw
//! JSON keys.
//!
//! # Features
//!
//! - **Entity Names**: first-character capitalization of raw keys
//! - **Word Splitting**: camel/Pascal identifiers split on capital letters
//! - **Default Definitions**: title/description defaults for new entities
//! - **Singularization**: plural keys reduced for array item entities

mod singular;

pub use singular::singularize;

use std::collections::BTreeMap;

use crate::schema::{EntityDefinition, SchemaType};

/// Derive an entity name from a raw JSON key by capitalizing only its first
/// character.
///
/// This is a lossy, order-dependent transform: it assumes the key is already
/// word-boundary-delimited by internal capitalization (`"userAddress"` →
/// `"UserAddress"`) and keeps interior characters verbatim.
pub fn entity_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Split a camel-cased or Pascal-cased identifier into its constituent words.
///
/// An uppercase letter followed by lowercase opens a word that takes the
/// whole lowercase run; a run of uppercase letters not followed by lowercase
/// closes out as one word (`"HTTPServer"` → `["HTTP", "Server"]`).
/// Characters before the first uppercase letter are skipped.
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_uppercase() {
            i += 1;
            continue;
        }
        let start = i;
        i += 1;
        if i < chars.len() && chars[i].is_lowercase() {
            while i < chars.len() && chars[i].is_lowercase() {
                i += 1;
            }
        } else {
            // Acronym run: stop before an uppercase letter that opens a
            // lowercase word of its own.
            while i < chars.len()
                && chars[i].is_uppercase()
                && !(i + 1 < chars.len() && chars[i + 1].is_lowercase())
            {
                i += 1;
            }
        }
        words.push(chars[start..i].iter().collect());
    }

    words
}

/// Default definition for a newly encountered entity: object type, title and
/// description spelled out from the entity name, no properties yet.
pub fn default_definition(name: &str) -> EntityDefinition {
    let title = split_words(name).join(" ");
    EntityDefinition {
        entity_type: SchemaType::Object,
        description: format!("{title} Entity"),
        title,
        properties: BTreeMap::new(),
        extra: BTreeMap::new(),
    }
}
