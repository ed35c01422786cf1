//! Singular forms for plural nouns
//!
//! Array properties point at an item entity named after the singular of the
//! array's key. Morphology is table-first (irregular plurals), then common
//! English suffix rules.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{entity_name, split_words};

/// Irregular plural → singular pairs, lowercase. Checked before any suffix
/// rule so exceptions never reach the generic rules.
static IRREGULARS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("children", "child"),
        ("people", "person"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("oxen", "ox"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("vertices", "vertex"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("axes", "axis"),
        ("heroes", "hero"),
        ("potatoes", "potato"),
        ("tomatoes", "tomato"),
        ("echoes", "echo"),
        ("shoes", "shoe"),
        ("toes", "toe"),
        ("houses", "house"),
        ("spouses", "spouse"),
        ("blouses", "blouse"),
        ("causes", "cause"),
        ("clauses", "clause"),
        ("pauses", "pause"),
        ("excuses", "excuse"),
        ("uses", "use"),
        ("movies", "movie"),
        ("cookies", "cookie"),
    ])
});

/// Plurals with no distinct singular form.
static UNCOUNTABLE: &[&str] = &[
    "series",
    "species",
    "sheep",
    "fish",
    "deer",
    "news",
    "information",
    "equipment",
    "data",
];

/// Reduce the final word of a camel-cased or Pascal-cased key to its
/// singular form, rejoining it with the unchanged non-final words
/// (`"UserTags"` → `"UserTag"`).
///
/// Keys whose final word has no distinct singular are returned unchanged.
pub fn singularize(key: &str) -> String {
    let words = split_words(key);
    let Some(last) = words.last() else {
        return key.to_string();
    };

    match singular_noun(last) {
        Some(singular) => {
            let mut out: String = words[..words.len() - 1].concat();
            out.push_str(&singular);
            out
        }
        None => key.to_string(),
    }
}

/// Singular of a single word, or `None` when the word is not a recognized
/// plural. Capitalization of the first character is preserved.
fn singular_noun(word: &str) -> Option<String> {
    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return None;
    }
    if let Some(singular) = IRREGULARS.get(lower.as_str()) {
        return Some(match_case(singular, word));
    }

    let stem = if let Some(base) = lower.strip_suffix("ies").filter(|b| b.len() >= 2) {
        // companies → company, but ties falls through to the plain-s rule
        format!("{base}y")
    } else if let Some(base) = lower.strip_suffix("ives").filter(|b| !b.is_empty()) {
        // knives → knife, wives → wife
        format!("{base}ife")
    } else if let Some(base) = lower.strip_suffix("ves").filter(|b| !b.is_empty()) {
        // wolves → wolf, leaves → leaf
        format!("{base}f")
    } else if ends_with_any(&lower, &["xes", "ches", "shes", "sses", "uses"]) {
        // boxes → box, branches → branch, statuses → status
        lower[..lower.len() - 2].to_string()
    } else if lower.ends_with('s') && !ends_with_any(&lower, &["ss", "us", "is"]) && lower.len() > 1
    {
        lower[..lower.len() - 1].to_string()
    } else {
        return None;
    };

    Some(match_case(&stem, word))
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}

/// Re-apply the original word's leading capitalization to a lowercase stem.
fn match_case(stem: &str, original: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        entity_name(stem)
    } else {
        stem.to_string()
    }
}
