//! Naming convention for legacy dotted descriptors
//!
//! Legacy labels are lowercase, underscore-separated, and typically plural
//! (`blog_posts`). The canonical container name is the singular PascalCase
//! form (`BlogPost`).

use convert_case::{Case, Casing};

/// Converts a legacy container label to the canonical container name.
pub fn container_name(label: &str) -> String {
    singularize(label).to_case(Case::Pascal)
}

/// Singularizes the trailing word of a lowercase label.
///
/// Covers the regular English inflections: `ies` -> `y`, sibilant `es`
/// suffixes, and a plain trailing `s`. Irregular nouns are not handled;
/// those containers must be declared with the qualified syntax.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            // Keep the sibilant, drop the "es"
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
