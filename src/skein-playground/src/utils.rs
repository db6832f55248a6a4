//! Display helpers for the playground.

use skein_core::{ConceptId, PropertyMap};

/// Print a divider line.
pub fn print_divider() {
    println!("{}", "-".repeat(60));
}

/// Print a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}", "=".repeat(60));
}

/// Format properties as `key=value` pairs sorted by key.
pub fn format_properties(properties: &PropertyMap) -> String {
    let mut entries: Vec<_> = properties.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(key, value)| format!("{key}={}", truncate(&value.to_string(), 24)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a concept path as `id (label) -> id (label) ...`.
///
/// `label` resolves a concept id to a display name; ids it cannot resolve
/// are printed bare.
pub fn format_path<F>(path: &[ConceptId], mut label: F) -> String
where
    F: FnMut(ConceptId) -> Option<String>,
{
    path.iter()
        .map(|&id| match label(id) {
            Some(name) => format!("{id} ({name})"),
            None => id.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Truncate a string to at most `max_len` characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
