//! Registry context summarization for counselor prompts.

use eduverify_registry::Registry;

/// Summarize the current institute list for the counselor.
///
/// Shape: `Available Institutes: {name} in {location} with {n} verified
/// achievers, ...` — one clause per institute, comma-joined.
pub fn build_context(registry: &Registry) -> String {
    let clauses: Vec<String> = registry
        .institutes()
        .iter()
        .map(|i| {
            format!(
                "{} in {} with {} verified achievers",
                i.name,
                i.location,
                i.students.len()
            )
        })
        .collect();
    format!("Available Institutes: {}", clauses.join(", "))
}
