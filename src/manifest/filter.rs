use crate::models::{fold_case, CrewManifestEntries, CrewManifestEntry};

/// Entries whose name, job prototype id or job title contains `query`,
/// ignoring case.
///
/// A blank query (empty or only whitespace) matches everything. The query is
/// otherwise used as typed, surrounding spaces included.
pub fn filter_entries<'a>(
    entries: &'a CrewManifestEntries,
    query: &str,
) -> Vec<&'a CrewManifestEntry> {
    if query.trim().is_empty() {
        return entries.iter().collect();
    }

    let needle = fold_case(query);
    entries
        .iter()
        .filter(|entry| entry.matches_folded(&needle))
        .collect()
}
