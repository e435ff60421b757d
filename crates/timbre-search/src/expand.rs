//! Synonym expansion of search queries.

use std::collections::BTreeSet;

use timbre_core::SynonymTable;

/// Lowercase and trim a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Expand a query into the set of terms it should be matched with.
///
/// A synonym group (canonical term plus all its alternates) joins the set
/// when the query and the canonical term, or the query and any alternate,
/// contain one another. The normalized query itself is always a member.
///
/// An empty query is contained in every term and therefore expands to the
/// whole table; [`crate::search`] short-circuits before that happens.
pub fn expand_query(query: &str, synonyms: &SynonymTable) -> BTreeSet<String> {
    let normalized = normalize_query(query);
    let mut expanded = BTreeSet::new();

    for (term, alternates) in synonyms.iter() {
        let hit = overlaps(term, &normalized)
            || alternates.iter().any(|alt| overlaps(alt, &normalized));
        if hit {
            expanded.insert(term.to_string());
            expanded.extend(alternates.iter().cloned());
        }
    }

    expanded.insert(normalized);
    expanded
}

/// Substring containment in either direction.
fn overlaps(candidate: &str, query: &str) -> bool {
    candidate.contains(query) || query.contains(candidate)
}
