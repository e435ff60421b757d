//! Levenshtein edit distance for typo-tolerant matching.

/// Minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`.
///
/// Operates on `char`s, so multi-byte characters count as one edit.
pub fn distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Edit distance scaled to a similarity: `1 - distance / max(len_a, len_b)`.
///
/// Returns 1.0 for two empty strings and 0.0 for completely different
/// strings of equal length.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}
