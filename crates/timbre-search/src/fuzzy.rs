//! Weighted fuzzy text search over track metadata.
//!
//! A query is normalized, expanded through the synonym table and matched
//! against four weighted text fields of every track. Each (term, field) pair
//! yields a score in `0..=100`; a track keeps its best pair. Tracks at or
//! below [`RELEVANCE_FLOOR`] are dropped and the rest are ordered by score,
//! highest first, keeping input order for ties.
//!
//! Terms that came from the synonym table are scaled by [`SYNONYM_BOOST`] so
//! a literal match of the same strength always wins.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use timbre_core::{SynonymTable, Track};

use crate::expand::{expand_query, normalize_query};
use crate::levenshtein::normalized_similarity;

/// Tracks must score strictly above this to be kept.
pub const RELEVANCE_FLOOR: f64 = 30.0;

/// Multiplier for matches on the literal query.
pub const LITERAL_BOOST: f64 = 1.0;

/// Multiplier for matches on a synonym-expanded term.
pub const SYNONYM_BOOST: f64 = 0.85;

/// Minimum whole-field edit similarity for an approximate match.
const FIELD_EDIT_THRESHOLD: f64 = 0.6;

/// Minimum per-word edit similarity for an approximate word match.
const WORD_EDIT_THRESHOLD: f64 = 0.7;

// ---------------------------------------------------------------------------
// Searchable fields
// ---------------------------------------------------------------------------

/// A text field of a track that takes part in search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Artist,
    Genre,
    Mood,
}

/// Searchable fields and their weights.
const SEARCH_FIELDS: &[(Field, f64)] = &[
    (Field::Title, 1.0),
    (Field::Artist, 0.9),
    (Field::Genre, 0.8),
    (Field::Mood, 0.85),
];

impl Field {
    /// Relative importance of a match in this field.
    pub fn weight(self) -> f64 {
        SEARCH_FIELDS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|&(_, weight)| weight)
            .unwrap_or(0.0)
    }

    fn value(self, track: &Track) -> &str {
        match self {
            Self::Title => &track.name,
            Self::Artist => &track.artist,
            Self::Genre => &track.genre,
            Self::Mood => track.mood.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A search hit together with the score that placed it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredTrack<'a> {
    pub track: &'a Track,
    pub score: f64,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Search tracks using the built-in synonym table.
///
/// An empty (or all-whitespace) query returns every track in input order.
pub fn search<'a, I>(query: &str, tracks: I) -> Vec<&'a Track>
where
    I: IntoIterator<Item = &'a Track>,
{
    search_with(query, tracks, SynonymTable::builtin())
}

/// Search tracks using an explicit synonym table.
pub fn search_with<'a, I>(query: &str, tracks: I, synonyms: &SynonymTable) -> Vec<&'a Track>
where
    I: IntoIterator<Item = &'a Track>,
{
    search_scored(query, tracks, synonyms)
        .into_iter()
        .map(|hit| hit.track)
        .collect()
}

/// Search tracks and keep the relevance score of every hit.
///
/// For an empty query every track is returned in input order with a score
/// of 0.0.
pub fn search_scored<'a, I>(
    query: &str,
    tracks: I,
    synonyms: &SynonymTable,
) -> Vec<ScoredTrack<'a>>
where
    I: IntoIterator<Item = &'a Track>,
{
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return tracks
            .into_iter()
            .map(|track| ScoredTrack { track, score: 0.0 })
            .collect();
    }

    let terms = expand_query(&normalized, synonyms);
    log::debug!(
        "Query '{}' expanded to {} terms",
        normalized,
        terms.len()
    );

    let mut scored: Vec<ScoredTrack<'a>> = Vec::new();
    let mut considered = 0usize;
    for track in tracks {
        considered += 1;
        let score = score_track(track, &terms, &normalized);
        if score > RELEVANCE_FLOOR {
            scored.push(ScoredTrack { track, score });
        }
    }

    // Stable: equal scores keep input order
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    log::debug!(
        "Query '{}' kept {} of {} tracks",
        normalized,
        scored.len(),
        considered
    );
    scored
}

/// Best weighted score of a track over every (term, field) pair.
fn score_track(track: &Track, terms: &BTreeSet<String>, normalized: &str) -> f64 {
    let fields: Vec<(String, f64)> = SEARCH_FIELDS
        .iter()
        .map(|&(field, weight)| (field.value(track).to_lowercase(), weight))
        .collect();

    let mut best = 0.0_f64;
    for term in terms {
        let boost = if term == normalized {
            LITERAL_BOOST
        } else {
            SYNONYM_BOOST
        };
        for (value, weight) in &fields {
            let score = match_lowercased(term, value) * weight * 100.0 * boost;
            best = best.max(score);
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Field matching
// ---------------------------------------------------------------------------

/// Score how well `query` matches a field value, in `[0, 1]`.
///
/// Comparison is case-insensitive. Rules are tried in order and the first
/// one that applies decides the score:
///
/// | rule                                   | score          |
/// |----------------------------------------|----------------|
/// | equal                                  | 1.0            |
/// | value starts with query                | 0.95           |
/// | value contains query                   | 0.9            |
/// | a word of value starts with query      | 0.85           |
/// | a word of value contains query         | 0.75           |
/// | whole-value edit similarity `s >= 0.6` | `s * 0.7`      |
/// | first word with edit similarity `>= 0.7` | `s * 0.65`   |
/// | otherwise                              | 0.0            |
pub fn field_match_score(query: &str, value: &str) -> f64 {
    match_lowercased(&query.to_lowercase(), &value.to_lowercase())
}

fn match_lowercased(query: &str, value: &str) -> f64 {
    if value == query {
        return 1.0;
    }
    if value.starts_with(query) {
        return 0.95;
    }
    if value.contains(query) {
        return 0.9;
    }

    let words: Vec<&str> = value.split_whitespace().collect();
    if words.iter().any(|word| word.starts_with(query)) {
        return 0.85;
    }
    if words.iter().any(|word| word.contains(query)) {
        return 0.75;
    }

    let similarity = normalized_similarity(query, value);
    if similarity >= FIELD_EDIT_THRESHOLD {
        return similarity * 0.7;
    }

    // First qualifying word decides, even if a later word is closer
    for word in &words {
        let similarity = normalized_similarity(query, word);
        if similarity >= WORD_EDIT_THRESHOLD {
            return similarity * 0.65;
        }
    }

    0.0
}
