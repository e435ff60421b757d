//! Ranking engine for timbre.
//!
//! Two independent algorithms over an in-memory track collection:
//!
//! - [`rank`] orders tracks by cosine similarity of their audio features to
//!   a reference track.
//! - [`search`] expands a free-text query through the synonym table and
//!   orders tracks by weighted fuzzy text relevance.
//!
//! [`analyze`] aggregates audio features over a playlist. Every entry point
//! is a pure function: identical inputs give identical outputs.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod analytics;
pub mod expand;
pub mod fuzzy;
pub mod levenshtein;
pub mod similarity;

pub use analytics::{analyze, PlaylistStats};
pub use expand::expand_query;
pub use fuzzy::{field_match_score, search, search_scored, search_with, ScoredTrack};
pub use similarity::{cosine_similarity, rank, SimilarTrack, DEFAULT_SIMILAR_LIMIT};
