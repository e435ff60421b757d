//! Audio-feature similarity ranking.
//!
//! Tracks are compared through a 7-dimensional feature vector: the five
//! perceptual features as-is, plus loudness and tempo linearly rescaled to
//! roughly the same `[0, 1]` range so neither dominates the dot product.

use serde::Serialize;
use std::cmp::Ordering;

use timbre_core::{AudioFeatures, Track};

/// Number of similar tracks shown when the caller does not choose.
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// A candidate track and its cosine similarity to the reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarTrack<'a> {
    pub track: &'a Track,
    pub similarity: f64,
}

/// Project audio features onto the comparison vector.
pub fn feature_vector(features: &AudioFeatures) -> [f64; 7] {
    [
        features.energy,
        features.valence,
        features.danceability,
        features.acousticness,
        features.instrumentalness,
        (features.loudness + 20.0) / 20.0,
        features.tempo / 200.0,
    ]
}

/// Cosine similarity of two tracks' feature vectors.
///
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &Track, b: &Track) -> f64 {
    cosine(&feature_vector(&a.features), &feature_vector(&b.features))
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let magnitude_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a <= 0.0 || magnitude_b <= 0.0 {
        return 0.0;
    }
    dot / (magnitude_a * magnitude_b)
}

/// Rank candidates by similarity to `reference`, most similar first.
///
/// The reference itself (matched by id) is never part of the result. At most
/// `limit` tracks are returned; equal similarities keep candidate order.
pub fn rank<'a, I>(reference: &Track, candidates: I, limit: usize) -> Vec<SimilarTrack<'a>>
where
    I: IntoIterator<Item = &'a Track>,
{
    let reference_vector = feature_vector(&reference.features);

    let mut ranked: Vec<SimilarTrack<'a>> = candidates
        .into_iter()
        .filter(|track| track.id != reference.id)
        .map(|track| SimilarTrack {
            track,
            similarity: cosine(&reference_vector, &feature_vector(&track.features)),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });

    log::debug!(
        "Ranked {} candidates against {}, keeping {}",
        ranked.len(),
        reference.id,
        limit.min(ranked.len())
    );
    ranked.truncate(limit);
    ranked
}
