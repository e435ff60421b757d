//! Aggregate statistics over a playlist.

use serde::Serialize;
use std::collections::BTreeMap;

use timbre_core::{AudioFeatures, Track};

/// Summary of a set of tracks.
///
/// All numeric fields are zero and both distributions are empty for an empty
/// playlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaylistStats {
    pub avg_energy: f64,
    pub avg_valence: f64,
    pub avg_danceability: f64,
    pub avg_tempo: f64,

    /// Population standard deviation of tempo, in BPM.
    pub tempo_std_dev: f64,

    pub mood_distribution: BTreeMap<String, usize>,
    pub genre_distribution: BTreeMap<String, usize>,

    /// How uniform energy, valence and tempo are, from 0 (scattered) to 100
    /// (identical).
    pub consistency_score: u8,
}

/// Compute [`PlaylistStats`] for a collection of tracks.
pub fn analyze<'a, I>(tracks: I) -> PlaylistStats
where
    I: IntoIterator<Item = &'a Track>,
{
    let tracks: Vec<&Track> = tracks.into_iter().collect();
    if tracks.is_empty() {
        return PlaylistStats::default();
    }

    let avg_energy = mean(&tracks, |f| f.energy);
    let avg_valence = mean(&tracks, |f| f.valence);
    let avg_danceability = mean(&tracks, |f| f.danceability);
    let avg_tempo = mean(&tracks, |f| f.tempo);

    let energy_sd = std_dev(&tracks, avg_energy, |f| f.energy);
    let valence_sd = std_dev(&tracks, avg_valence, |f| f.valence);
    let tempo_std_dev = std_dev(&tracks, avg_tempo, |f| f.tempo);

    let mut mood_distribution = BTreeMap::new();
    let mut genre_distribution = BTreeMap::new();
    for track in &tracks {
        *mood_distribution.entry(track.mood.to_string()).or_insert(0) += 1;
        *genre_distribution.entry(track.genre.clone()).or_insert(0) += 1;
    }

    let consistency = (1.0 - (energy_sd + valence_sd + tempo_std_dev / 100.0) / 3.0) * 100.0;

    log::debug!(
        "Analyzed {} tracks: avg tempo {:.1}, consistency {:.1}",
        tracks.len(),
        avg_tempo,
        consistency
    );

    PlaylistStats {
        avg_energy,
        avg_valence,
        avg_danceability,
        avg_tempo,
        tempo_std_dev,
        mood_distribution,
        genre_distribution,
        consistency_score: to_score(consistency),
    }
}

/// Round and clamp to `0..=100`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[allow(clippy::cast_precision_loss)]
fn mean(tracks: &[&Track], feature: impl Fn(&AudioFeatures) -> f64) -> f64 {
    tracks.iter().map(|t| feature(&t.features)).sum::<f64>() / tracks.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn std_dev(tracks: &[&Track], mean: f64, feature: impl Fn(&AudioFeatures) -> f64) -> f64 {
    let variance = tracks
        .iter()
        .map(|t| (feature(&t.features) - mean).powi(2))
        .sum::<f64>()
        / tracks.len() as f64;
    variance.sqrt()
}
