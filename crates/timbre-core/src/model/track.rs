use serde::{Deserialize, Serialize};

use crate::model::ids::{MoodId, TrackId};

/// Perceptual audio features of a track.
///
/// The five perceptual features lie in `[0, 1]`. Loudness is in dB (negative,
/// typically -60..0) and tempo is in BPM (typically 40..220). Values are
/// trusted as given; nothing here clamps or validates them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub loudness: f64,
    pub tempo: f64,
}

/// 2D coordinates used to place a track on the genre map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Embedding {
    pub x: f64,
    pub y: f64,
}

/// A single track in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,

    /// Track title.
    pub name: String,

    pub artist: String,

    pub genre: String,

    /// Mood category this track belongs to.
    pub mood: MoodId,

    /// Release year.
    #[serde(default)]
    pub year: i32,

    pub features: AudioFeatures,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Embedding>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,

    /// URL of a short audio preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl Track {
    #[must_use]
    pub fn new(id: impl Into<TrackId>, name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist: artist.into(),
            genre: String::new(),
            mood: MoodId::new(""),
            year: 0,
            features: AudioFeatures::default(),
            embedding: None,
            duration_secs: None,
            preview_url: None,
        }
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    #[must_use]
    pub fn with_mood(mut self, mood: impl Into<MoodId>) -> Self {
        self.mood = mood.into();
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: AudioFeatures) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn with_embedding(mut self, x: f64, y: f64) -> Self {
        self.embedding = Some(Embedding { x, y });
        self
    }
}
