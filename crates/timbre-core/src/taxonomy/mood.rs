use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{MoodId, Track};

/// A mood category as presented to the listener.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mood {
    pub id: MoodId,

    /// Display name (e.g. "Chill").
    pub name: String,

    #[serde(default)]
    pub emoji: String,

    #[serde(default)]
    pub description: String,
}

impl Mood {
    #[must_use]
    pub fn new(id: impl Into<MoodId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: String::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Keep only the tracks in the given mood, preserving their order.
///
/// `None` is the "all moods" selection and keeps every track.
pub fn filter_by_mood<'a, I>(tracks: I, mood: Option<&str>) -> Vec<&'a Track>
where
    I: IntoIterator<Item = &'a Track>,
{
    match mood {
        Some(mood) => tracks
            .into_iter()
            .filter(|track| track.mood.as_str() == mood)
            .collect(),
        None => tracks.into_iter().collect(),
    }
}

/// Number of tracks per mood id.
pub fn mood_counts<'a, I>(tracks: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Track>,
{
    let mut counts = BTreeMap::new();
    for track in tracks {
        *counts.entry(track.mood.to_string()).or_insert(0) += 1;
    }
    counts
}
