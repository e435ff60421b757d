//! Track catalog loading.
//!
//! A catalog is a TOML document with `[[moods]]` descriptors and `[[tracks]]`
//! entries. The whole catalog is held in memory; the engine borrows tracks
//! from it and never mutates them.
//!
//! # Example
//!
//! ```
//! use timbre_core::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! assert!(catalog.track("t01").is_some());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Track;
use crate::taxonomy::Mood;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// The in-memory track collection together with its mood descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub moods: Vec<Mood>,

    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Catalog {
    /// The sample catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        let catalog = parse(BUILTIN_CATALOG, "built-in catalog")?;
        log::info!(
            "Loaded {} tracks and {} moods from built-in catalog",
            catalog.tracks.len(),
            catalog.moods.len()
        );
        Ok(catalog)
    }

    /// Load and validate a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// fails [`Catalog::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = parse(&content, &path.display().to_string())?;
        log::info!(
            "Loaded {} tracks and {} moods from {}",
            catalog.tracks.len(),
            catalog.moods.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse(content, "<string>")
    }

    /// Check catalog-level consistency.
    ///
    /// Track ids must be unique. When mood descriptors are present, every
    /// track's mood must be one of them. Audio feature ranges are not
    /// checked.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for track in &self.tracks {
            if !seen.insert(track.id.as_str()) {
                return Err(Error::InvalidData(format!(
                    "duplicate track id: {}",
                    track.id
                )));
            }
        }

        if self.moods.is_empty() {
            return Ok(());
        }

        for track in &self.tracks {
            if self.mood(track.mood.as_str()).is_none() {
                return Err(Error::InvalidData(format!(
                    "track {} has undeclared mood '{}'",
                    track.id, track.mood
                )));
            }
        }

        Ok(())
    }

    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id.as_str() == id)
    }

    /// Look up a track, failing with [`Error::NotFound`] if it is missing.
    pub fn require_track(&self, id: &str) -> Result<&Track> {
        self.track(id).ok_or_else(|| Error::NotFound {
            entity: "track",
            id: id.to_string(),
        })
    }

    pub fn mood(&self, id: &str) -> Option<&Mood> {
        self.moods.iter().find(|m| m.id.as_str() == id)
    }
}

fn parse(content: &str, origin: &str) -> Result<Catalog> {
    let catalog: Catalog = toml::from_str(content).map_err(|e| {
        Error::InvalidData(format!("failed to parse catalog from {}: {}", origin, e))
    })?;
    catalog.validate()?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
[[moods]]
id = "chill"
name = "Chill"

[[tracks]]
id = "a"
name = "Low Tide"
artist = "Harbor"
genre = "Ambient"
mood = "chill"

[tracks.features]
energy = 0.2
valence = 0.5
danceability = 0.3
acousticness = 0.8
instrumentalness = 0.9
loudness = -15.0
tempo = 70.0
"#;

    fn track_entry(id: &str, mood: &str) -> String {
        format!(
            r#"
[[tracks]]
id = "{id}"
name = "Track {id}"
artist = "Someone"
genre = "Pop"
mood = "{mood}"

[tracks.features]
energy = 0.5
valence = 0.5
danceability = 0.5
acousticness = 0.5
instrumentalness = 0.5
loudness = -8.0
tempo = 100.0
"#
        )
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.moods.len(), 6);
        assert_eq!(catalog.tracks.len(), 18);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_builtin_catalog_matches_bundled_file() {
        let builtin = Catalog::builtin().unwrap();
        let parsed = Catalog::from_toml_str(BUILTIN_CATALOG).unwrap();
        assert_eq!(builtin, parsed);
    }

    #[test]
    fn test_builtin_catalog_uses_every_mood() {
        let catalog = Catalog::builtin().unwrap();
        for mood in &catalog.moods {
            assert!(
                catalog.tracks.iter().any(|t| t.mood == mood.id),
                "mood {} has no tracks",
                mood.id
            );
        }
    }

    #[test]
    fn test_from_toml_str_minimal() {
        let catalog = Catalog::from_toml_str(MINIMAL).unwrap();
        assert_eq!(catalog.tracks.len(), 1);
        let track = catalog.track("a").unwrap();
        assert_eq!(track.name, "Low Tide");
        assert_eq!(track.year, 0);
        assert_eq!(track.features.tempo, 70.0);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.tracks.is_empty());
        assert!(catalog.moods.is_empty());
    }

    #[test]
    fn test_duplicate_track_ids_rejected() {
        let content = format!("{}{}", track_entry("x", "happy"), track_entry("x", "dark"));
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("duplicate track id: x"));
    }

    #[test]
    fn test_undeclared_mood_rejected() {
        let content = format!("{}{}", MINIMAL, track_entry("b", "hype"));
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.to_string().contains("undeclared mood 'hype'"));
    }

    #[test]
    fn test_moods_optional() {
        let content = track_entry("b", "anything");
        let catalog = Catalog::from_toml_str(&content).unwrap();
        assert_eq!(catalog.tracks[0].mood.as_str(), "anything");
    }

    #[test]
    fn test_parse_error_is_invalid_data() {
        let result = Catalog::from_toml_str("[[tracks]]\nid = 12");
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.tracks.len(), 1);
        assert!(catalog.mood("chill").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_require_track_not_found() {
        let catalog = Catalog::from_toml_str(MINIMAL).unwrap();
        let err = catalog.require_track("missing").unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound { entity: "track", ref id } if id == "missing"
        ));
    }
}
