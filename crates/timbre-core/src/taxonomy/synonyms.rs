//! Synonym table used to widen free-text queries.
//!
//! Each canonical term (a mood, a genre or a qualitative descriptor) maps to
//! a list of alternate terms. The table is built once and never mutated; the
//! built-in table is shared through a process-wide static.
//!
//! Tables can also be loaded from a TOML file of `term = ["alt", ...]`
//! entries:
//!
//! ```toml
//! chill = ["relaxed", "calm", "mellow"]
//! "hip hop" = ["rap", "hiphop"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{Error, Result};

const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    // Moods
    (
        "happy",
        &[
            "joyful", "cheerful", "upbeat", "bright", "positive", "sunny", "fun", "playful",
            "uplifting",
        ],
    ),
    (
        "chill",
        &[
            "relaxed", "calm", "mellow", "peaceful", "laid-back", "easy", "smooth", "soothing",
            "tranquil", "zen",
        ],
    ),
    (
        "focus",
        &[
            "concentrate",
            "study",
            "work",
            "productive",
            "deep",
            "thinking",
            "concentration",
            "ambient",
        ],
    ),
    (
        "dreamy",
        &[
            "ethereal",
            "atmospheric",
            "floating",
            "spacey",
            "cosmic",
            "mystical",
            "surreal",
            "fantasy",
        ],
    ),
    (
        "dark",
        &[
            "moody",
            "intense",
            "brooding",
            "melancholy",
            "sad",
            "gloomy",
            "noir",
            "gothic",
            "mysterious",
        ],
    ),
    (
        "hype",
        &[
            "energetic",
            "exciting",
            "pumped",
            "party",
            "wild",
            "intense",
            "powerful",
            "explosive",
            "epic",
            "loud",
        ],
    ),
    // Genres
    (
        "electronic",
        &["synth", "electro", "edm", "dance", "techno", "house", "beats"],
    ),
    (
        "jazz",
        &["jazzy", "swing", "bebop", "blues", "saxophone", "brass"],
    ),
    (
        "ambient",
        &["atmospheric", "soundscape", "background", "environmental"],
    ),
    ("rock", &["guitar", "band", "alternative", "indie"]),
    (
        "classical",
        &["orchestra", "symphony", "piano", "instrumental", "orchestral"],
    ),
    ("hip hop", &["rap", "hiphop", "trap", "beats", "urban"]),
    ("lofi", &["lo-fi", "chill beats", "study music", "chillhop"]),
    ("metal", &["heavy", "loud", "thrash", "hardcore"]),
    ("pop", &["popular", "mainstream", "catchy"]),
    ("funk", &["funky", "groovy", "groove", "disco"]),
    ("reggae", &["tropical", "island", "caribbean", "jamaican"]),
    // Audio character
    ("fast", &["quick", "rapid", "uptempo", "speedy", "energetic"]),
    ("slow", &["downtempo", "gentle", "soft", "quiet"]),
    ("loud", &["powerful", "strong", "heavy", "intense"]),
    ("soft", &["quiet", "gentle", "subtle", "delicate"]),
    (
        "instrumental",
        &["no vocals", "without vocals", "instrumental only"],
    ),
    ("acoustic", &["unplugged", "natural", "organic"]),
];

static BUILTIN: LazyLock<SynonymTable> =
    LazyLock::new(|| SynonymTable::from_entries(BUILTIN_SYNONYMS.iter().copied()));

/// Immutable mapping from canonical term to its alternate terms.
///
/// Terms and alternates are stored lowercased and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymTable {
    /// The built-in table of mood, genre and audio-character synonyms.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a table from `(term, alternates)` pairs.
    ///
    /// Blank terms and blank alternates are dropped. Repeated terms merge
    /// their alternates.
    pub fn from_entries<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (term, alternates) in entries {
            let term = normalize_term(term.as_ref());
            if term.is_empty() {
                continue;
            }
            let slot = table.entry(term).or_default();
            for alternate in alternates {
                let alternate = normalize_term(alternate.as_ref());
                if !alternate.is_empty() && !slot.contains(&alternate) {
                    slot.push(alternate);
                }
            }
        }
        Self { entries: table }
    }

    /// Load a synonym table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = parse(&content, &path.display().to_string())?;
        log::info!(
            "Loaded {} synonym terms from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a synonym table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse(content, "<string>")
    }

    /// Canonical terms and their alternates, ordered by term.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(term, alternates)| (term.as_str(), alternates.as_slice()))
    }

    /// Alternates for a canonical term, if the term is known.
    pub fn alternates(&self, term: &str) -> Option<&[String]> {
        self.entries
            .get(&normalize_term(term))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse(content: &str, origin: &str) -> Result<SynonymTable> {
    let raw: BTreeMap<String, Vec<String>> = toml::from_str(content).map_err(|e| {
        Error::InvalidData(format!("failed to parse synonyms from {}: {}", origin, e))
    })?;
    Ok(SynonymTable::from_entries(raw))
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}
