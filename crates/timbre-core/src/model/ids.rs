use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

define_id!(TrackId, "Caller-assigned identifier for a track.");
define_id!(
    MoodId,
    "Identifier of a mood category (e.g. `chill`, `hype`)."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_id_from_str() {
        let id = TrackId::from("t-001");
        assert_eq!(id.as_str(), "t-001");
        assert_eq!(id, TrackId::new("t-001"));
    }

    #[test]
    fn test_track_id_display() {
        let id = TrackId::new("neon-cascade");
        assert_eq!(id.to_string(), "neon-cascade");
    }

    #[test]
    fn test_mood_id_compares_with_str() {
        let mood = MoodId::new("chill");
        assert!(mood == *"chill");
        assert!(mood != *"Chill");
    }

    #[test]
    fn test_ids_deserialize_transparently() {
        #[derive(Deserialize)]
        struct Wrapper {
            id: TrackId,
            mood: MoodId,
        }

        let wrapper: Wrapper = toml::from_str("id = \"abc\"\nmood = \"dark\"").unwrap();
        assert_eq!(wrapper.id.as_str(), "abc");
        assert_eq!(wrapper.mood.as_str(), "dark");
    }
}
