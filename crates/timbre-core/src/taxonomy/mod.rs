pub mod mood;
pub mod synonyms;

pub use mood::{filter_by_mood, mood_counts, Mood};
pub use synonyms::SynonymTable;
