pub mod ids;
pub mod track;

pub use ids::{MoodId, TrackId};
pub use track::{AudioFeatures, Embedding, Track};
