//! Core domain model for timbre.
//!
//! This crate defines the track model and its audio feature vector, the
//! catalog file format, mood descriptors and the synonym table consumed by
//! the search engine.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod taxonomy;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{AudioFeatures, Embedding, MoodId, Track, TrackId};
pub use taxonomy::{Mood, SynonymTable};
