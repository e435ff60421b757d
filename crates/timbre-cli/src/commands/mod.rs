pub mod analyze;
pub mod config;
pub mod expand;
pub mod moods;
pub mod search;
pub mod similar;

pub use analyze::run_analyze;
pub use expand::show_expansion;
pub use moods::list_moods;
pub use search::run_search;
pub use similar::run_similar;

use anyhow::Result;
use serde::Serialize;
use timbre_core::taxonomy::filter_by_mood;
use timbre_core::{Catalog, SynonymTable, Track};

/// Everything a command needs: the loaded catalog, the synonym table and
/// the output mode.
#[derive(Debug)]
pub struct Session<'a> {
    pub catalog: &'a Catalog,
    pub synonyms: &'a SynonymTable,
    pub json: bool,
}

impl<'a> Session<'a> {
    /// Catalog tracks restricted to a mood, in catalog order.
    pub fn tracks_in_mood(&self, mood: Option<&str>) -> Vec<&'a Track> {
        let catalog = self.catalog;
        if let Some(mood) = mood {
            if !catalog.moods.is_empty() && catalog.mood(mood).is_none() {
                log::warn!("Unknown mood '{}'; no tracks will match", mood);
            }
        }
        filter_by_mood(&catalog.tracks, mood)
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line description of a track for listings.
pub(crate) fn describe(track: &Track) -> String {
    format!(
        "{} - {}  [{} · {} · {}]  ({})",
        track.name, track.artist, track.genre, track.mood, track.year, track.id
    )
}
