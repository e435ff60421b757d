use anyhow::Result;
use serde::Serialize;
use timbre_core::taxonomy::mood_counts;

use super::{print_json, Session};

#[derive(Debug, Serialize)]
struct MoodRow<'a> {
    id: &'a str,
    name: &'a str,
    emoji: &'a str,
    description: &'a str,
    tracks: usize,
}

/// List the catalog's moods with how many tracks each holds.
pub fn list_moods(session: &Session<'_>) -> Result<()> {
    let counts = mood_counts(&session.catalog.tracks);

    let rows: Vec<MoodRow<'_>> = session
        .catalog
        .moods
        .iter()
        .map(|mood| MoodRow {
            id: mood.id.as_str(),
            name: &mood.name,
            emoji: &mood.emoji,
            description: &mood.description,
            tracks: counts.get(mood.id.as_str()).copied().unwrap_or(0),
        })
        .collect();

    if session.json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        // Catalogs without declared moods still carry mood ids on tracks.
        println!("\nMoods\n");
        for (mood, count) in &counts {
            println!("  {:<12} {:>3} tracks", mood, count);
        }
        return Ok(());
    }

    println!("\nMoods\n");
    for row in &rows {
        println!(
            "  {} {:<10} {:<12} {:>3} tracks  {}",
            row.emoji, row.name, row.id, row.tracks, row.description
        );
    }

    Ok(())
}
