use anyhow::Result;
use timbre_core::Track;
use timbre_search::search_scored;

use super::{describe, print_json, Session};

/// Filter by mood, then fuzzy-search what is left.
pub fn run_search(
    session: &Session<'_>,
    query: &str,
    mood: Option<&str>,
    explain: bool,
) -> Result<()> {
    let pool = session.tracks_in_mood(mood);
    let hits = search_scored(query, pool, session.synonyms);

    if session.json {
        if explain {
            return print_json(&hits);
        }
        let tracks: Vec<&Track> = hits.iter().map(|hit| hit.track).collect();
        return print_json(&tracks);
    }

    if hits.is_empty() {
        println!("No tracks found for '{}'", query.trim());
        println!("Try a different search or mood");
        return Ok(());
    }

    match mood {
        Some(mood) => println!("\n🔎 Results for '{}' in {}\n", query.trim(), mood),
        None => println!("\n🔎 Results for '{}'\n", query.trim()),
    }

    for (position, hit) in hits.iter().enumerate() {
        if explain {
            println!(
                "  {:>2}. {:>6.2}  {}",
                position + 1,
                hit.score,
                describe(hit.track)
            );
        } else {
            println!("  {:>2}. {}", position + 1, describe(hit.track));
        }
    }

    Ok(())
}
