use anyhow::{Context, Result};
use timbre_search::rank;

use super::{describe, print_json, Session};

/// Show the tracks that sound most like `track_id`.
pub fn run_similar(session: &Session<'_>, track_id: &str, limit: usize) -> Result<()> {
    let reference = session
        .catalog
        .require_track(track_id)
        .with_context(|| format!("Cannot find similar tracks for '{}'", track_id))?;

    let similar = rank(reference, &session.catalog.tracks, limit);

    if session.json {
        return print_json(&similar);
    }

    println!("\n🎧 Similar to \"{}\"\n", reference.name);
    if similar.is_empty() {
        println!("  No other tracks in the catalog");
        return Ok(());
    }

    for (position, hit) in similar.iter().enumerate() {
        println!(
            "  {:>2}. {:>3.0}%  {}",
            position + 1,
            hit.similarity * 100.0,
            describe(hit.track)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use timbre_core::{Catalog, SynonymTable};

    #[test]
    fn test_run_similar_unknown_track() {
        let catalog = Catalog::builtin().unwrap();
        let session = Session {
            catalog: &catalog,
            synonyms: SynonymTable::builtin(),
            json: true,
        };

        let err = run_similar(&session, "nope", 5).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Cannot find similar tracks for 'nope'"), "{chain}");
        assert!(chain.contains("not found: track with id nope"), "{chain}");
    }

    #[test]
    fn test_run_similar_known_track() {
        let catalog = Catalog::builtin().unwrap();
        let session = Session {
            catalog: &catalog,
            synonyms: SynonymTable::builtin(),
            json: true,
        };

        assert!(run_similar(&session, "t09", 5).is_ok());
    }
}
