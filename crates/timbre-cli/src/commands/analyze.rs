use anyhow::Result;
use std::collections::BTreeMap;
use timbre_core::Track;
use timbre_search::{analyze, PlaylistStats};

use super::{print_json, Session};

/// Aggregate statistics over a playlist.
///
/// The playlist is the given track ids, or the whole catalog when none are
/// given, narrowed to `mood` if set.
pub fn run_analyze(session: &Session<'_>, track_ids: &[String], mood: Option<&str>) -> Result<()> {
    let playlist = select_playlist(session, track_ids, mood)?;
    let stats = analyze(playlist.iter().copied());

    if session.json {
        return print_json(&stats);
    }

    print_stats(playlist.len(), &stats);
    Ok(())
}

fn select_playlist<'a>(
    session: &Session<'a>,
    track_ids: &[String],
    mood: Option<&str>,
) -> Result<Vec<&'a Track>> {
    if track_ids.is_empty() {
        return Ok(session.tracks_in_mood(mood));
    }

    let catalog = session.catalog;
    let mut playlist = Vec::with_capacity(track_ids.len());
    for id in track_ids {
        let track = catalog.require_track(id)?;
        if mood.map_or(true, |m| track.mood.as_str() == m) {
            playlist.push(track);
        }
    }
    Ok(playlist)
}

fn print_stats(count: usize, stats: &PlaylistStats) {
    println!("\n📊 Playlist Analysis ({} tracks)\n", count);
    println!("  Energy:        {:.2}", stats.avg_energy);
    println!("  Valence:       {:.2}", stats.avg_valence);
    println!("  Danceability:  {:.2}", stats.avg_danceability);
    println!(
        "  Tempo:         {:.1} BPM (± {:.1})",
        stats.avg_tempo, stats.tempo_std_dev
    );
    println!("  Consistency:   {}/100", stats.consistency_score);

    print_distribution("Moods", &stats.mood_distribution);
    print_distribution("Genres", &stats.genre_distribution);
}

fn print_distribution(title: &str, distribution: &BTreeMap<String, usize>) {
    if distribution.is_empty() {
        return;
    }
    println!("\n  {}:", title);
    for (name, count) in distribution {
        println!("    {:<14} {}", name, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timbre_core::{Catalog, SynonymTable};

    fn with_session<F: FnOnce(&Session<'_>)>(f: F) {
        let catalog = Catalog::builtin().unwrap();
        let session = Session {
            catalog: &catalog,
            synonyms: SynonymTable::builtin(),
            json: false,
        };
        f(&session);
    }

    #[test]
    fn test_select_whole_catalog() {
        with_session(|session| {
            let playlist = select_playlist(session, &[], None).unwrap();
            assert_eq!(playlist.len(), session.catalog.tracks.len());
        });
    }

    #[test]
    fn test_select_ids_keep_given_order() {
        with_session(|session| {
            let ids = vec!["t05".to_string(), "t01".to_string()];
            let playlist = select_playlist(session, &ids, None).unwrap();
            let got: Vec<&str> = playlist.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(got, vec!["t05", "t01"]);
        });
    }

    #[test]
    fn test_select_ids_with_mood() {
        with_session(|session| {
            let ids = vec!["t05".to_string(), "t01".to_string()];
            let playlist = select_playlist(session, &ids, Some("hype")).unwrap();
            assert_eq!(playlist.len(), 1);
            assert_eq!(playlist[0].id.as_str(), "t01");
        });
    }

    #[test]
    fn test_select_unknown_id_fails() {
        with_session(|session| {
            let ids = vec!["nope".to_string()];
            assert!(select_playlist(session, &ids, None).is_err());
        });
    }

    #[test]
    fn test_run_analyze_unknown_id_fails() {
        with_session(|session| {
            let ids = vec!["t01".to_string(), "nope".to_string()];
            let err = run_analyze(session, &ids, None).unwrap_err();
            assert!(err.to_string().contains("not found: track with id nope"));
        });
    }
}
