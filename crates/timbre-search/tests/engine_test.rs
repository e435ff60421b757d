//! Integration tests for the ranking engine against the bundled catalog.

use timbre_core::taxonomy::filter_by_mood;
use timbre_core::{Catalog, Track};
use timbre_search::{analyze, rank, search, DEFAULT_SIMILAR_LIMIT};

fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in catalog should parse")
}

fn ids<'a>(tracks: &[&'a Track]) -> Vec<&'a str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_search_exact_title() {
    let catalog = catalog();
    let hits = search("Neon Cascade", &catalog.tracks);
    assert_eq!(ids(&hits), vec!["t01"]);
}

#[test]
fn test_search_artist() {
    let catalog = catalog();
    let hits = search("kiyo fields", &catalog.tracks);
    assert_eq!(ids(&hits), vec!["t04", "t09"]);
}

#[test]
fn test_search_mood_literal_before_synonyms() {
    let catalog = catalog();
    let hits = search("chill", &catalog.tracks);

    // Tracks in the chill mood come first, in catalog order
    assert_eq!(ids(&hits[..3]), vec!["t03", "t09", "t13"]);
    // Lo-Fi tracks are reached through the "lo-fi" synonym
    assert!(ids(&hits).contains(&"t04"));
    assert!(ids(&hits).contains(&"t18"));
}

#[test]
fn test_search_empty_query_is_noop() {
    let catalog = catalog();
    let hits = search("", &catalog.tracks);
    let expected: Vec<&str> = catalog.tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids(&hits), expected);
}

#[test]
fn test_search_nonsense_finds_nothing() {
    let catalog = catalog();
    assert!(search("zzzzqqq", &catalog.tracks).is_empty());
}

#[test]
fn test_search_repeatable() {
    let catalog = catalog();
    let first = ids(&search("focus", &catalog.tracks));
    let second = ids(&search("focus", &catalog.tracks));
    assert_eq!(first, second);
    assert_eq!(first[0], "t09");
}

#[test]
fn test_mood_filter_then_search() {
    let catalog = catalog();
    let focus = filter_by_mood(&catalog.tracks, Some("focus"));
    let hits = search("lofi", focus);
    assert_eq!(ids(&hits), vec!["t04", "t18"]);
}

#[test]
fn test_rank_similar_tracks() {
    let catalog = catalog();
    let reference = catalog.track("t09").unwrap();
    let similar = rank(reference, &catalog.tracks, DEFAULT_SIMILAR_LIMIT);

    assert_eq!(similar.len(), DEFAULT_SIMILAR_LIMIT);
    assert_eq!(similar[0].track.id.as_str(), "t04");
    assert!(similar.iter().all(|s| s.track.id.as_str() != "t09"));
    assert!(similar
        .windows(2)
        .all(|pair| pair[0].similarity >= pair[1].similarity));
}

#[test]
fn test_rank_whole_catalog() {
    let catalog = catalog();
    let reference = &catalog.tracks[0];
    let similar = rank(reference, &catalog.tracks, usize::MAX);
    assert_eq!(similar.len(), catalog.tracks.len() - 1);
    assert!(similar
        .iter()
        .all(|s| (0.0..=1.0 + 1e-12).contains(&s.similarity)));
}

#[test]
fn test_analyze_catalog() {
    let catalog = catalog();
    let stats = analyze(&catalog.tracks);

    assert_eq!(stats.mood_distribution.len(), 6);
    assert!(stats.mood_distribution.values().all(|&count| count == 3));
    assert_eq!(stats.genre_distribution.get("Lo-Fi"), Some(&3));
    assert!(stats.avg_tempo > 40.0 && stats.avg_tempo < 220.0);
    assert!(stats.consistency_score <= 100);
}

#[test]
fn test_analyze_filtered_playlist() {
    let catalog = catalog();
    let dreamy = filter_by_mood(&catalog.tracks, Some("dreamy"));
    let stats = analyze(dreamy);
    assert_eq!(stats.mood_distribution.get("dreamy"), Some(&3));
    assert_eq!(stats.mood_distribution.len(), 1);
}
