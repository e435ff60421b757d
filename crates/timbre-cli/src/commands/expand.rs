use anyhow::Result;
use timbre_search::expand_query;

use super::{print_json, Session};

/// Print the terms a query widens to before matching.
pub fn show_expansion(session: &Session<'_>, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        log::warn!("Empty query: search returns every track unfiltered");
    }

    let terms = expand_query(query, session.synonyms);

    if session.json {
        return print_json(&terms);
    }

    for term in &terms {
        println!("{}", term);
    }

    Ok(())
}
