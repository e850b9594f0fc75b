//! The two stdin-driven modes: card lookups one line at a time, and a single search URL for all lines.

use {
    std::io::prelude::*,
    itertools::Itertools as _,
    log::info,
    crate::{
        Error,
        IntoResultExt as _,
        card::RenderOptions,
        search::Search
    }
};

/// Appended to every query-mode search so only Standard-legal cards come back.
pub const FORMAT_CLAUSE: &str = "f:standard";
pub const DIVIDER: &str = "---";
pub const WEB_SEARCH_BASE: &str = "https://scryfall.com/search?q=";
const EXACT_NAME_PREFIX: &str = "!";
const OR_SEPARATOR: &str = " OR ";

/// Quotes a raw input line and restricts it to the Standard format.
pub fn line_query(line: &str) -> String {
    format!("\"{}\" {}", line, FORMAT_CLAUSE)
}

/// Searches once per input line and prints every card found, each followed by a divider.
///
/// Lines are not trimmed, and an empty line still yields the query `"" f:standard`.
pub fn run_queries(search: &impl Search, input: impl BufRead, mut output: impl Write, options: RenderOptions) -> Result<(), Error> {
    for line in input.lines() {
        let line = line.annotate("reading stdin")?;
        let query = line_query(&line);
        let cards = search.search(&query)?;
        if cards.is_empty() {
            info!("no cards found for {}", query);
        }
        for card in cards {
            writeln!(output, "{}", card.render(options))?;
            writeln!(output, "{}", DIVIDER)?;
        }
    }
    Ok(())
}

/// Builds a scryfall.com search URL matching any of the given names exactly.
///
/// Names are trimmed and blank ones are skipped. With no names left the query is empty.
pub fn search_url<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> String {
    let query = names.into_iter()
        .filter_map(|name| {
            let name = name.as_ref().trim();
            if name.is_empty() { None } else { Some(format!("{}\"{}\"", EXACT_NAME_PREFIX, name)) }
        })
        .join(OR_SEPARATOR);
    format!("{}{}", WEB_SEARCH_BASE, urlencoding::encode(&query))
}

/// Reads every input line, then prints the search URL for all of them.
pub fn print_url(input: impl BufRead, mut output: impl Write) -> Result<(), Error> {
    let names = input.lines().collect::<Result<Vec<_>, _>>().annotate("reading stdin")?;
    writeln!(output, "{}", search_url(&names))?;
    Ok(())
}
