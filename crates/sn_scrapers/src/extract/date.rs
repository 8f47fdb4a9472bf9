use lazy_static::lazy_static;
use scraper::{ElementRef, Html};
use tracing::debug;

use super::rules::{non_empty, text_of, RuleChain};

lazy_static! {
    pub static ref DATE_RULES: RuleChain = RuleChain::new(&[
        "time[datetime]",
        ".date",
        ".published",
        "[class*=\"date\"]",
    ]);
}

/// Prefers a `datetime` attribute, returned verbatim, over the node's visible text.
pub fn extract_date(document: &Html) -> Option<String> {
    let found = DATE_RULES.first_success(document, read_date);
    match &found {
        Some((rule, date)) => debug!("Date {} found via {}", date, rule.css()),
        None => debug!("No date rule matched"),
    }
    found.map(|(_, date)| date)
}

fn read_date(element: ElementRef<'_>) -> Option<String> {
    match element.value().attr("datetime") {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ => non_empty(text_of(element)),
    }
}
