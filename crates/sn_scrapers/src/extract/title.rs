use lazy_static::lazy_static;
use scraper::Html;
use sn_core::NO_TITLE;
use tracing::debug;

use super::rules::{non_empty, text_of, RuleChain};

lazy_static! {
    /// Structural heading first, class-name guesses next, `<title>` last.
    pub static ref TITLE_RULES: RuleChain = RuleChain::new(&[
        "h1",
        ".title",
        ".post-title",
        "[class*=\"title\"]",
        "title",
    ]);
}

/// Returns the trimmed text of the first rule whose first match has any text,
/// or [`NO_TITLE`].
pub fn extract_title(document: &Html) -> String {
    match TITLE_RULES.first_success(document, |el| non_empty(text_of(el))) {
        Some((rule, title)) => {
            debug!("Title found via {}", rule.css());
            title
        }
        None => {
            debug!("No title rule matched");
            NO_TITLE.to_string()
        }
    }
}
