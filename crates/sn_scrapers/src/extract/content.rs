use lazy_static::lazy_static;
use scraper::Html;
use sn_core::NO_CONTENT;
use tracing::debug;

use super::rules::{text_of, RuleChain};

/// Fragments at or below this many characters are treated as captions or labels.
pub const MIN_FRAGMENT_CHARS: usize = 20;

lazy_static! {
    pub static ref CONTENT_RULES: RuleChain = RuleChain::new(&[
        ".content",
        ".post-content",
        ".article-body",
        ".entry-content",
        "article p",
        "main p",
    ]);
}

/// Joins the text of every node matched by the first matching rule, dropping
/// short fragments. Later rules are never consulted once one rule matched,
/// even if all of its nodes were dropped.
pub fn extract_content(document: &Html) -> String {
    let (rule, nodes) = match CONTENT_RULES.first_match_set(document) {
        Some(found) => found,
        None => {
            debug!("No content rule matched");
            return NO_CONTENT.to_string();
        }
    };

    let fragments: Vec<String> = nodes
        .into_iter()
        .map(text_of)
        .filter(|text| is_substantial(text))
        .collect();

    debug!(
        "Content rule {} kept {} fragment(s)",
        rule.css(),
        fragments.len()
    );

    if fragments.is_empty() {
        NO_CONTENT.to_string()
    } else {
        fragments.join(" ")
    }
}

fn is_substantial(text: &str) -> bool {
    text.chars().count() > MIN_FRAGMENT_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_A: &str = "This paragraph is long enough to keep.";
    const LONG_B: &str = "And so is this second paragraph here.";

    fn content_of(html: &str) -> String {
        extract_content(&Html::parse_document(html))
    }

    #[test]
    fn test_collects_all_matches_of_winning_rule() {
        let html = format!(
            r#"<body>
                <div class="post-content">{}</div>
                <div class="post-content">short</div>
                <div class="post-content">{}</div>
            </body>"#,
            LONG_A, LONG_B
        );
        assert_eq!(content_of(&html), format!("{} {}", LONG_A, LONG_B));
    }

    #[test]
    fn test_does_not_cascade_past_first_matching_rule() {
        let html = format!(
            r#"<body>
                <div class="content">tiny</div>
                <article><p>{}</p></article>
            </body>"#,
            LONG_A
        );
        assert_eq!(content_of(&html), NO_CONTENT);
    }

    #[test]
    fn test_structural_fallback() {
        let html = format!(
            r#"<body><main><p>{}</p><p>caption</p><p>{}</p></main></body>"#,
            LONG_A, LONG_B
        );
        assert_eq!(content_of(&html), format!("{} {}", LONG_A, LONG_B));
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        // 20 characters, 60 bytes: still noise.
        let twenty = "あ".repeat(20);
        let html = format!(r#"<body><div class="content">{}</div></body>"#, twenty);
        assert_eq!(content_of(&html), NO_CONTENT);

        let twenty_one = "あ".repeat(21);
        let html = format!(r#"<body><div class="content">{}</div></body>"#, twenty_one);
        assert_eq!(content_of(&html), twenty_one);
    }

    #[test]
    fn test_fragments_are_trimmed() {
        let html = format!(
            "<body><div class=\"entry-content\">\n    {}\n  </div></body>",
            LONG_A
        );
        assert_eq!(content_of(&html), LONG_A);
    }

    #[test]
    fn test_whitespace_between_children_does_not_count() {
        let html = "<body><div class=\"content\"><span>abcde</span>            \n            <span>fghij</span></div></body>";
        assert_eq!(content_of(html), NO_CONTENT);
    }

    #[test]
    fn test_indented_children_are_joined_without_layout() {
        let html = "<body><div class=\"content\">\n  <p>First paragraph here.</p>\n  <p>Second one.</p>\n</div></body>";
        assert_eq!(content_of(html), "First paragraph here.Second one.");
    }

    #[test]
    fn test_mixed_containers() {
        let html = format!(
            "<body>\n<div class=\"content\">\n    <p>{}</p>\n</div>\n<div class=\"content\">\n    <p>a</p>\n    <p>b</p>\n</div>\n</body>",
            LONG_A
        );
        assert_eq!(content_of(&html), LONG_A);
    }

    #[test]
    fn test_sentinel_without_any_match() {
        assert_eq!(content_of("<html><body></body></html>"), NO_CONTENT);
    }
}
