//! Ordered CSS selector rules with first-success fallback.
//!
//! Every field extractor owns one [`RuleChain`]. Rules are tried strictly in
//! the order they were declared, so the chain itself documents the priority.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// A single compiled selector rule.
pub struct Rule {
    css: &'static str,
    selector: Selector,
}

impl Rule {
    /// Compiles `css`, returning `None` (and logging) when it is not a valid selector.
    pub fn parse(css: &'static str) -> Option<Self> {
        match Selector::parse(css) {
            Ok(selector) => Some(Self { css, selector }),
            Err(e) => {
                warn!("Skipping invalid selector {}: {:?}", css, e);
                None
            }
        }
    }

    pub fn css(&self) -> &'static str {
        self.css
    }

    /// First matching node in document order.
    pub fn first<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document.select(&self.selector).next()
    }

    /// Every matching node in document order.
    pub fn match_set<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        document.select(&self.selector).collect()
    }
}

pub struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    pub fn new(selectors: &[&'static str]) -> Self {
        Self {
            rules: selectors.iter().copied().filter_map(Rule::parse).collect(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Applies `read` to the first match of each rule in turn and returns the
    /// first value it yields, together with the rule that produced it.
    pub fn first_success<'a, T, F>(&self, document: &'a Html, read: F) -> Option<(&Rule, T)>
    where
        F: Fn(ElementRef<'a>) -> Option<T>,
    {
        self.rules
            .iter()
            .find_map(|rule| rule.first(document).and_then(&read).map(|value| (rule, value)))
    }

    /// Returns the match set of the first rule that matches anything at all.
    pub fn first_match_set<'a>(&self, document: &'a Html) -> Option<(&Rule, Vec<ElementRef<'a>>)> {
        self.rules.iter().find_map(|rule| {
            let nodes = rule.match_set(document);
            if nodes.is_empty() {
                None
            } else {
                Some((rule, nodes))
            }
        })
    }
}

/// Each descendant text node trimmed, empty ones dropped, the rest joined
/// without a separator.
pub fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<String>()
}

pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
