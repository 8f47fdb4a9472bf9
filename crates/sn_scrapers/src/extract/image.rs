use lazy_static::lazy_static;
use scraper::{ElementRef, Html};
use tracing::debug;
use url::Url;

use super::rules::RuleChain;

lazy_static! {
    /// Social preview metadata first, then images in likely article regions.
    pub static ref IMAGE_RULES: RuleChain = RuleChain::new(&[
        "meta[property=\"og:image\"]",
        ".featured-image img",
        ".post-image img",
        "article img",
        "main img",
    ]);
}

/// Finds the representative image and resolves it against `base_url`.
pub fn extract_image(document: &Html, base_url: &str) -> Option<String> {
    let found = IMAGE_RULES.first_success(document, |el| {
        image_reference(el).and_then(|reference| resolve_url(base_url, reference))
    });
    match &found {
        Some((rule, image)) => debug!("Image {} found via {}", image, rule.css()),
        None => debug!("No image rule matched"),
    }
    found.map(|(_, image)| image)
}

/// Raw, possibly relative, reference carried by an image-bearing node.
fn image_reference<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    let node = element.value();
    let attrs: &[&str] = if node.name() == "meta" {
        &["content"]
    } else {
        &["src", "data-src"]
    };
    attrs
        .iter()
        .filter_map(|attr| node.attr(attr))
        .find(|value| !value.is_empty())
}

/// Standard URL join of `reference` onto `base_url`.
///
/// An unparsable base still lets an already absolute reference through.
pub fn resolve_url(base_url: &str, reference: &str) -> Option<String> {
    let resolved = match Url::parse(base_url) {
        Ok(base) => base.join(reference),
        Err(_) => Url::parse(reference),
    };
    resolved.ok().map(|url| url.to_string())
}
