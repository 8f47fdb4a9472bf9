//! Field-by-field article extraction over an already parsed document.
//!
//! Each field is derived independently from its own [`rules::RuleChain`];
//! nothing here can fail, a missing field is only ever a placeholder or `None`.

pub mod content;
pub mod date;
pub mod image;
pub mod rules;
pub mod title;

use scraper::Html;
use sn_core::Article;

pub use content::extract_content;
pub use date::extract_date;
pub use image::extract_image;
pub use title::extract_title;

/// Builds the full record for `document`, fetched from `url`.
pub fn extract_article(document: &Html, url: &str) -> Article {
    Article {
        url: url.to_string(),
        title: extract_title(document),
        content: extract_content(document),
        published_date: extract_date(document),
        image_url: extract_image(document, url),
        scraped_at: None,
    }
}

/// Parses `html` and extracts it in one go.
pub fn extract_html(html: &str, url: &str) -> Article {
    let document = Html::parse_document(html);
    extract_article(&document, url)
}
