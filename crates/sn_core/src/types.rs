use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder title used when no title rule produced any text.
pub const NO_TITLE: &str = "タイトルなし";

/// Placeholder content used when no content rule produced a usable fragment.
pub const NO_CONTENT: &str = "コンテンツなし";

/// Best-effort snapshot of a single web page.
///
/// `title` and `content` always hold a value, falling back to [`NO_TITLE`]
/// and [`NO_CONTENT`]. `published_date` and `image_url` are simply absent when
/// nothing was found. `scraped_at` is left for whoever persists the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub content: String,
    pub published_date: Option<String>,
    pub image_url: Option<String>,
    pub scraped_at: Option<DateTime<Utc>>,
}

impl Article {
    /// True when `title` is a real extracted value rather than the placeholder.
    pub fn has_title(&self) -> bool {
        self.title != NO_TITLE
    }

    /// True when `content` is a real extracted value rather than the placeholder.
    pub fn has_content(&self) -> bool {
        self.content != NO_CONTENT
    }
}
