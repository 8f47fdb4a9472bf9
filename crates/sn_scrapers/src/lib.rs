pub mod config;
pub mod decode;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod scrapers;

pub use config::FetchConfig;
pub use extract::{extract_article, extract_content, extract_date, extract_html, extract_image, extract_title};
pub use fetch::Fetcher;
pub use logging::{init_logging, Logger};
pub use scrapers::{GenericScraper, Scraper};

pub mod prelude {
    pub use super::scrapers::Scraper;
    pub use sn_core::{Article, Error, Result};
}
