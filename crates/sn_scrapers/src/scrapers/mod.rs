use async_trait::async_trait;
use sn_core::{Article, Result};

pub mod generic;

pub use generic::GenericScraper;

#[async_trait]
pub trait Scraper: Send + Sync {
    /// Returns the name of the source this scraper handles
    fn source(&self) -> &str;

    /// Returns true if this scraper can handle the given URL
    fn can_handle(&self, url: &str) -> bool;

    /// Scrapes an article from the given URL
    async fn scrape_article(&mut self, url: &str) -> Result<Article>;

    /// Returns a list of CLI shorthand names for this scraper
    fn cli_names(&self) -> Vec<&str> {
        vec![]
    }
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use sn_core::{Error, Result};
    use url::Url;

    /// Parses `url`, accepting only `http` and `https`.
    pub fn parse_url(url: &str) -> Result<Url> {
        let parsed = Url::parse(url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(Error::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                url, scheme
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils;

    #[test]
    fn test_parse_url() {
        assert!(utils::parse_url("https://example.com").is_ok());
        assert!(utils::parse_url("http://example.com/a?b=c").is_ok());
        assert!(utils::parse_url("invalid-url").is_err());
        assert!(utils::parse_url("ftp://example.com").is_err());
        assert!(utils::parse_url("file:///etc/hosts").is_err());
    }
}
