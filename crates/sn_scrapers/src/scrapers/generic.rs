use async_trait::async_trait;
use scraper::Html;
use sn_core::{Article, Result};

use crate::config::FetchConfig;
use crate::extract::extract_article;
use crate::fetch::Fetcher;
use crate::logging::Logger;
use crate::scrapers::{utils, Scraper};

/// Scrapes any http(s) page with the generic fallback heuristics.
pub struct GenericScraper {
    fetcher: Fetcher,
}

impl GenericScraper {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }
}

#[async_trait]
impl Scraper for GenericScraper {
    fn source(&self) -> &str {
        "generic"
    }

    fn can_handle(&self, url: &str) -> bool {
        utils::parse_url(url).is_ok()
    }

    async fn scrape_article(&mut self, url: &str) -> Result<Article> {
        let logger = Logger::new().with_prefix(format!("[{}]", url));
        logger.info("🌐 Fetching page");
        logger.debug(&format!("User-Agent: {}", self.fetcher.user_agent()));
        let html = self.fetcher.fetch(url).await?;

        // `Html` is not `Send`; keep it out of any await.
        let article = {
            let document = Html::parse_document(&html);
            extract_article(&document, url)
        };

        logger.debug(&format!("Decoded {} bytes of HTML", html.len()));
        logger.info(&format!("📰 {}", article.title));
        if !article.has_content() {
            logger.warn("No article content found");
        }
        Ok(article)
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["generic"]
    }
}
