use rand::seq::SliceRandom;
use reqwest::Client;
use sn_core::Result;
use tracing::debug;

use crate::config::FetchConfig;
use crate::decode::decode_body;
use crate::scrapers::utils::parse_url;

/// Desktop browser strings rotated between fetchers.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
];

pub fn random_user_agent() -> String {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
        .to_string()
}

/// Retrieves raw page HTML. One client, one `User-Agent` per fetcher.
pub struct Fetcher {
    client: Client,
    user_agent: String,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let user_agent = config.user_agent.clone().unwrap_or_else(random_user_agent);
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent.as_str())
            .build()?;
        Ok(Self { client, user_agent })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GETs `url` and returns the decoded body. Non-2xx responses are errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url = parse_url(url)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!("{} responded {}", response.url(), response.status());
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;
        Ok(decode_body(&body, content_type.as_deref()))
    }
}
