use clap::Parser;
use sn_core::{Error, Result};
use sn_scrapers::{init_logging, FetchConfig, GenericScraper, Scraper};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "snap", author, version, about = "Scrape one web page into a JSON article record", long_about = None)]
struct Cli {
    /// The page URL to scrape
    url: Option<String>,
}

async fn scrape(url: &str) -> Result<String> {
    let config = FetchConfig::from_env();
    let mut scraper = GenericScraper::new(&config)?;
    if !scraper.can_handle(url) {
        return Err(Error::InvalidUrl(url.to_string()));
    }
    let article = scraper.scrape_article(url).await?;
    Ok(serde_json::to_string_pretty(&article)?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let logger = init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let url = match cli.url {
        Some(url) => url,
        None => {
            eprintln!("Usage: snap <url>");
            return ExitCode::FAILURE;
        }
    };

    match scrape(&url).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger
                .with_new_prefixes(format!("[{}]", url))
                .error(&format!("Error scraping: {}", e));
            ExitCode::FAILURE
        }
    }
}
