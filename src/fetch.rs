use std::time::Duration;

use log::debug;
use reqwest::{Client, Url};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        Self::new(Duration::from_secs(config.timeout), &config.user_agent)
    }

    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("Fetching {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        debug!("Fetched {} bytes from {url}", html.len());
        Ok(html)
    }
}

/// Host part of `url`, lowercased, as the dispatcher expects it.
pub fn domain_of(url: &str) -> Result<String, ScrapeError> {
    let parsed = Url::parse(url).map_err(|e| ScrapeError::InvalidUrl(format!("{url}: {e}")))?;
    parsed
        .host_str()
        .map(str::to_lowercase)
        .ok_or_else(|| ScrapeError::InvalidUrl(format!("{url}: no host")))
}
