/// Plain HTTP GET of site pages.
use anyhow::Context;
use reqwest::Client;

use crate::{config::AppConfig, error::ScrapeError};

// The site serves a cookie wall to unknown agents.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            .user_agent(USER_AGENT);

        if let Some(p) = config.proxy.as_deref() {
            if !p.is_empty() {
                builder = builder.proxy(reqwest::Proxy::all(p).context("invalid PROXY")?);
            }
        }

        let client = builder.build().context("build HTTP client")?;
        Ok(Self { client })
    }

    /// GET `url` and return the decoded body. Non-success statuses count as
    /// fetch failures. No retries.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let classify = |source: reqwest::Error| {
            if source.is_timeout() {
                ScrapeError::Timeout {
                    url: url.to_string(),
                    source,
                }
            } else {
                ScrapeError::Fetch {
                    url: url.to_string(),
                    source,
                }
            }
        };

        let body = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(classify)?
            .text()
            .await
            .map_err(classify)?;

        tracing::debug!("GET {url}: {} bytes", body.len());
        Ok(body)
    }
}
