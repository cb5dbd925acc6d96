use crate::config::schema::Config;
use crate::error::{FetchError, Result, ScrapeyError};
use crate::parser::parse_html;
use crate::storage::{save_data, StorageOption};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of page bodies
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return the full response body
    async fn fetch_url(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher issuing one GET per URL.
///
/// `RetryAttempts` and `RateLimit` from the config are not honored here;
/// a failed request is returned to the caller as is.
pub struct Crawler {
    client: reqwest::Client,
    timeout: Duration,
}

impl std::fmt::Debug for Crawler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crawler")
            .field("client", &"Client { ... }")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Crawler {
    /// Create a crawler sending `user_agent` with every request
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Request(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a crawler from the scraping options of `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.scraping_options.user_agent)
    }
}

#[async_trait]
impl Fetcher for Crawler {
    async fn fetch_url(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching {url}");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(url.to_string())
                } else {
                    FetchError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeyError::Fetch(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(format!("Failed to read body of {url}: {e}")))?;

        tracing::debug!(bytes = body.len(), "Fetched {url}");
        Ok(body)
    }
}

/// URLs to visit: the base URL when `includeBase` is set, then each route
/// joined onto the base.
///
/// A URL is visited once; `https://example.com` and `https://example.com/`
/// count as the same page and the first spelling wins.
#[must_use]
pub fn crawl_targets(config: &Config) -> Vec<String> {
    let base = config.url.base.trim_end_matches('/');
    let mut targets: Vec<String> = Vec::with_capacity(config.url.routes.len() + 1);
    let mut push = |url: String| {
        let key = url.trim_end_matches('/');
        if !targets.iter().any(|t| t.trim_end_matches('/') == key) {
            targets.push(url);
        }
    };

    if config.url.include_base {
        push(config.url.base.clone());
    }
    for route in &config.url.routes {
        let route = route.trim_start_matches('/');
        push(format!("{base}/{route}"));
    }

    targets
}

/// Outcome of one crawled page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub url: String,
    pub fields: HashMap<String, String>,
}

/// Fetch, parse and store every target of `config`.
///
/// Stops at the first failing URL.
pub async fn crawl(fetcher: &dyn Fetcher, config: &Config) -> Result<Vec<PageResult>> {
    let formats = config
        .storage
        .output_formats
        .iter()
        .map(|f| f.parse::<StorageOption>())
        .collect::<Result<Vec<_>>>()?;

    let mut pages = Vec::new();
    for url in crawl_targets(config) {
        let content = fetcher.fetch_url(&url).await?;
        let fields = parse_html(&content)?;

        for format in &formats {
            save_data(&fields, *format)?;
        }

        pages.push(PageResult { url, fields });
    }

    tracing::info!(pages = pages.len(), "Crawl finished");
    Ok(pages)
}
