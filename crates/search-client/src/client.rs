use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::retry::RetryPolicy;

mod ingest;
mod search;

const PATH_SERVER_INFO: &str = "/services/server/info";
const PATH_SEARCH_JOBS: &str = "/services/search/jobs";
const PATH_RECEIVER_SIMPLE: &str = "/services/receivers/simple";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Client for the search platform's HTTP management API.
#[derive(Debug, Clone)]
pub struct Client {
    base: String,
    credentials: Credentials,
    retry: RetryPolicy,
    search_poll: Duration,
    ingest_poll: Duration,
    ingest_timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(server_addr: &str, credentials: Credentials) -> Result<Self> {
        // Management ports routinely ship self-signed certificates.
        let http = HttpClient::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .context("failed constructing HTTP client")?;

        Ok(Self {
            base: normalize_base(server_addr),
            credentials,
            retry: RetryPolicy::default(),
            search_poll: Duration::from_secs(2),
            ingest_poll: Duration::from_secs(5),
            ingest_timeout: Duration::from_secs(120),
            http,
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_search_poll(mut self, poll: Duration) -> Self {
        self.search_poll = poll;
        self
    }

    pub fn with_ingest_wait(mut self, poll: Duration, timeout: Duration) -> Self {
        self.ingest_poll = poll;
        self.ingest_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Authenticated round trip to the server-info endpoint; the cheapest way
    /// to surface a bad address or bad credentials before any data moves.
    pub async fn ping(&self) -> Result<()> {
        let url = self.url_for(PATH_SERVER_INFO);
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .query(&[("output_mode", "json")])
            .send()
            .await
            .with_context(|| format!("cannot reach the search platform at {}", self.base))?;
        response
            .error_for_status()
            .context("search platform rejected the configured credentials")?;
        info!(server = %self.base, "connected to search platform");
        Ok(())
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn with_retry_loop<T, F, Fut>(&self, operation: &str, mut make: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0u32;
        loop {
            match make().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt >= self.retry.max_attempts {
                        return Err(err);
                    }
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        operation,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %format!("{err:#}"),
                        "platform request failed, retrying"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}

fn normalize_base(server_addr: &str) -> String {
    let trimmed = server_addr.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
