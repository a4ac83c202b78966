use async_trait::async_trait;
use reqwest::{Client, header::USER_AGENT};

use crate::config::Config;

/// Fetches the HTML body of a web page.
///
/// Errors cover both transport failures and non-2xx statuses. Callers treat
/// them as recoverable.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, reqwest::Error>;
}

/// Single GET with a browser-like `User-Agent`, no timeout.
pub struct ReqwestFetcher {
    client: Client,
    user_agent: String,
}

impl ReqwestFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?;

        response.text().await
    }
}
