use crate::http::{build_client, get_json, join_url};
use async_trait::async_trait;
use infiniscroll_core::{AppConfig, ScrollResult};
use infiniscroll_domain::{PageFetcher, PageResponse, Quote, QuotesPayload};
use reqwest::Client;

/// Fetches `GET {base}/quotes?page=N`.
#[derive(Debug, Clone)]
pub struct QuotesFetcher {
    client: Client,
    base_url: String,
}

impl QuotesFetcher {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> ScrollResult<Self> {
        let client = build_client(config.request_timeout())?;
        Ok(Self::new(client, config.effective_quotes_base_url()))
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}?page={}", join_url(&self.base_url, "quotes"), page)
    }
}

#[async_trait]
impl PageFetcher for QuotesFetcher {
    type Item = Quote;

    async fn fetch_page(&self, page: u32) -> ScrollResult<PageResponse<Quote>> {
        let url = self.page_url(page);
        tracing::debug!("GET {}", url);
        let payload: QuotesPayload = get_json(self.client.get(&url), &url).await?;
        Ok(payload.into())
    }
}
