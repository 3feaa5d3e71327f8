use crate::http::{build_client, get_json, join_url};
use async_trait::async_trait;
use infiniscroll_core::{AppConfig, ScrollError, ScrollResult};
use infiniscroll_domain::{PageFetcher, PageResponse, Patient, PatientPayload};
use reqwest::Client;

pub const PATIENT_PAGE_SIZE: u32 = 10;

/// Path parameters that select a patient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientQuery {
    pub clinic_id: u32,
    pub state_id: u32,
    pub country_id: u32,
}

/// Fetches `GET {base}/api/Patient/{clinic}/{state}/{country}/{page}/10` with
/// a bearer token.
#[derive(Clone)]
pub struct PatientsFetcher {
    client: Client,
    base_url: String,
    query: PatientQuery,
    token: Option<String>,
}

impl PatientsFetcher {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        query: PatientQuery,
        token: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            query,
            token,
        }
    }

    pub fn from_config(config: &AppConfig) -> ScrollResult<Self> {
        let missing = |name: &str| ScrollError::Config(format!("{} is required for patients", name));
        let query = PatientQuery {
            clinic_id: config.clinic_id.ok_or_else(|| missing("clinic_id"))?,
            state_id: config.state_id.ok_or_else(|| missing("state_id"))?,
            country_id: config.country_id.ok_or_else(|| missing("country_id"))?,
        };
        if config.token.is_none() {
            tracing::warn!("no bearer token configured; patient requests will be anonymous");
        }
        let client = build_client(config.request_timeout())?;
        Ok(Self::new(
            client,
            config.effective_patients_base_url(),
            query,
            config.token.clone(),
        ))
    }

    pub fn page_url(&self, page: u32) -> String {
        let path = format!(
            "api/Patient/{}/{}/{}/{}/{}",
            self.query.clinic_id,
            self.query.state_id,
            self.query.country_id,
            page,
            PATIENT_PAGE_SIZE
        );
        join_url(&self.base_url, &path)
    }
}

impl std::fmt::Debug for PatientsFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatientsFetcher")
            .field("base_url", &self.base_url)
            .field("query", &self.query)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl PageFetcher for PatientsFetcher {
    type Item = Patient;

    async fn fetch_page(&self, page: u32) -> ScrollResult<PageResponse<Patient>> {
        let url = self.page_url(page);
        tracing::debug!("GET {}", url);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let payload: PatientPayload = get_json(request, &url).await?;
        Ok(payload.into_page(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> PatientQuery {
        PatientQuery {
            clinic_id: 12,
            state_id: 4,
            country_id: 91,
        }
    }

    #[test]
    fn test_page_url() {
        let fetcher = PatientsFetcher::new(Client::new(), "https://clinic.example/", query(), None);
        assert_eq!(
            fetcher.page_url(2),
            "https://clinic.example/api/Patient/12/4/91/2/10"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let fetcher = PatientsFetcher::new(
            Client::new(),
            "https://clinic.example",
            query(),
            Some("secret-token".into()),
        );
        let debug = format!("{:?}", fetcher);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_from_config_requires_ids() {
        let config = AppConfig {
            clinic_id: Some(1),
            ..AppConfig::default()
        };
        let err = PatientsFetcher::from_config(&config).unwrap_err();
        assert!(matches!(err, ScrollError::Config(msg) if msg.contains("state_id")));
    }
}
