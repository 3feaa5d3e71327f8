use infiniscroll_core::{ScrollError, ScrollResult};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("infiniscroll/", env!("CARGO_PKG_VERSION"));

/// Builds the shared client. Without `timeout` the reqwest defaults apply.
pub fn build_client(timeout: Option<Duration>) -> ScrollResult<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ScrollError::Config(format!("failed to build HTTP client: {}", e)))
}

/// Sends `request` and decodes a JSON body, sorting failures into transport,
/// status and decode errors.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> ScrollResult<T> {
    let response = request
        .send()
        .await
        .map_err(|e| ScrollError::Transport(format!("{}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrollError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ScrollError::Transport(format!("{}: {}", url, e)))?;

    serde_json::from_slice(&body).map_err(|e| ScrollError::Decode(format!("{}: {}", url, e)))
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalises_slashes() {
        assert_eq!(join_url("http://a/", "/quotes"), "http://a/quotes");
        assert_eq!(join_url("http://a", "quotes"), "http://a/quotes");
        assert_eq!(join_url("http://a/v1/", "api/x"), "http://a/v1/api/x");
    }

    #[test]
    fn test_build_client_with_timeout() {
        assert!(build_client(Some(Duration::from_secs(3))).is_ok());
        assert!(build_client(None).is_ok());
    }
}
