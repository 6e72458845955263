//! Civitai model-version lookup.
//!
//! `GET {endpoint}/model-versions/by-hash/{sha256}`. Anonymous access works;
//! an API key is sent as a bearer token when configured.

use super::provider::{resolve_env_var, ModelVersionInfo, TagProvider};
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

const USER_AGENT: &str = concat!("loratags/", env!("CARGO_PKG_VERSION"));

/// Looks up trained words on Civitai.
pub struct CivitaiProvider {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl CivitaiProvider {
    pub fn new(
        endpoint: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// Build a provider from the `[provider]` config section.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Self::new(
            &config.endpoint,
            resolve_env_var(&config.api_key),
            Duration::from_millis(config.timeout_ms),
        )
    }

    /// Lookup URL for a given hash.
    pub fn lookup_url(&self, hash: &str) -> String {
        format!("{}/model-versions/by-hash/{}", self.endpoint, hash)
    }
}

#[async_trait]
impl TagProvider for CivitaiProvider {
    fn name(&self) -> &str {
        "civitai"
    }

    async fn lookup(&self, hash: &str) -> Result<Option<ModelVersionInfo>, ProviderError> {
        let url = self.lookup_url(hash);
        tracing::debug!("GET {url}");

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let resp = request.send().await.map_err(|e| ProviderError::Request {
            hash: hash.to_string(),
            message: e.to_string(),
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::info!("No model version found for {hash} (HTTP {status})");
            return Ok(None);
        }

        let info: ModelVersionInfo = resp.json().await.map_err(|e| ProviderError::Decode {
            hash: hash.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_trims_trailing_slash() {
        let provider =
            CivitaiProvider::new("https://civitai.com/api/v1/", None, Duration::from_secs(5))
                .unwrap();
        assert_eq!(
            provider.lookup_url("abc123"),
            "https://civitai.com/api/v1/model-versions/by-hash/abc123"
        );
    }

    #[test]
    fn test_from_default_config() {
        let provider = CivitaiProvider::from_config(&ProviderConfig::default()).unwrap();
        assert_eq!(provider.name(), "civitai");
        assert!(provider.lookup_url("ff").starts_with("https://civitai.com/api/v1/"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        // Port 9 on localhost has nothing listening; connect fails fast.
        let provider =
            CivitaiProvider::new("http://127.0.0.1:9/api/v1", None, Duration::from_secs(2))
                .unwrap();
        let err = provider.lookup("abc").await.unwrap_err();
        assert!(matches!(err, ProviderError::Request { .. }));
    }

    /// Serve one canned HTTP response on a local port; returns the API base.
    async fn serve_once(status: &str, body: &str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/api/v1")
    }

    async fn lookup_against(
        status: &str,
        body: &str,
    ) -> Result<Option<ModelVersionInfo>, ProviderError> {
        let endpoint = serve_once(status, body).await;
        let provider = CivitaiProvider::new(&endpoint, None, Duration::from_secs(5)).unwrap();
        provider.lookup("abc123").await
    }

    #[tokio::test]
    async fn test_not_found_is_none() {
        let result = lookup_against("404 Not Found", r#"{"error":"Model not found"}"#).await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn test_server_error_is_none() {
        let result = lookup_against("500 Internal Server Error", "").await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ok_with_trained_words() {
        let body = r#"{"id": 3, "trainedWords": ["a", "b"]}"#;
        let info = lookup_against("200 OK", body).await.unwrap().unwrap();
        assert_eq!(info.id, Some(3));
        assert_eq!(info.trained_words, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[tokio::test]
    async fn test_ok_without_trained_words() {
        let info = lookup_against("200 OK", r#"{"id": 3}"#).await.unwrap().unwrap();
        assert_eq!(info.trained_words, None);
    }

    #[tokio::test]
    async fn test_ok_with_invalid_body_is_decode_error() {
        let err = lookup_against("200 OK", "<html>rate limited</html>")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }));
    }
}
