use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::{Client as ReqwestHttpClient, StatusCode, Url};
use std::time::Duration;

/// The monitoring API must answer within this bound.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A response as received from the wire.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The URL the request was finally resolved to
    pub url: Url,
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Capability to issue a GET request.
///
/// Non-success statuses are not errors at this level; only transport failures are.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: Url) -> Result<HttpResponse, FetchError>;
}

pub struct ReqwestClient {
    http_client: ReqwestHttpClient,
    timeout: Duration,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http_client = ReqwestHttpClient::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| FetchError::transport("<client>", err))?;
        Ok(Self {
            http_client,
            timeout,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: Url) -> Result<HttpResponse, FetchError> {
        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| FetchError::from_reqwest(url.as_str(), err, self.timeout))?;

        let resolved = response.url().clone();
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::from_reqwest(resolved.as_str(), err, self.timeout))?;

        Ok(HttpResponse {
            url: resolved,
            status,
            body: body.to_vec(),
        })
    }
}
