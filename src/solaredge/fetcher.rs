use crate::config::SiteCredentials;
use crate::error::FetchError;
use crate::solaredge::client::HttpClient;
use crate::solaredge::query::EnergyQuery;
use crate::storage::ArtifactStore;
use reqwest::{StatusCode, Url};
use std::path::PathBuf;
use std::sync::Arc;

/// A raw response persisted verbatim.
#[derive(Debug, Clone)]
pub struct RawArtifact {
    pub path: PathBuf,
    pub request_url: Url,
    pub status: StatusCode,
    pub bytes: Vec<u8>,
}

/// Queries the `energy` endpoint and persists the response body.
pub struct EnergyFetcher {
    http_client: Arc<dyn HttpClient>,
    store: Arc<dyn ArtifactStore>,
    base_url: String,
    data_dir: PathBuf,
}

impl EnergyFetcher {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        store: Arc<dyn ArtifactStore>,
        base_url: impl Into<String>,
        data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            http_client,
            store,
            base_url: base_url.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Builds `{base}/site/{site_id}/energy?timeUnit=..&startDate=..&endDate=..&api_key=..`.
    ///
    /// The site id is a single percent-encoded path segment.
    pub fn request_url(
        &self,
        credentials: &SiteCredentials,
        query: &EnergyQuery,
    ) -> Result<Url, FetchError> {
        let site_id = credentials.site_id.as_str();
        if matches!(site_id, "" | "." | "..") {
            return Err(FetchError::InvalidQuery(format!("invalid site id '{site_id}'")));
        }

        let mut url = Url::parse(&self.base_url).map_err(|err| {
            FetchError::InvalidQuery(format!("invalid base URL '{}': {err}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                FetchError::InvalidQuery(format!(
                    "base URL '{}' cannot have a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["site", site_id, "energy"]);
        url.query_pairs_mut()
            .extend_pairs(query.params())
            .append_pair("api_key", &credentials.api_key);
        Ok(url)
    }

    pub async fn fetch(
        &self,
        credentials: &SiteCredentials,
        query: &EnergyQuery,
    ) -> Result<RawArtifact, FetchError> {
        let url = self.request_url(credentials, query)?;
        let response = self.http_client.get(url).await?;
        tracing::debug!("Request URL: {}", response.url);

        if !response.status.is_success() {
            tracing::warn!(
                "Monitoring API answered with status {}, persisting the body anyway",
                response.status
            );
        }

        let path = self.data_dir.join(query.artifact_name());
        self.store
            .write(&path, &response.body)
            .map_err(|err| FetchError::persist(&path, err))?;
        tracing::debug!("Energy data written to '{}'", path.display());

        Ok(RawArtifact {
            path,
            request_url: response.url,
            status: response.status,
            bytes: response.body,
        })
    }
}
