//! Configuration utilities for testing.

use crate::config::SiteCredentials;

/// Builder for creating test site credentials.
#[derive(Debug)]
pub struct TestCredentialsBuilder {
    site_id: String,
    api_key: String,
}

impl TestCredentialsBuilder {
    /// Creates a new credentials builder with default values.
    pub fn new() -> Self {
        Self {
            site_id: "1234567".to_string(),
            api_key: "TEST_API_KEY".to_string(),
        }
    }

    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = site_id.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn build(self) -> SiteCredentials {
        SiteCredentials {
            site_id: self.site_id,
            api_key: self.api_key,
        }
    }
}

impl Default for TestCredentialsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
