use crate::error::ConfigError;
use serde_derive::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default name of the credentials file.
pub const DEFAULT_SITE_DATA_FILE: &str = "site_api_key.yaml";

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    envy::from_env::<AppConfig>().map_err(ConfigError::env_parse)
}

fn default_base_url() -> String {
    "https://monitoringapi.solaredge.com".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Deserialize, Debug)]
pub struct SolarEdgeConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    // where fetched artifacts are written
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

pub(crate) fn load_solaredge_config() -> Result<SolarEdgeConfig, ConfigError> {
    envy::prefixed("SOLAREDGE_")
        .from_env::<SolarEdgeConfig>()
        .map_err(ConfigError::env_parse)
}

/// Site identifier and API key used to address the monitoring API.
#[derive(Clone, PartialEq, Eq)]
pub struct SiteCredentials {
    pub site_id: String,
    pub api_key: String,
}

impl fmt::Debug for SiteCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteCredentials")
            .field("site_id", &self.site_id)
            .field("api_key", &"***")
            .finish()
    }
}

/// Loads `site_id` and `api_key` from a YAML credentials file.
///
/// The file must be a mapping holding both keys. Unquoted numeric site ids are
/// accepted and kept in their decimal rendering.
pub fn load_site_credentials(path: impl AsRef<Path>) -> Result<SiteCredentials, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
    let document: Value =
        serde_yaml::from_str(&text).map_err(|err| ConfigError::parse(path, err))?;

    let empty = Mapping::new();
    let mapping = document.as_mapping().unwrap_or(&empty);

    Ok(SiteCredentials {
        site_id: required_string(path, mapping, "site_id", &document)?,
        api_key: required_string(path, mapping, "api_key", &document)?,
    })
}

fn required_string(
    path: &Path,
    mapping: &Mapping,
    key: &'static str,
    document: &Value,
) -> Result<String, ConfigError> {
    match mapping.get(key) {
        None | Some(Value::Null) => Err(ConfigError::missing_key(
            path,
            key,
            render_contents(document),
        )),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(Value::Number(value)) => Ok(value.to_string()),
        Some(other) => Err(ConfigError::invalid(
            path,
            key,
            format!("expected a string, found {other:?}"),
        )),
    }
}

fn render_contents(document: &Value) -> String {
    match document {
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}
