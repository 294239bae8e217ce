//! Error types for the SolarEdge energy report.
//!
//! Each pipeline stage has its own typed error so the command boundary can tell
//! a user-facing diagnostic (a file without energy data) from a fatal failure.

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed transport-level cause, kept opaque so fake HTTP clients can produce it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration and credential errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Remote query and persistence errors
    #[error("fetch error")]
    Fetch(#[from] FetchError),

    /// Payload decoding errors
    #[error("payload error")]
    Payload(#[from] PayloadError),

    /// Statistics computation errors
    #[error("statistics error")]
    Statistics(#[from] StatisticsError),

    /// Report output could not be written
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Credentials file could not be read
    #[error("cannot read site api data from file '{file}'")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Credentials file is not well-formed YAML
    #[error("cannot parse site api data from file '{file}': {message}")]
    Parse { file: PathBuf, message: String },

    /// A required key is absent
    #[error(
        "file '{file}' must contain keys 'site_id' and 'api_key' (missing '{key}'). \
         File contents: '{contents}'"
    )]
    MissingKey {
        file: PathBuf,
        key: &'static str,
        contents: String,
    },

    /// A key is present but holds a non-scalar value
    #[error("invalid value for '{key}' in file '{file}': {message}")]
    Invalid {
        file: PathBuf,
        key: &'static str,
        message: String,
    },

    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),
}

/// Remote query and artifact persistence errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The query itself is not valid
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Request exceeded the fixed timeout
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    /// Any other transport failure
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The response could not be written to the artifact path
    #[error("failed to write energy data to '{path}'")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Payload decoding errors.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// Artifact could not be read
    #[error("cannot read energy data from '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not valid structured data
    #[error("malformed energy payload: {0}")]
    Malformed(String),

    /// Payload has no top-level `energy` field
    #[error("payload does not contain 'energy' data")]
    MissingSeries,
}

/// Statistics computation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("energy series has no readings")]
    EmptySeries,

    #[error("energy series has only null readings")]
    AllNullSeries,
}

impl ConfigError {
    /// Creates a new file read error.
    pub fn io(file: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            file: file.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new YAML parse error.
    pub fn parse(file: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            file: file.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Creates a new missing key error.
    pub fn missing_key(
        file: impl AsRef<Path>,
        key: &'static str,
        contents: impl Into<String>,
    ) -> Self {
        Self::MissingKey {
            file: file.as_ref().to_path_buf(),
            key,
            contents: contents.into(),
        }
    }

    /// Creates a new invalid value error.
    pub fn invalid(file: impl AsRef<Path>, key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            file: file.as_ref().to_path_buf(),
            key,
            message: message.into(),
        }
    }

    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }
}

impl FetchError {
    /// Classifies a reqwest failure into timeout or transport error.
    pub fn from_reqwest(url: impl Into<String>, err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.into(),
                timeout,
            }
        } else {
            Self::transport(url, err)
        }
    }

    /// Creates a transport error from any underlying cause.
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Creates an artifact write error.
    pub fn persist(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Persist {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl PayloadError {
    /// Creates an artifact read error.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a malformed payload error from a decoder diagnostic.
    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self::Malformed(err.to_string())
    }
}
