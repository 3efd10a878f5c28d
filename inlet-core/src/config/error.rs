use crate::config::tls::TlsConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("failed to parse YAML: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
    },

    //-------------------------------------------------------------------------
    // Structure
    //-------------------------------------------------------------------------
    #[error("unknown key '{key}' in {section} section")]
    UnknownKey { section: &'static str, key: String },

    //-------------------------------------------------------------------------
    // Validation
    //-------------------------------------------------------------------------
    #[error("endpoint must not be empty")]
    InvalidEndpoint,

    #[error("invalid tls settings")]
    InvalidTls {
        #[source]
        source: TlsConfigError,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(source: serde_yaml::Error) -> Self {
        Self::Parse { source }
    }
}
