use crate::config::error::ConfigError;
use crate::config::tls::TlsServerConfig;
use serde::{Deserialize, Serialize};

/// Listening settings for the HTTP receiver.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HttpServerConfig {
    /// Address to bind, e.g. "0.0.0.0:4318"
    #[serde(default)]
    pub endpoint: String,

    /// Optional TLS config. Absent means plain HTTP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsServerConfig>,
}

impl HttpServerConfig {
    /// Check the config for internal consistency.
    ///
    /// An empty endpoint is rejected here rather than silently defaulted; the
    /// server constructor only ever sees an address it can try to bind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::InvalidEndpoint);
        }

        if let Some(tls) = &self.tls {
            tls.validate()
                .map_err(|source| ConfigError::InvalidTls { source })?;
        }

        Ok(())
    }
}
