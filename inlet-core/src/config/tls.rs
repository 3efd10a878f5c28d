use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// TLS settings the receiver uses to terminate secure connections.
///
/// File references are checked for consistency during config validation, not
/// for existence. Opening and parsing the files happens when the listener is
/// built, so a broken path surfaces there.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TlsServerConfig {
    /// PEM certificate presented to clients. Paired with `key_file`.
    #[serde(default)]
    pub cert_file: String,

    /// Private key for `cert_file`.
    #[serde(default)]
    pub key_file: String,

    /// CA bundle used to verify client certificates. Setting this requests
    /// client certificate verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ca_file: Option<String>,

    /// Lowest protocol version offered, e.g. "1.2" or "1.3".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
}

impl TlsServerConfig {
    /// Check the TLS block for internal consistency.
    pub fn validate(&self) -> Result<(), TlsConfigError> {
        match (self.cert_file.is_empty(), self.key_file.is_empty()) {
            (false, false) | (true, true) => {}
            _ => return Err(TlsConfigError::IncompleteCertPair),
        }

        if let Some(version) = &self.min_version {
            version.parse::<TlsVersion>()?;
        }

        Ok(())
    }

    /// Whether a client CA is configured, which enables client certificate
    /// verification on the listener.
    pub fn requires_client_auth(&self) -> bool {
        self.client_ca_file.is_some()
    }

    /// The configured minimum protocol version, if any.
    ///
    /// `min_version` is checked during config validation; runtime code can
    /// assume a `Some` value here parses.
    pub fn min_tls_version(&self) -> Option<TlsVersion> {
        self.min_version.as_deref().and_then(|v| v.parse().ok())
    }
}

/// A TLS protocol version the listener stack can negotiate.
///
/// rustls speaks 1.2 and 1.3; anything older is rejected at config time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsVersion {
    Tls12,
    Tls13,
}

impl FromStr for TlsVersion {
    type Err = TlsConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.2" => Ok(TlsVersion::Tls12),
            "1.3" => Ok(TlsVersion::Tls13),
            other => Err(TlsConfigError::UnsupportedTlsVersion {
                version: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TlsVersion::Tls12 => write!(f, "1.2"),
            TlsVersion::Tls13 => write!(f, "1.3"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TlsConfigError {
    #[error("cert_file and key_file must be set together")]
    IncompleteCertPair,

    #[error("unsupported TLS version '{version}' (expected \"1.2\" or \"1.3\")")]
    UnsupportedTlsVersion { version: String },
}
