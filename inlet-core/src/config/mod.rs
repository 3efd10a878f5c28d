mod error;
mod schema;
mod server;
mod tls;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use server::HttpServerConfig;
pub use tls::{TlsConfigError, TlsServerConfig, TlsVersion};

use std::fs;
use std::path::Path;

/// How the loader treats keys that are not part of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    /// Skip unrecognized keys. Configs written for a newer schema still load.
    #[default]
    Ignore,

    /// Fail on the first unrecognized key.
    Reject,
}

/// Load and validate a receiver config file.
pub fn load_config(path: &Path, policy: UnknownKeyPolicy) -> Result<HttpServerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config = parse_config(&contents, policy)?;
    tracing::debug!(path = %path.display(), "loaded receiver config");

    Ok(config)
}

/// Parse and validate a receiver config from a YAML document.
pub fn parse_config(input: &str, policy: UnknownKeyPolicy) -> Result<HttpServerConfig, ConfigError> {
    let config: HttpServerConfig = match policy {
        UnknownKeyPolicy::Ignore => serde_yaml::from_str(input).map_err(ConfigError::parse)?,
        UnknownKeyPolicy::Reject => {
            let doc: serde_yaml::Value = serde_yaml::from_str(input).map_err(ConfigError::parse)?;
            schema::check_unknown_keys(&doc)?;
            serde_yaml::from_value(doc).map_err(ConfigError::parse)?
        }
    };

    config.validate()?;

    Ok(config)
}
