use crate::config::error::ConfigError;
use serde_yaml::Value;

/// Key tables for the receiver schema, consulted in strict mode.
const SERVER_KEYS: &[&str] = &["endpoint", "tls"];
const TLS_KEYS: &[&str] = &["cert_file", "key_file", "client_ca_file", "min_version"];

/// Walk a parsed config document and fail on the first key outside the
/// schema tables above.
pub(crate) fn check_unknown_keys(doc: &Value) -> Result<(), ConfigError> {
    let Some(root) = doc.as_mapping() else {
        return Ok(());
    };

    for (key, value) in root {
        let key = key_name(key);

        if !SERVER_KEYS.contains(&key.as_str()) {
            return Err(ConfigError::UnknownKey {
                section: "server",
                key,
            });
        }

        if key == "tls" {
            check_tls_keys(value)?;
        }
    }

    Ok(())
}

fn check_tls_keys(value: &Value) -> Result<(), ConfigError> {
    // A null tls block deserializes to no TLS; nothing to check.
    let Some(tls) = value.as_mapping() else {
        return Ok(());
    };

    for (key, _) in tls {
        let key = key_name(key);

        if !TLS_KEYS.contains(&key.as_str()) {
            return Err(ConfigError::UnknownKey {
                section: "tls",
                key,
            });
        }
    }

    Ok(())
}

/// Render a mapping key for an error message. Keys are strings in any
/// well-formed config; non-string keys still get reported, not skipped.
fn key_name(key: &Value) -> String {
    match key.as_str() {
        Some(s) => s.to_string(),
        None => serde_yaml::to_string(key)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}
