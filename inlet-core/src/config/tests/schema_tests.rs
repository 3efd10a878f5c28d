use crate::config::{ConfigError, UnknownKeyPolicy, parse_config};

#[test]
fn ignore_policy_skips_unknown_keys() {
    // Arrange
    let input = r#"
endpoint: "0.0.0.0:4318"
compression: gzip
"#;

    // Act
    let config = parse_config(input, UnknownKeyPolicy::Ignore).unwrap();

    // Assert
    assert_eq!(config.endpoint, "0.0.0.0:4318");
}

#[test]
fn reject_policy_fails_on_unknown_server_key() {
    // Arrange
    let input = r#"
endpoint: "0.0.0.0:4318"
compression: gzip
"#;

    // Act
    let result = parse_config(input, UnknownKeyPolicy::Reject);

    // Assert
    assert!(matches!(
        result,
        Err(ConfigError::UnknownKey { section: "server", key }) if key == "compression"
    ));
}

#[test]
fn reject_policy_fails_on_unknown_tls_key() {
    // Arrange
    let input = r#"
endpoint: "0.0.0.0:4318"
tls:
  cert_file: "a.pem"
  key_file: "a.key"
  ciphers: "TLS_AES_128_GCM_SHA256"
"#;

    // Act
    let result = parse_config(input, UnknownKeyPolicy::Reject);

    // Assert
    assert!(matches!(
        result,
        Err(ConfigError::UnknownKey { section: "tls", key }) if key == "ciphers"
    ));
}

#[test]
fn reject_policy_accepts_full_schema() {
    // Arrange
    let input = r#"
endpoint: "0.0.0.0:4318"
tls:
  cert_file: "a.pem"
  key_file: "a.key"
  client_ca_file: "ca.pem"
  min_version: "1.2"
"#;

    // Act
    let result = parse_config(input, UnknownKeyPolicy::Reject);

    // Assert
    assert!(result.is_ok());
}

#[test]
fn reject_policy_accepts_null_tls() {
    // Arrange
    let input = r#"
endpoint: "0.0.0.0:4318"
tls: null
"#;

    // Act
    let result = parse_config(input, UnknownKeyPolicy::Reject);

    // Assert
    assert!(result.is_ok());
}
