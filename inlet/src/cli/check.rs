use inlet_core::config::{ConfigError, TlsConfigError, UnknownKeyPolicy, load_config};
use owo_colors::OwoColorize;
use std::error::Error;
use std::path::PathBuf;

pub fn check(path: PathBuf, strict: bool, json: bool) -> anyhow::Result<()> {
    let policy = if strict {
        UnknownKeyPolicy::Reject
    } else {
        UnknownKeyPolicy::Ignore
    };

    tracing::debug!(path = %path.display(), strict, "checking receiver config");

    match load_config(&path, policy) {
        Ok(config) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
                return Ok(());
            }

            println!("✔ Config loaded successfully");
            println!("✔ listening on {}", config.endpoint);
            match &config.tls {
                Some(tls) if tls.requires_client_auth() => {
                    println!("✔ TLS enabled with client certificate verification");
                }
                Some(_) => println!("✔ TLS enabled"),
                None => println!("✔ TLS disabled (plain HTTP)"),
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{}: {}", "error".red().bold(), err);

    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }

    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        //---------------------------------------------------------------------
        // Endpoint errors
        //---------------------------------------------------------------------
        ConfigError::InvalidEndpoint => Some(
            "The receiver needs a listening address.\n\
             \n\
             Example:\n\
             \n\
             endpoint: \"0.0.0.0:4318\"",
        ),

        //---------------------------------------------------------------------
        // TLS errors
        //---------------------------------------------------------------------
        ConfigError::InvalidTls {
            source: TlsConfigError::IncompleteCertPair,
        } => Some(
            "TLS needs both a certificate and its private key.\n\
             \n\
             Example:\n\
             \n\
             tls:\n\
               cert_file: server.pem\n\
               key_file: server.key",
        ),

        ConfigError::InvalidTls {
            source: TlsConfigError::UnsupportedTlsVersion { .. },
        } => Some(
            "Supported minimum TLS versions are \"1.2\" and \"1.3\".\n\
             \n\
             Remove `min_version` to use the library default.",
        ),

        //---------------------------------------------------------------------
        // Structure errors
        //---------------------------------------------------------------------
        ConfigError::UnknownKey { .. } => Some(
            "Remove the key, fix the spelling, or run without --strict to ignore it.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
