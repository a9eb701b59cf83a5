use std::{env, fmt, time::Duration};

use thiserror::Error;

use todos_core::document::DocumentPath;

/// Default key-value operation timeout in milliseconds.
pub const DEFAULT_KV_TIMEOUT_MS: u64 = 10_000;
/// Default connection timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Store configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Store host, optionally with a port.
    pub endpoint: String,
    pub username: String,
    pub password: String,
    /// Bucket name, also used for the scope and collection.
    pub bucket: String,
    /// Key-value operation timeout (default: 10s)
    pub kv_timeout: Duration,
    /// Connection establishment timeout (default: 10s)
    pub connect_timeout: Duration,
    /// Reject request bodies that are not well-formed JSON (default: false)
    pub validate_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORE_ENDPOINT` - Store host or host:port (required)
    /// - `STORE_USERNAME` - Store username (required)
    /// - `STORE_PASSWORD` - Store password (required)
    /// - `STORE_BUCKET` - Bucket name (required)
    /// - `STORE_KV_TIMEOUT_MS` - Key-value timeout in ms (default: 10000)
    /// - `STORE_CONNECT_TIMEOUT_MS` - Connect timeout in ms (default: 10000)
    /// - `STORE_VALIDATE_JSON` - Reject malformed JSON bodies (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let millis = |name: &'static str, default: u64| match lookup(name) {
            None => Ok(Duration::from_millis(default)),
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::Invalid { name, value }),
        };

        let validate_json = match lookup("STORE_VALIDATE_JSON") {
            None => false,
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "STORE_VALIDATE_JSON",
                value,
            })?,
        };

        Ok(Self {
            endpoint: required("STORE_ENDPOINT")?,
            username: required("STORE_USERNAME")?,
            password: required("STORE_PASSWORD")?,
            bucket: required("STORE_BUCKET")?,
            kv_timeout: millis("STORE_KV_TIMEOUT_MS", DEFAULT_KV_TIMEOUT_MS)?,
            connect_timeout: millis("STORE_CONNECT_TIMEOUT_MS", DEFAULT_CONNECT_TIMEOUT_MS)?,
            validate_json,
        })
    }

    /// Location of the todo list inside the configured bucket.
    pub fn document_path(&self) -> DocumentPath {
        DocumentPath::todos(&self.bucket)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("kv_timeout", &self.kv_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("validate_json", &self.validate_json)
            .finish()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("STORE_ENDPOINT", "db.example.com"),
        ("STORE_USERNAME", "todo-app"),
        ("STORE_PASSWORD", "s3cret"),
        ("STORE_BUCKET", "lists"),
    ];

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(config.endpoint, "db.example.com");
        assert_eq!(config.username, "todo-app");
        assert_eq!(config.password, "s3cret");
        assert_eq!(config.bucket, "lists");
        assert_eq!(config.kv_timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(!config.validate_json);
    }

    #[test]
    fn test_missing_variable_is_named() {
        for (missing, _) in REQUIRED {
            let vars: Vec<_> = REQUIRED
                .iter()
                .copied()
                .filter(|(k, _)| *k != missing)
                .collect();

            let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
            assert_eq!(err, ConfigError::Missing(missing));
        }
    }

    #[test]
    fn test_blank_variable_counts_as_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[3] = ("STORE_BUCKET", "  ");

        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("STORE_BUCKET"));
    }

    #[test]
    fn test_timeout_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("STORE_KV_TIMEOUT_MS", "2500"));
        vars.push(("STORE_CONNECT_TIMEOUT_MS", "500"));

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.kv_timeout, Duration::from_millis(2500));
        assert_eq!(config.connect_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_timeout() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("STORE_KV_TIMEOUT_MS", "ten seconds"));

        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "STORE_KV_TIMEOUT_MS",
                value: "ten seconds".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_json_flag() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("STORE_VALIDATE_JSON", "TRUE"));
        assert!(Config::from_lookup(lookup_from(&vars)).unwrap().validate_json);

        vars.pop();
        vars.push(("STORE_VALIDATE_JSON", "maybe"));
        assert!(Config::from_lookup(lookup_from(&vars)).is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();
        let debug = format!("{config:?}");

        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_document_path() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();
        assert_eq!(config.document_path().flat_key(), "lists:lists:lists:todos");
    }
}
