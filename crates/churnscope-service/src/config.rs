//! Service configuration.

use std::path::PathBuf;

/// Dashboard development origins allowed by default.
pub const DEFAULT_CORS_ORIGINS: [&str; 6] = [
    "http://localhost:5173",
    "http://localhost:5174",
    "http://localhost:5175",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:5174",
    "http://127.0.0.1:5175",
];

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:5000").
    pub listen_addr: String,

    /// Path to the customer CSV (default: `final_data.csv`).
    pub data_path: PathBuf,

    /// CSV field delimiter (default: `,`).
    pub csv_delimiter: u8,

    /// CORS allowed origins. `*` allows any origin.
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Maximum number of in-flight requests per route.
    pub max_concurrent_requests: usize,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to
    /// defaults for absent or unparseable values.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            data_path: lookup("DATA_PATH").map_or(defaults.data_path, PathBuf::from),
            csv_delimiter: lookup("CSV_DELIMITER")
                .and_then(|s| parse_delimiter(&s))
                .unwrap_or(defaults.csv_delimiter),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
            max_concurrent_requests: lookup("MAX_CONCURRENT_REQUESTS")
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_concurrent_requests),
        }
    }
}

/// Accept a single ASCII character, or `\t` / `tab` for tabs.
fn parse_delimiter(value: &str) -> Option<u8> {
    match value {
        "\\t" | "tab" => Some(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Some(*byte),
            _ => None,
        },
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".into(),
            data_path: PathBuf::from("final_data.csv"),
            csv_delimiter: b',',
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| (*o).to_string()).collect(),
            request_timeout_seconds: 30,
            max_concurrent_requests: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[]));
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.data_path, PathBuf::from("final_data.csv"));
        assert_eq!(config.csv_delimiter, b',');
        assert_eq!(config.cors_origins.len(), 6);
        assert!(!config.cors_origins.iter().any(|o| o == "*"));
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn reads_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("DATA_PATH", "/srv/data/customers.csv"),
            ("CSV_DELIMITER", "tab"),
            ("CORS_ORIGINS", "https://dash.example.com, http://localhost:3000"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("MAX_CONCURRENT_REQUESTS", "8"),
        ]));
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.data_path, PathBuf::from("/srv/data/customers.csv"));
        assert_eq!(config.csv_delimiter, b'\t');
        assert_eq!(
            config.cors_origins,
            vec!["https://dash.example.com", "http://localhost:3000"]
        );
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.max_concurrent_requests, 8);
    }

    #[test]
    fn unparseable_values_fall_back() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("CSV_DELIMITER", ";;"),
            ("REQUEST_TIMEOUT_SECONDS", "soon"),
            ("MAX_CONCURRENT_REQUESTS", "0"),
        ]));
        assert_eq!(config.csv_delimiter, b',');
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.max_concurrent_requests, 64);
    }

    #[test]
    fn single_character_delimiter() {
        assert_eq!(parse_delimiter(";"), Some(b';'));
        assert_eq!(parse_delimiter("|"), Some(b'|'));
        assert_eq!(parse_delimiter(""), None);
    }
}
