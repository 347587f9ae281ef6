use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration of the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash
    pub api_url: String,
    pub request_timeout: Duration,
    /// File backing the session storage; `None` keeps the session in memory
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: None,
        }
    }

    /// Read configuration from the environment, falling back to defaults
    ///
    /// * `RECEIVABLES_API_URL` - backend base URL
    /// * `RECEIVABLES_HTTP_TIMEOUT_SECS` - request timeout in seconds
    /// * `RECEIVABLES_SESSION_FILE` - path of the persistent session file
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("RECEIVABLES_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_secs = lookup("RECEIVABLES_HTTP_TIMEOUT_SECS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let session_file = lookup("RECEIVABLES_SESSION_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            request_timeout: Duration::from_secs(timeout_secs),
            session_file,
            ..Self::new(api_url)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("RECEIVABLES_API_URL", "https://api.example.test/"),
            ("RECEIVABLES_HTTP_TIMEOUT_SECS", "5"),
            ("RECEIVABLES_SESSION_FILE", "/tmp/session.json"),
        ]);
        let config = ClientConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_url, "https://api.example.test");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.session_file, Some(PathBuf::from("/tmp/session.json")));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = ClientConfig::from_lookup(|name| {
            (name == "RECEIVABLES_HTTP_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
