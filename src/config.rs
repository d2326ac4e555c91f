use std::time::Duration;
use url::Url;

pub const GITHUB_URL: &str = "https://github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the HTTP transport and the listing host.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(GITHUB_URL).expect("default base URL is valid"),
            user_agent: format!("github-stargazers/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url).map_err(|source| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL as used for page URLs, without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}
