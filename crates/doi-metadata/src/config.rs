//! Configuration for the DOI metadata service.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenAlex API.
    pub const OPENALEX_API: &str = "https://api.openalex.org";

    /// Resolver prefix that turns a bare DOI into an OpenAlex work ID.
    pub const DOI_RESOLVER: &str = "https://doi.org/";

    /// Request timeout for a single work lookup.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// User agent sent with every upstream request.
    pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the OpenAlex API (overridable for mock servers and mirrors).
    pub openalex_api_url: String,

    /// Contact address for the OpenAlex polite pool (optional).
    pub mailto: Option<String>,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration pointing at the public OpenAlex API.
    #[must_use]
    pub fn new(mailto: Option<String>) -> Self {
        Self {
            openalex_api_url: api::OPENALEX_API.to_string(),
            mailto,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with a custom URL for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            openalex_api_url: base_url.trim_end_matches('/').to_string(),
            mailto: None,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Replace the API base URL after checking that it parses.
    ///
    /// # Errors
    ///
    /// Returns error if `base_url` is not an absolute http(s) URL.
    pub fn with_api_url(mut self, base_url: &str) -> anyhow::Result<Self> {
        let parsed = url::Url::parse(base_url)
            .with_context(|| format!("invalid OpenAlex API URL: {base_url}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("OpenAlex API URL must use http or https: {base_url}");
        }
        self.openalex_api_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `OPENALEX_API_URL`, `OPENALEX_MAILTO` and `OPENALEX_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let mailto = std::env::var("OPENALEX_MAILTO").ok().filter(|m| !m.trim().is_empty());
        let mut config = Self::new(mailto);

        if let Ok(base_url) = std::env::var("OPENALEX_API_URL") {
            config = config.with_api_url(&base_url)?;
        }

        if let Ok(secs) = std::env::var("OPENALEX_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("OPENALEX_TIMEOUT_SECS must be an integer, got {secs:?}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Full URL of the works endpoint.
    #[must_use]
    pub fn works_url(&self) -> String {
        format!("{}/works", self.openalex_api_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
