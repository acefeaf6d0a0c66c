//! OpenAlex API client.
//!
//! One GET per DOI against `/works/{resolver url}`:
//! - `fetch_work` is strict and returns every failure as a [`ClientError`]
//! - `fetch_single` logs failures and skips the DOI
//! - `fetch_batch` runs `fetch_single` over a list, one lookup at a time

use reqwest::Client;
use url::Url;

use crate::config::{Config, api};
use crate::doi;
use crate::error::{ClientError, ClientResult};
use crate::models::{MetadataRecord, Work};

/// OpenAlex API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// HTTP client.
    client: Client,

    /// Works endpoint URL.
    works_url: String,

    /// Polite pool contact address (optional).
    mailto: Option<String>,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, works_url: config.works_url(), mailto: config.mailto.clone() })
    }

    /// Check if a polite pool contact address is configured.
    #[must_use]
    pub fn has_mailto(&self) -> bool {
        self.mailto.is_some()
    }

    /// Build the lookup URL for a DOI.
    ///
    /// # Errors
    ///
    /// Returns error if the configured base URL cannot be parsed.
    pub fn work_url(&self, doi: &str) -> ClientResult<Url> {
        let work_id = doi::escape_path_segment(&doi::resolver_url(doi));
        let mut url = Url::parse(&format!("{}/{}", self.works_url, work_id))?;

        if let Some(ref mailto) = self.mailto {
            url.query_pairs_mut().append_pair("mailto", mailto);
        }

        Ok(url)
    }

    /// Look up a single work by DOI.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, or a body that is
    /// not a JSON object.
    pub async fn fetch_work(&self, doi: &str) -> ClientResult<Work> {
        let url = self.work_url(doi)?;
        tracing::debug!(doi = %doi, url = %url, "Fetching work");

        let response = self.client.get(url).send().await?;
        let response = Self::handle_response(response, doi).await?;

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        if !value.is_object() {
            return Err(ClientError::InvalidResponse(format!(
                "expected a work object for {doi}"
            )));
        }

        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Look up a single DOI, logging and swallowing any failure.
    pub async fn fetch_single(&self, doi: &str) -> Option<MetadataRecord> {
        match self.fetch_work(doi).await {
            Ok(work) => Some(MetadataRecord::from(work)),
            Err(e) => {
                tracing::warn!(doi = %doi, error = %e, "Error fetching work, skipping");
                None
            }
        }
    }

    /// Look up every DOI in order; failed lookups are left out.
    pub async fn fetch_batch(&self, dois: &[String]) -> Vec<MetadataRecord> {
        let mut records = Vec::with_capacity(dois.len());

        for doi in dois {
            if let Some(record) = self.fetch_single(doi).await {
                records.push(record);
            }
        }

        tracing::info!(requested = dois.len(), resolved = records.len(), "Fetched metadata batch");
        records
    }

    /// Map non-2xx statuses to errors.
    async fn handle_response(
        response: reqwest::Response,
        doi: &str,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            404 => Err(ClientError::not_found(doi::resolver_url(doi))),
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient")
            .field("works_url", &self.works_url)
            .field("has_mailto", &self.has_mailto())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_url_escapes_resolver_url() {
        let client = OpenAlexClient::new(&Config::for_testing("http://localhost:8080")).unwrap();
        let url = client.work_url("10.7717/peerj.4375").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/works/https%3A%2F%2Fdoi.org%2F10.7717%2Fpeerj.4375"
        );
    }

    #[test]
    fn test_work_url_appends_mailto() {
        let mut config = Config::for_testing("http://localhost:8080");
        config.mailto = Some("lab@example.org".to_string());
        let client = OpenAlexClient::new(&config).unwrap();

        let url = client.work_url("https://doi.org/10.1000/xyz").unwrap();
        assert_eq!(url.path(), "/works/https%3A%2F%2Fdoi.org%2F10.1000%2Fxyz");
        assert_eq!(url.query(), Some("mailto=lab%40example.org"));
    }

    #[test]
    fn test_debug_output() {
        let client = OpenAlexClient::new(&Config::default()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("api.openalex.org/works"));
        assert!(debug.contains("has_mailto"));
    }
}
