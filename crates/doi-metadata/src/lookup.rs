//! One-shot lookup of DOIs pasted as free text, used by the `lookup` command.

use crate::client::OpenAlexClient;
use crate::config::Config;
use crate::doi;
use crate::models::PapersResponse;

/// Message returned when the input holds nothing DOI-shaped.
pub const NO_DOIS_FOUND: &str = "no DOIs found in input";

/// Extract DOIs from `text` and resolve them in order.
///
/// # Errors
///
/// Returns error if `text` contains no DOI or the HTTP client cannot be built.
/// Individual lookup failures are skipped, not returned.
pub async fn lookup_text(config: &Config, text: &str) -> anyhow::Result<PapersResponse> {
    let dois = doi::extract_dois(text);
    if dois.is_empty() {
        anyhow::bail!(NO_DOIS_FOUND);
    }

    tracing::debug!(count = dois.len(), "Extracted DOIs from input");

    let client = OpenAlexClient::new(config)?;
    let papers = client.fetch_batch(&dois).await;

    Ok(PapersResponse { papers })
}
