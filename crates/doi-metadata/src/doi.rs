//! DOI normalization and extraction.
//!
//! OpenAlex accepts a full resolver URL (`https://doi.org/10.x/y`) as a work
//! ID, so every DOI is turned into one before lookup.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::api::DOI_RESOLVER;

/// Matches a DOI with an optional resolver or `doi:` prefix; group 1 is the bare DOI.
static DOI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://(?:dx\.)?doi\.org/|doi:)?(10\.\d{4,9}/[-_.;()/:a-zA-Z0-9]+)")
        .expect("valid DOI regex")
});

/// Characters that separate DOIs in pasted text.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\s]+").expect("valid separator regex"));

/// Turn a DOI into its resolver URL, leaving already-prefixed input alone.
#[must_use]
pub fn resolver_url(doi: &str) -> String {
    let doi = doi.trim();
    if doi.starts_with(DOI_RESOLVER) {
        doi.to_string()
    } else {
        format!("{DOI_RESOLVER}{doi}")
    }
}

/// Percent-encode a resolver URL so it fits in a single path segment.
#[must_use]
pub fn escape_path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Pull every DOI out of free text.
///
/// Tokens are split on commas, semicolons and whitespace, percent-decoded,
/// and stripped of `https://doi.org/`, `https://dx.doi.org/` and `doi:`
/// prefixes. Duplicates are dropped, first occurrence wins.
#[must_use]
pub fn extract_dois(text: &str) -> Vec<String> {
    let mut dois: Vec<String> = Vec::new();

    for token in SEPARATORS.split(text).filter(|t| !t.is_empty()) {
        let decoded = urlencoding::decode(token).map_or_else(|_| token.to_string(), |d| d.into_owned());

        let Some(caps) = DOI_PATTERN.captures(&decoded) else {
            continue;
        };
        let doi = trim_trailing_punctuation(&caps[1]);
        if !has_suffix(doi) {
            continue;
        }

        if !dois.iter().any(|seen| seen == doi) {
            dois.push(doi.to_string());
        }
    }

    dois
}

/// Strip sentence punctuation and unbalanced closing parentheses from the end of a match.
fn trim_trailing_punctuation(doi: &str) -> &str {
    let mut doi = doi;
    loop {
        let trimmed = match doi.chars().last() {
            Some('.' | ',' | ';' | ':') => &doi[..doi.len() - 1],
            Some(')') if doi.matches(')').count() > doi.matches('(').count() => {
                &doi[..doi.len() - 1]
            }
            _ => return doi,
        };
        doi = trimmed;
    }
}

/// A DOI needs something after the registrant slash.
fn has_suffix(doi: &str) -> bool {
    doi.split_once('/').is_some_and(|(_, suffix)| !suffix.is_empty())
}
