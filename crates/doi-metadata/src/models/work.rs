//! OpenAlex work model, restricted to the fields the service consumes.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Deserialize a field, treating any value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// A scholarly work from OpenAlex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Work {
    /// Work title.
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    /// Plain-text abstract, when the upstream provides one.
    #[serde(default, deserialize_with = "lenient")]
    pub r#abstract: Option<String>,

    /// Abstract as a word -> positions map.
    #[serde(default, deserialize_with = "lenient")]
    pub abstract_inverted_index: Option<BTreeMap<String, Vec<usize>>>,

    /// Author list in byline order.
    #[serde(default, deserialize_with = "lenient")]
    pub authorships: Option<Vec<Authorship>>,

    /// Publication year.
    #[serde(default, deserialize_with = "lenient")]
    pub publication_year: Option<i32>,

    /// Where the work was primarily published.
    #[serde(default, deserialize_with = "lenient")]
    pub primary_location: Option<Location>,
}

/// One entry of a work's byline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<DehydratedEntity>,
}

/// Publication location of a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<DehydratedEntity>,
}

/// Minimal author or source reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DehydratedEntity {
    #[serde(default, deserialize_with = "lenient")]
    pub display_name: Option<String>,
}

impl Work {
    /// Abstract text, rebuilt from the inverted index when no plain abstract exists.
    #[must_use]
    pub fn abstract_text(&self) -> String {
        if let Some(text) = &self.r#abstract {
            return text.clone();
        }

        let Some(index) = &self.abstract_inverted_index else {
            return String::new();
        };

        let mut positioned: Vec<(usize, &str)> = index
            .iter()
            .flat_map(|(word, positions)| positions.iter().map(move |&pos| (pos, word.as_str())))
            .collect();
        positioned.sort_unstable();

        positioned.into_iter().map(|(_, word)| word).collect::<Vec<_>>().join(" ")
    }

    /// Author display names in byline order; entries without a name are skipped.
    #[must_use]
    pub fn author_names(&self) -> Vec<String> {
        self.authorships
            .iter()
            .flatten()
            .filter_map(|a| a.author.as_ref()?.display_name.clone())
            .collect()
    }

    /// Display name of the primary publication venue.
    #[must_use]
    pub fn journal(&self) -> Option<&str> {
        self.primary_location.as_ref()?.source.as_ref()?.display_name.as_deref()
    }
}
