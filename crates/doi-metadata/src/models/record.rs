//! Normalized output record and request/response bodies.

use serde::{Deserialize, Serialize};

use super::Work;

/// Bibliographic metadata for one resolved DOI.
///
/// Every field is always present; anything the upstream omits falls back
/// to an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub title: String,
    pub r#abstract: String,
    pub authors: Vec<String>,
    pub year: i32,
    pub journal: String,
}

impl From<Work> for MetadataRecord {
    fn from(work: Work) -> Self {
        Self {
            r#abstract: work.abstract_text(),
            authors: work.author_names(),
            year: work.publication_year.unwrap_or(0),
            journal: work.journal().unwrap_or_default().to_string(),
            title: work.title.unwrap_or_default(),
        }
    }
}

/// Body of a metadata request.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchRequest {
    pub dois: Vec<String>,
}

/// Body of a successful metadata response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PapersResponse {
    pub papers: Vec<MetadataRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_defaults_for_empty_work() {
        let record = MetadataRecord::from(Work::default());
        assert_eq!(record, MetadataRecord::default());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"title": "", "abstract": "", "authors": [], "year": 0, "journal": ""})
        );
    }

    #[test]
    fn test_record_from_full_work() {
        let work: Work = serde_json::from_value(json!({
            "title": "The state of OA",
            "abstract": "Open access is growing.",
            "authorships": [{"author": {"display_name": "Heather Piwowar"}}],
            "publication_year": 2018,
            "primary_location": {"source": {"display_name": "PeerJ"}}
        }))
        .unwrap();

        let record = MetadataRecord::from(work);
        assert_eq!(record.title, "The state of OA");
        assert_eq!(record.r#abstract, "Open access is growing.");
        assert_eq!(record.authors, vec!["Heather Piwowar"]);
        assert_eq!(record.year, 2018);
        assert_eq!(record.journal, "PeerJ");
    }

    #[test]
    fn test_fetch_request_requires_string_array() {
        assert!(serde_json::from_value::<FetchRequest>(json!({"dois": ["10.1/a"]})).is_ok());
        assert!(serde_json::from_value::<FetchRequest>(json!({"dois": "10.1/a"})).is_err());
        assert!(serde_json::from_value::<FetchRequest>(json!({"dois": [1, 2]})).is_err());
        assert!(serde_json::from_value::<FetchRequest>(json!({})).is_err());
        assert!(serde_json::from_value::<FetchRequest>(json!(["10.1/a"])).is_err());
    }
}
