use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::{lexical, markup};

pub const ENTRY_BASE_URL: &str = "https://noid.dsn.dk/ordbog/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFields {
    /// Year the word is first attested
    #[serde(default, deserialize_with = "lax_year")]
    pub chronology: Option<i32>,
    /// Word class label, e.g. `sb.` or `vb.`
    #[serde(default)]
    pub word_class: Option<String>,
}

/// One NOID headword as returned by the search index.
///
/// Deserializes from a search hit, `{"_source": {...}}`. Equality compares
/// every field; deduplication goes through [`EntryRecord::noid`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawHit")]
pub struct EntryRecord {
    fields: SourceFields,
    title_headword: String,
    headword_id: String,
    html_list: String,
}

#[derive(Deserialize)]
struct RawHit {
    #[serde(rename = "_source", alias = "source")]
    source: RawSource,
}

#[derive(Deserialize)]
struct RawSource {
    #[serde(default)]
    fields: SourceFields,
    title_headword: String,
    headword_id: String,
    #[serde(default)]
    html_list: String,
}

impl From<RawHit> for EntryRecord {
    fn from(hit: RawHit) -> Self {
        let RawSource {
            fields,
            title_headword,
            headword_id,
            html_list,
        } = hit.source;

        Self {
            fields,
            title_headword,
            headword_id,
            html_list,
        }
    }
}

impl EntryRecord {
    pub fn new(
        headword_id: impl Into<String>,
        title_headword: impl Into<String>,
        fields: SourceFields,
        html_list: impl Into<String>,
    ) -> Self {
        Self {
            fields,
            title_headword: title_headword.into(),
            headword_id: headword_id.into(),
            html_list: html_list.into(),
        }
    }

    /// Validate a single raw hit
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Stable identifier, also the deduplication key
    pub fn noid(&self) -> &str {
        &self.headword_id
    }

    pub fn lemma(&self) -> &str {
        &self.title_headword
    }

    pub fn year(&self) -> Option<i32> {
        self.fields.chronology
    }

    pub fn word_class(&self) -> Option<&str> {
        self.fields.word_class.as_deref()
    }

    /// Dictionary page for this entry
    pub fn url(&self) -> String {
        format!("{ENTRY_BASE_URL}{}/", urlencoding::encode(self.noid()))
    }

    /// Plain text of the first definition in the entry markup
    pub fn definition(&self) -> String {
        markup::definition(&self.html_list)
    }

    pub fn lexical_category(&self) -> &'static str {
        lexical::lexical_category(self.word_class())
    }
}

/// Accepts years as integers, whole floats or numeric strings
fn lax_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<RawYear>::deserialize(deserializer)?;
    let year = match raw {
        None => return Ok(None),
        Some(RawYear::Int(n)) => i32::try_from(n).ok(),
        Some(RawYear::Float(f)) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => {
            Some(f as i32)
        }
        Some(RawYear::Float(_)) => None,
        Some(RawYear::Text(s)) => s.trim().parse::<i32>().ok(),
    };

    year.map(Some)
        .ok_or_else(|| D::Error::custom("chronology is not a valid integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "_source": {
                "fields": {"chronology": 1957},
                "title_headword": "a-",
                "headword_id": "a"
            }
        })
    }

    #[test]
    fn test_projections() {
        let entry = EntryRecord::from_value(sample()).unwrap();
        assert_eq!(entry.lemma(), "a-");
        assert_eq!(entry.noid(), "a");
        assert_eq!(entry.year(), Some(1957));
        assert_eq!(entry.url(), "https://noid.dsn.dk/ordbog/a/");
        assert_eq!(entry.definition(), "");
        assert_eq!(entry.lexical_category(), "");
    }

    #[test]
    fn test_url_is_percent_encoded() {
        let entry = EntryRecord::new("grøn omstilling", "grøn omstilling", SourceFields::default(), "");
        assert_eq!(
            entry.url(),
            "https://noid.dsn.dk/ordbog/gr%C3%B8n%20omstilling/"
        );
    }

    #[test]
    fn test_full_record() {
        let entry = EntryRecord::from_value(json!({
            "_source": {
                "fields": {"chronology": 2012, "word_class": "vb."},
                "title_headword": "google",
                "headword_id": "google-1",
                "html_list": "<div><span class=\"defpar\">søge på internettet</span></div>"
            }
        }))
        .unwrap();

        assert_eq!(entry.word_class(), Some("vb."));
        assert_eq!(entry.lexical_category(), "Q24905");
        assert_eq!(entry.definition(), "søge på internettet");
    }

    #[test]
    fn test_source_alias_and_missing_fields() {
        let entry = EntryRecord::from_value(json!({
            "source": {"title_headword": "x", "headword_id": "x"}
        }))
        .unwrap();
        assert_eq!(entry.year(), None);
        assert_eq!(entry.word_class(), None);
    }

    #[test]
    fn test_lax_chronology() {
        for raw in [json!("1999"), json!(1999.0), json!(1999)] {
            let entry = EntryRecord::from_value(json!({
                "_source": {"fields": {"chronology": raw}, "title_headword": "y", "headword_id": "y"}
            }))
            .unwrap();
            assert_eq!(entry.year(), Some(1999));
        }

        let entry = EntryRecord::from_value(json!({
            "_source": {"fields": {"chronology": null}, "title_headword": "y", "headword_id": "y"}
        }))
        .unwrap();
        assert_eq!(entry.year(), None);
    }

    #[test]
    fn test_invalid_chronology() {
        for raw in [json!("not-an-int"), json!(19.5), json!([1957])] {
            let result = EntryRecord::from_value(json!({
                "_source": {"fields": {"chronology": raw}, "title_headword": "y", "headword_id": "y"}
            }));
            assert!(matches!(result, Err(ValidationError::Json(_))));
        }
    }

    #[test]
    fn test_missing_headword() {
        let result = EntryRecord::from_value(json!({
            "_source": {"fields": {}, "headword_id": "y"}
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("title_headword"), "{err}");
    }

    #[test]
    fn test_equality_is_structural() {
        let a = EntryRecord::new("a", "a-", SourceFields::default(), "");
        let b = EntryRecord::new("a", "a--", SourceFields::default(), "");
        assert_ne!(a, b);
        assert_eq!(a.noid(), b.noid());
        assert_eq!(a, a.clone());
    }
}
