//! The bibliographic record handed to the formatter.
//!
//! A record is a flat set of optional string fields. A field that is absent
//! and a field holding the empty string are the same thing as far as
//! formatting is concerned; any other value, including `"0"` or whitespace,
//! counts as present and is used verbatim.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CytewiseError, Result};

/// Names one field of a [`BibliographicRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Author,
    Title,
    ContainerTitle,
    OtherContributors,
    Version,
    Number,
    Publisher,
    PublicationDate,
    Location,
    DateAccessed,
    Url,
    Doi,
    Volume,
    Issue,
    Pages,
    Edition,
    Year,
    Month,
    Day,
}

impl Field {
    /// Every field, in record declaration order.
    pub const ALL: [Field; 19] = [
        Field::Author,
        Field::Title,
        Field::ContainerTitle,
        Field::OtherContributors,
        Field::Version,
        Field::Number,
        Field::Publisher,
        Field::PublicationDate,
        Field::Location,
        Field::DateAccessed,
        Field::Url,
        Field::Doi,
        Field::Volume,
        Field::Issue,
        Field::Pages,
        Field::Edition,
        Field::Year,
        Field::Month,
        Field::Day,
    ];

    /// The camelCase key used for this field in JSON.
    pub fn as_key(&self) -> &'static str {
        match self {
            Field::Author => "author",
            Field::Title => "title",
            Field::ContainerTitle => "containerTitle",
            Field::OtherContributors => "otherContributors",
            Field::Version => "version",
            Field::Number => "number",
            Field::Publisher => "publisher",
            Field::PublicationDate => "publicationDate",
            Field::Location => "location",
            Field::DateAccessed => "dateAccessed",
            Field::Url => "url",
            Field::Doi => "doi",
            Field::Volume => "volume",
            Field::Issue => "issue",
            Field::Pages => "pages",
            Field::Edition => "edition",
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
        }
    }
}

impl FromStr for Field {
    type Err = CytewiseError;

    /// Accepts the JSON key as well as kebab-case and snake_case spellings
    /// (`containerTitle`, `container-title`, `container_title`).
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Field::ALL
            .into_iter()
            .find(|field| field.as_key().to_lowercase() == wanted)
            .ok_or_else(|| CytewiseError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Descriptive fields about a single source.
///
/// Books, journal articles, films and web pages all share this one field
/// set. The record is owned by the caller and only read by the formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibliographicRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_contributors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_accessed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

impl BibliographicRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a record from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CytewiseError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parse a record from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the record as pretty-printed JSON, omitting absent fields.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Author => &self.author,
            Field::Title => &self.title,
            Field::ContainerTitle => &self.container_title,
            Field::OtherContributors => &self.other_contributors,
            Field::Version => &self.version,
            Field::Number => &self.number,
            Field::Publisher => &self.publisher,
            Field::PublicationDate => &self.publication_date,
            Field::Location => &self.location,
            Field::DateAccessed => &self.date_accessed,
            Field::Url => &self.url,
            Field::Doi => &self.doi,
            Field::Volume => &self.volume,
            Field::Issue => &self.issue,
            Field::Pages => &self.pages,
            Field::Edition => &self.edition,
            Field::Year => &self.year,
            Field::Month => &self.month,
            Field::Day => &self.day,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Author => &mut self.author,
            Field::Title => &mut self.title,
            Field::ContainerTitle => &mut self.container_title,
            Field::OtherContributors => &mut self.other_contributors,
            Field::Version => &mut self.version,
            Field::Number => &mut self.number,
            Field::Publisher => &mut self.publisher,
            Field::PublicationDate => &mut self.publication_date,
            Field::Location => &mut self.location,
            Field::DateAccessed => &mut self.date_accessed,
            Field::Url => &mut self.url,
            Field::Doi => &mut self.doi,
            Field::Volume => &mut self.volume,
            Field::Issue => &mut self.issue,
            Field::Pages => &mut self.pages,
            Field::Edition => &mut self.edition,
            Field::Year => &mut self.year,
            Field::Month => &mut self.month,
            Field::Day => &mut self.day,
        }
    }

    /// The value of `field` if it is present.
    ///
    /// Returns `None` for both an absent field and an empty string. The
    /// value is never trimmed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref().filter(|v| !v.is_empty())
    }

    /// Returns true if `field` holds a non-empty value.
    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Set a single field, replacing any previous value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Remove a single field.
    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Apply a `key=value` assignment such as `container-title=Nature`.
    ///
    /// Only the first `=` splits; the value may itself contain `=`.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<Field> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| CytewiseError::InvalidAssignment(assignment.to_string()))?;
        let field: Field = key.parse()?;
        self.set(field, value);
        Ok(field)
    }

    /// Fields that currently hold a non-empty value.
    pub fn present_fields(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| self.has(*f)).collect()
    }

    /// Returns true if no field holds a non-empty value.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| !self.has(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_absent() {
        let record = BibliographicRecord::new().with(Field::Title, "");
        assert_eq!(record.get(Field::Title), None);
        assert!(record.is_empty());
    }

    #[test]
    fn test_zero_and_whitespace_are_present() {
        let record = BibliographicRecord::new()
            .with(Field::Issue, "0")
            .with(Field::Pages, "  ");
        assert_eq!(record.get(Field::Issue), Some("0"));
        assert_eq!(record.get(Field::Pages), Some("  "));
        assert_eq!(record.present_fields(), vec![Field::Issue, Field::Pages]);
    }

    #[test]
    fn test_field_parse_spellings() {
        assert_eq!("containerTitle".parse::<Field>().unwrap(), Field::ContainerTitle);
        assert_eq!("container-title".parse::<Field>().unwrap(), Field::ContainerTitle);
        assert_eq!("date_accessed".parse::<Field>().unwrap(), Field::DateAccessed);
        assert_eq!("DOI".parse::<Field>().unwrap(), Field::Doi);
        assert!(matches!(
            "isbn".parse::<Field>(),
            Err(CytewiseError::UnknownField(_))
        ));
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_key().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_apply_assignment() {
        let mut record = BibliographicRecord::new();
        let field = record.apply_assignment("url=http://x.com/?a=b").unwrap();
        assert_eq!(field, Field::Url);
        assert_eq!(record.get(Field::Url), Some("http://x.com/?a=b"));

        assert!(matches!(
            record.apply_assignment("no-equals-sign"),
            Err(CytewiseError::InvalidAssignment(_))
        ));
    }

    #[test]
    fn test_clear() {
        let mut record = BibliographicRecord::new().with(Field::Year, "2024");
        record.clear(Field::Year);
        assert!(!record.has(Field::Year));
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let record = BibliographicRecord::new()
            .with(Field::ContainerTitle, "Nature")
            .with(Field::DateAccessed, "1 Jan 2024");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "containerTitle": "Nature",
                "dateAccessed": "1 Jan 2024",
            })
        );
    }

    #[test]
    fn test_from_json_missing_and_empty_keys() {
        let record =
            BibliographicRecord::from_json(r#"{"author": "Smith, J.", "title": ""}"#).unwrap();
        assert_eq!(record.get(Field::Author), Some("Smith, J."));
        assert!(!record.has(Field::Title));
        assert!(!record.has(Field::Url));
    }
}
