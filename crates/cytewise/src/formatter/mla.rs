//! MLA rules.

use crate::record::{BibliographicRecord, Field};
use crate::style::CitationStyle;

use super::rule::{CitationRule, Fragments};

/// Stands in for the access date on web sources that lack one.
pub const MISSING_ACCESS_DATE: &str = "Date";

/// Modern Language Association style.
///
/// Core elements run author, title, container, other contributors, version,
/// number, publisher, publication date and location. A URL adds a trailing
/// `Web. <access date>. <url>.` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct MlaRule;

impl CitationRule for MlaRule {
    fn style(&self) -> CitationStyle {
        CitationStyle::Mla
    }

    fn format(&self, record: &BibliographicRecord) -> String {
        let mut out = Fragments::new();

        out.field(record, Field::Author, close_sentence)
            .field(record, Field::Title, |v| format!("\"{v}.\""))
            .field(record, Field::ContainerTitle, |v| format!("{v},"))
            .field(record, Field::OtherContributors, |v| format!("{v},"))
            .field(record, Field::Version, |v| format!("{v},"))
            .field(record, Field::Number, |v| format!("{v},"))
            .field(record, Field::Publisher, |v| format!("{v},"))
            .field(record, Field::PublicationDate, |v| format!("{v},"))
            .field(record, Field::Location, |v| format!("{v}."));

        if let Some(url) = record.get(Field::Url) {
            let accessed = record
                .get(Field::DateAccessed)
                .unwrap_or(MISSING_ACCESS_DATE);
            out.push(format!("Web. {accessed}. <{url}>."));
        }

        out.join()
    }
}

/// End an element with a period unless it already ends with one, as
/// abbreviated names like `Smith, J.` do.
fn close_sentence(value: &str) -> String {
    if value.ends_with('.') {
        value.to_string()
    } else {
        format!("{value}.")
    }
}
