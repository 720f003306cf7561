//! APA rules.

use crate::record::{BibliographicRecord, Field};
use crate::style::CitationStyle;

use super::rule::{CitationRule, Fragments};

/// Resolver prefix for DOI links.
pub const DOI_RESOLVER: &str = "https://doi.org/";

/// American Psychological Association style.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApaRule;

impl CitationRule for ApaRule {
    fn style(&self) -> CitationStyle {
        CitationStyle::Apa
    }

    fn format(&self, record: &BibliographicRecord) -> String {
        let mut out = Fragments::new();

        out.field(record, Field::Author, str::to_string)
            .field(record, Field::Year, |v| format!("({v})."))
            .field(record, Field::Title, |v| format!("{v}."))
            .field(record, Field::ContainerTitle, |v| format!("{v},"));

        // An issue number only means something next to a volume.
        if let Some(volume) = record.get(Field::Volume) {
            let fragment = match record.get(Field::Issue) {
                Some(issue) => format!("{volume}({issue}),"),
                None => format!("{volume},"),
            };
            out.push(fragment);
        }

        out.field(record, Field::Pages, |v| format!("{v}."));

        if let Some(doi) = record.get(Field::Doi) {
            out.push(format!("{DOI_RESOLVER}{doi}"));
        } else if let Some(url) = record.get(Field::Url) {
            out.push(url.to_string());
        }

        out.join()
    }
}
