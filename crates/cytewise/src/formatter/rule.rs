//! The per-style rule trait and the fragment builder rules share.

use crate::record::{BibliographicRecord, Field};
use crate::style::CitationStyle;

/// Formatting rules for one citation style.
///
/// A rule reads the record and returns the finished citation. It must be
/// total: every record, including an empty one, yields a string.
pub trait CitationRule: Send + Sync {
    /// The style this rule formats.
    fn style(&self) -> CitationStyle;

    /// Format a record according to this style.
    fn format(&self, record: &BibliographicRecord) -> String;
}

/// Ordered output pieces, each contributed by one field or field group.
///
/// Pieces are joined with a single space. Absent fields never leave a slot
/// behind, so there is no doubled spacing.
#[derive(Debug, Default)]
pub struct Fragments {
    parts: Vec<String>,
}

impl Fragments {
    /// Start with no fragments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `render(value)` if `field` is present in the record.
    pub fn field<F>(&mut self, record: &BibliographicRecord, field: Field, render: F) -> &mut Self
    where
        F: FnOnce(&str) -> String,
    {
        if let Some(value) = record.get(field) {
            self.parts.push(render(value));
        }
        self
    }

    /// Push an already rendered piece.
    pub fn push(&mut self, fragment: String) -> &mut Self {
        self.parts.push(fragment);
        self
    }

    /// Returns true if no field has contributed yet.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The finished citation; empty when nothing was pushed.
    pub fn join(&self) -> String {
        self.parts.join(" ")
    }
}
