//! Fuzz target for the citation formatter.
//!
//! This fuzzer tests that formatting:
//! 1. Never panics on any field values
//! 2. Always returns the placeholder for styles without a rule
//! 3. Gives the same answer twice

#![no_main]

use arbitrary::Arbitrary;
use cytewise::{BibliographicRecord, CitationStyle, Field, Formatter, PLACEHOLDER};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<Option<String>>,
    style: u8,
}

fuzz_target!(|input: Input| {
    let mut record = BibliographicRecord::new();
    for (field, value) in Field::ALL.into_iter().zip(input.values) {
        if let Some(value) = value {
            record.set(field, value);
        }
    }

    let style = CitationStyle::ALL[input.style as usize % CitationStyle::ALL.len()];
    let formatter = Formatter::new();

    let first = formatter.generate(&record, style);
    if !formatter.supports(style) {
        assert_eq!(first, PLACEHOLDER);
    }
    assert_eq!(first, formatter.generate(&record, style));
});
