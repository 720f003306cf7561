//! Fuzz target for record JSON parsing.
//!
//! Malformed input must surface as an error, never a panic.

#![no_main]

use cytewise::{generate, BibliographicRecord, CitationStyle};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    let input = String::from_utf8_lossy(data);
    if let Ok(record) = BibliographicRecord::from_json(&input) {
        for style in CitationStyle::ALL {
            let _ = generate(&record, style);
        }
    }
});
