//! Cytewise: citation formatting for academic styles.
//!
//! Cytewise turns a flat [`BibliographicRecord`] into a formatted citation in
//! one of ten [`CitationStyle`]s. Formatting is a pure function of its inputs:
//! it never fails, never performs I/O, and holds no state between calls.
//!
//! # Core Principles
//!
//! - **Total**: every record and style yields a string
//! - **Elision**: absent or empty fields leave no trace in the output
//! - **Extensible**: each style is an independent [`CitationRule`]
//!
//! # Example
//!
//! ```
//! use cytewise::{generate, BibliographicRecord, CitationStyle, Field};
//!
//! let record = BibliographicRecord::new()
//!     .with(Field::Author, "Smith, J.")
//!     .with(Field::Year, "2024")
//!     .with(Field::Title, "A study")
//!     .with(Field::Doi, "10.1/xyz");
//!
//! assert_eq!(
//!     generate(&record, CitationStyle::Apa),
//!     "Smith, J. (2024). A study. https://doi.org/10.1/xyz"
//! );
//! ```

pub mod error;
pub mod formatter;
pub mod record;
pub mod style;

pub use error::{CytewiseError, Result};
pub use formatter::{generate, ApaRule, CitationRule, Formatter, MlaRule, PLACEHOLDER};
pub use record::{BibliographicRecord, Field};
pub use style::CitationStyle;
