//! Property-based tests for the citation formatter.
//!
//! Properties checked:
//! 1. **Totality**: no record or style panics
//! 2. **Determinism**: same input always produces same output
//! 3. **Order independence**: field entry order never changes the output
//! 4. **Placeholder invariance**: unimplemented styles ignore the record
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p cytewise --test property_tests
//! ```

use proptest::prelude::*;

use cytewise::{generate, BibliographicRecord, CitationStyle, Field, Formatter, PLACEHOLDER};

// =============================================================================
// Test Strategies
// =============================================================================

/// Field values: mostly ordinary text, sometimes empty.
fn field_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[A-Za-z0-9][A-Za-z0-9,.:/()\\-]{0,30}",
    ]
}

/// Arbitrary values, including whitespace and punctuation.
fn any_value() -> impl Strategy<Value = String> {
    ".{0,40}"
}

fn any_style() -> impl Strategy<Value = CitationStyle> {
    prop::sample::select(CitationStyle::ALL.to_vec())
}

fn assignments(values: impl Strategy<Value = String>) -> impl Strategy<Value = Vec<(Field, String)>> {
    prop::collection::vec(values, Field::ALL.len()).prop_map(|values| {
        Field::ALL.into_iter().zip(values).collect()
    })
}

fn build(assignments: &[(Field, String)]) -> BibliographicRecord {
    let mut record = BibliographicRecord::new();
    for (field, value) in assignments {
        record.set(*field, value.clone());
    }
    record
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn generate_never_panics(fields in assignments(any_value()), style in any_style()) {
        let record = build(&fields);
        let _ = generate(&record, style);
    }

    #[test]
    fn generate_is_deterministic(fields in assignments(any_value()), style in any_style()) {
        let record = build(&fields);
        let formatter = Formatter::new();
        prop_assert_eq!(formatter.generate(&record, style), formatter.generate(&record, style));
    }

    #[test]
    fn entry_order_is_irrelevant(
        fields in assignments(any_value()),
        order in Just((0..Field::ALL.len()).collect::<Vec<_>>()).prop_shuffle(),
        style in any_style(),
    ) {
        let shuffled: Vec<_> = order.iter().map(|&i| fields[i].clone()).collect();
        prop_assert_eq!(
            generate(&build(&fields), style),
            generate(&build(&shuffled), style)
        );
    }

    #[test]
    fn unimplemented_styles_return_placeholder(
        fields in assignments(any_value()),
        style in any_style(),
    ) {
        let formatter = Formatter::new();
        prop_assume!(!formatter.supports(style));
        prop_assert_eq!(formatter.generate(&build(&fields), style), PLACEHOLDER);
    }

    #[test]
    fn implemented_output_has_no_double_spaces(
        fields in assignments(field_value()),
        style in prop_oneof![Just(CitationStyle::Apa), Just(CitationStyle::Mla)],
    ) {
        let citation = generate(&build(&fields), style);
        prop_assert!(!citation.contains("  "), "double space in {:?}", citation);
        prop_assert_eq!(citation.trim(), citation.as_str());
    }

    #[test]
    fn empty_values_match_absent_fields(
        fields in assignments(field_value()),
        style in any_style(),
    ) {
        let sparse: Vec<_> = fields.iter().filter(|(_, v)| !v.is_empty()).cloned().collect();
        prop_assert_eq!(generate(&build(&fields), style), generate(&build(&sparse), style));
    }
}
