//! Generate command - format a citation from record fields.

use colored::Colorize;
use cytewise::{BibliographicRecord, Field, Formatter};

use crate::cli::GenerateArgs;

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let record = build_record(&args)?;
    tracing::debug!(
        style = %args.style,
        fields = ?record.present_fields(),
        "formatting record"
    );

    let formatter = Formatter::new();
    if !formatter.supports(args.style) {
        tracing::info!(style = %args.style, "style has no rules yet");
    }
    let citation = formatter.generate(&record, args.style);

    if args.json {
        let output = serde_json::json!({
            "citation": citation,
            "style": args.style.name(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if citation.is_empty() {
        eprintln!("{}", "No citation: none of the style's fields are set.".dimmed());
    } else {
        println!("{}", citation);
    }

    Ok(())
}

/// Assemble the record: file first, then `--field` assignments, then the
/// per-field shorthands. Later sources win.
fn build_record(args: &GenerateArgs) -> cytewise::Result<BibliographicRecord> {
    let mut record = match &args.file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading record");
            BibliographicRecord::load(path)?
        }
        None => BibliographicRecord::new(),
    };

    for assignment in &args.fields {
        let field = record.apply_assignment(assignment)?;
        tracing::trace!(%field, "field set from --field");
    }

    let shorthands = [
        (Field::Author, &args.author),
        (Field::Title, &args.title),
        (Field::Year, &args.year),
        (Field::Url, &args.url),
        (Field::Doi, &args.doi),
    ];
    for (field, value) in shorthands {
        if let Some(value) = value {
            record.set(field, value.as_str());
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cytewise::{CitationStyle, CytewiseError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args() -> GenerateArgs {
        GenerateArgs {
            file: None,
            style: CitationStyle::Mla,
            fields: Vec::new(),
            author: None,
            title: None,
            year: None,
            url: None,
            doi: None,
            json: false,
        }
    }

    #[test]
    fn test_shorthands_and_assignments() {
        let mut args = args();
        args.fields = vec!["container-title=Nature".into(), "volume=5".into()];
        args.author = Some("Smith, J.".into());

        let record = build_record(&args).unwrap();
        assert_eq!(record.get(Field::ContainerTitle), Some("Nature"));
        assert_eq!(record.get(Field::Volume), Some("5"));
        assert_eq!(record.get(Field::Author), Some("Smith, J."));
    }

    #[test]
    fn test_shorthand_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"title": "From file", "year": "2020"}"#)
            .unwrap();

        let mut args = args();
        args.file = Some(file.path().to_path_buf());
        args.title = Some("From flag".into());

        let record = build_record(&args).unwrap();
        assert_eq!(record.get(Field::Title), Some("From flag"));
        assert_eq!(record.get(Field::Year), Some("2020"));
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let mut args = args();
        args.fields = vec!["isbn=123".into()];
        assert!(matches!(
            build_record(&args),
            Err(CytewiseError::UnknownField(_))
        ));
    }
}
