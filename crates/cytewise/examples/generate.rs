//! Format a record file in every style.
//!
//! ```bash
//! cargo run --example generate -- record.json
//! ```

use std::env;

use cytewise::{BibliographicRecord, CitationStyle, Formatter};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example generate -- <record.json>");
        std::process::exit(1);
    }

    let record = match BibliographicRecord::load(&args[1]) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let formatter = Formatter::new();
    for style in CitationStyle::ALL {
        println!("{:<18} {}", style.name(), formatter.generate(&record, style));
    }
}
