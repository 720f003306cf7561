//! Styles command - list citation styles.

use colored::Colorize;
use cytewise::{CitationStyle, Formatter};

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = Formatter::new();

    if json_output {
        let styles: Vec<_> = CitationStyle::ALL
            .into_iter()
            .map(|style| {
                serde_json::json!({
                    "name": style.name(),
                    "implemented": formatter.supports(style),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&styles)?);
        return Ok(());
    }

    println!("{}", "Citation styles:".cyan().bold());
    for style in CitationStyle::ALL {
        let marker = if formatter.supports(style) {
            "available".green()
        } else {
            "coming soon".yellow()
        };
        println!("  {:<18} {}", style.name().white(), marker);
    }

    Ok(())
}
