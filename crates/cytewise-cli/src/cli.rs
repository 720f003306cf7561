//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use cytewise::CitationStyle;
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Cytewise: citation generator for academic styles
#[derive(Parser)]
#[command(name = "cytewise")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log output format (pretty, compact, json)
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a citation from record fields
    Generate(GenerateArgs),

    /// List citation styles and whether they are implemented
    Styles {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the citation API over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for web server
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// JSON record file (camelCase keys, e.g. "containerTitle")
    #[arg(value_name = "RECORD")]
    pub file: Option<PathBuf>,

    /// Citation style (APA, MLA, Chicago/Turabian, Harvard, IEEE, ...)
    #[arg(short, long, default_value_t = CitationStyle::default())]
    pub style: CitationStyle,

    /// Set a field, e.g. --field container-title="Nature" (repeatable)
    #[arg(short, long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// Author, e.g. "Last, First M."
    #[arg(long)]
    pub author: Option<String>,

    /// Title of the source
    #[arg(long)]
    pub title: Option<String>,

    /// Publication year
    #[arg(long)]
    pub year: Option<String>,

    /// URL of the source
    #[arg(long)]
    pub url: Option<String>,

    /// DOI, without the resolver prefix
    #[arg(long)]
    pub doi: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults_to_mla() {
        let cli = Cli::try_parse_from(["cytewise", "generate", "--author", "Smith"]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.style, CitationStyle::Mla),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_generate_style_accepts_aliases() {
        let cli = Cli::try_parse_from(["cytewise", "generate", "-s", "apa"]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.style, CitationStyle::Apa),
            _ => panic!("expected generate"),
        }
    }
}
