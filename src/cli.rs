//! CLI argument definitions
//!
//! Harness around the library for running searches against a JSON corpus
//! projection and inspecting how queries tokenize.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pubrank CLI
#[derive(Parser)]
#[command(name = "pubrank")]
#[command(about = "Relevance-ranked search over a publication catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and print one result page
    Search(SearchArgs),
    /// Show how a query tokenizes and expands
    Tokens(TokensArgs),
}

/// Search command arguments
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Corpus file: a JSON array of publication projections
    #[arg(short = 'c', long)]
    pub corpus: PathBuf,

    /// Free-text query; empty browses the corpus in store order
    #[arg(short = 'q', long, default_value = "")]
    pub query: String,

    /// 1-based result page
    #[arg(short = 'p', long, default_value_t = 1)]
    pub page: usize,

    /// Restrict to one publication type
    #[arg(long)]
    pub kind: Option<String>,

    /// Restrict to one category id
    #[arg(long)]
    pub category: Option<i64>,

    /// Restrict to one author id
    #[arg(long)]
    pub author: Option<i64>,

    /// Earliest publication date (YYYY-MM-DD); invalid values are ignored
    #[arg(long)]
    pub from: Option<String>,

    /// Latest publication date (YYYY-MM-DD); invalid values are ignored
    #[arg(long)]
    pub to: Option<String>,

    /// Emit JSON instead of a text listing
    #[arg(long)]
    pub json: bool,
}

/// Tokens command arguments
#[derive(Parser, Debug, Clone)]
pub struct TokensArgs {
    /// Query to tokenize
    pub query: String,

    /// Emit JSON instead of one token per line
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args_parse() {
        let cli = Cli::parse_from([
            "pubrank", "search", "--corpus", "corpus.json", "--query", "tesis", "--page", "2",
            "--kind", "guide",
        ]);
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.corpus, PathBuf::from("corpus.json"));
                assert_eq!(args.query, "tesis");
                assert_eq!(args.page, 2);
                assert_eq!(args.kind.as_deref(), Some("guide"));
                assert!(!args.json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_query_defaults_to_browse() {
        let cli = Cli::parse_from(["pubrank", "search", "--corpus", "corpus.json"]);
        match cli.command {
            Commands::Search(args) => assert!(args.query.is_empty()),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_tokens_args_parse() {
        let cli = Cli::parse_from(["pubrank", "tokens", "Estudiantes", "--json"]);
        match cli.command {
            Commands::Tokens(args) => {
                assert_eq!(args.query, "Estudiantes");
                assert!(args.json);
            }
            _ => panic!("expected tokens command"),
        }
    }
}
