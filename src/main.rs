//! pubrank CLI
//!
//! Thin harness over the search library: loads a JSON corpus projection,
//! runs the ranking pipeline, and prints one page of results as text or
//! JSON. Also exposes the tokenizer for query debugging.

mod cli;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Commands, SearchArgs, TokensArgs};
use pubrank::catalog::{MemoryStore, SearchFilters};
use pubrank::search::{tokenize, SearchEngine};
use pubrank::AppError;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    // Log to stderr to keep stdout clean for piped output
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Search(args) => execute_search(args),
        Commands::Tokens(args) => execute_tokens(args),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

/// Run a search and render one result page.
fn execute_search(args: SearchArgs) -> Result<String> {
    let store = MemoryStore::load(&args.corpus)?;
    let filters = SearchFilters {
        kind: args.kind.clone(),
        category_id: args.category,
        author_id: args.author,
        published_from: parse_date(args.from.as_deref()),
        published_to: parse_date(args.to.as_deref()),
    };

    let engine = SearchEngine::new();
    let outcome = engine.search(&store, &args.query, &filters);
    let page = engine.page(&store, &outcome, args.page.max(1));

    if args.json {
        let body = serde_json::json!({
            "query": args.query,
            "tokens": outcome.tokens,
            "total": page.total,
            "page": page.page,
            "page_count": page.page_count,
            "results": page.results,
        });
        return Ok(serde_json::to_string_pretty(&body)?);
    }

    let mut output = if outcome.is_browse() {
        format!("{} publications (page {}/{})\n", page.total, page.page, page.page_count)
    } else {
        format!(
            "{} results for \"{}\" (page {}/{})\n",
            page.total, args.query, page.page, page.page_count
        )
    };
    for record in &page.results {
        output.push_str(&format!("  {:>6}  {}\n", record.id, record.title));
    }
    if page.results.is_empty() {
        output.push_str("  (no results)\n");
    }
    Ok(output.trim_end().to_string())
}

/// Show the token sequence a query expands to.
fn execute_tokens(args: TokensArgs) -> Result<String> {
    let tokens = tokenize(&args.query);
    if args.json {
        return Ok(serde_json::to_string_pretty(&tokens)?);
    }
    Ok(tokens.join("\n"))
}

/// Parse a YYYY-MM-DD filter value; invalid values are dropped, not fatal.
fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            debug!(value = raw, "ignoring unparseable date filter");
            None
        }
    }
}

/// Map errors to exit codes.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(AppError::InvalidInput(_)) => 1,
        Some(AppError::CorpusLoad(_)) => 2,
        Some(AppError::CorpusParse(_)) => 3,
        Some(AppError::NotFound(_)) => 4,
        _ => 5,
    }
}
