use std::path::PathBuf;
use std::sync::Arc;

use category_totals::ingestion::TracingObserver;
use category_totals::pipeline::{run_to_json, PipelineOptions, DEFAULT_INPUT_PATH};
use category_totals::processing::OutputOrder;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Sum a numeric column per category and print the result as JSON.
///
/// The process always exits 0 once arguments are parsed; failures are reported as
/// `{"error": .., "message": ..}` on stdout.
#[derive(Debug, Parser)]
#[command(name = "category-totals", version)]
struct Cli {
    /// Delimited input file with a header row.
    #[arg(env = "CATEGORY_TOTALS_INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Field delimiter (a single ASCII character, or `\t` for tab).
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Name of the grouping column.
    #[arg(long, env = "CATEGORY_TOTALS_CATEGORY_COLUMN", default_value = "Category")]
    category_column: String,

    /// Name of the numeric column to sum.
    #[arg(long, env = "CATEGORY_TOTALS_VALUE_COLUMN", default_value = "Value")]
    value_column: String,

    /// Sort output by category instead of first-occurrence order.
    #[arg(long)]
    sort_by_category: bool,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "\\t" | "\t" => Ok(b'\t'),
        _ => match raw.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("delimiter must be a single ASCII character, got '{raw}'")),
        },
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the JSON document.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let options = PipelineOptions {
        delimiter: cli.delimiter,
        category_column: cli.category_column,
        value_column: cli.value_column,
        order: if cli.sort_by_category {
            OutputOrder::ByCategory
        } else {
            OutputOrder::FirstOccurrence
        },
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };

    let (outcome, json) = run_to_json(&cli.input, &options, cli.pretty);
    info!(success = outcome.is_success(), "writing result");
    println!("{json}");
}
