use clap::Parser;
use number_analyzer::{analyze, AnalyzerConfig};
use std::io;

/// Simple CLI that reads a list of integers from stdin and prints
/// derived statistics and filtered subsets.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Case-sensitive prefix used when filtering the name list
    #[arg(long, default_value = "su")]
    prefix: String,

    /// Comma-separated name list to filter (defaults to the built-in list)
    #[arg(long, value_delimiter = ',')]
    names: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let mut config = AnalyzerConfig::default();
    config.prefix = args.prefix;
    if !args.names.is_empty() {
        config.names = args.names;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = analyze(stdin.lock(), stdout.lock(), &config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
