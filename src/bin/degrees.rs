//! Degrees CLI — query a catalog for chains between participants.
//!
//! Usage:
//!   degrees [--catalog path] shortest <source> <target>
//!   degrees [--catalog path] all <source> <target>
//!   degrees [--catalog path] suggest <text> [--limit n]
//!   degrees [--catalog path] summary

use clap::{Parser, Subcommand};
use degrees::{DecoratedPath, DegreesEngine, MissingEndpoints};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "degrees",
    version,
    about = "Degrees of separation over a catalog of works and participants"
)]
struct Cli {
    /// Path to the catalog (JSON or YAML list of {title, cast})
    #[arg(long, global = true, env = "DEGREES_CATALOG", default_value = "latest_movies.json")]
    catalog: PathBuf,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest chain between two participants
    Shortest {
        source: String,
        target: String,
    },
    /// List every chain of at most six degrees between two participants
    All {
        source: String,
        target: String,
    },
    /// Suggest known names containing some text
    Suggest {
        text: String,
        /// Maximum number of suggestions
        #[arg(long, default_value_t = degrees::query::DEFAULT_SUGGESTIONS)]
        limit: usize,
    },
    /// Print vertex and edge counts
    Summary,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Validate endpoints the way the query surface expects: non-blank and known
fn check_endpoints(engine: &DegreesEngine, source: &str, target: &str, json: bool) -> Result<(), i32> {
    if source.trim().is_empty() || target.trim().is_empty() {
        eprintln!("Error: both source and target are required");
        return Err(1);
    }

    let Some(missing) = engine.check_endpoints(source, target) else {
        return Ok(());
    };

    if json {
        print_json(&missing);
    } else {
        report_missing(source, target, &missing);
    }
    Err(1)
}

fn report_missing(source: &str, target: &str, missing: &MissingEndpoints) {
    for (name, suggestions) in [(source, &missing.source), (target, &missing.target)] {
        if let Some(suggestions) = suggestions {
            eprintln!("Error: '{}' not found", name.trim());
            if !suggestions.is_empty() {
                eprintln!("  did you mean: {}", suggestions.join(", "));
            }
        }
    }
}

fn print_path(path: &DecoratedPath) {
    println!("{} ({} degrees)", path, path.degrees());
}

fn cmd_shortest(engine: &DegreesEngine, source: &str, target: &str, json: bool) -> i32 {
    if let Err(code) = check_endpoints(engine, source, target, json) {
        return code;
    }

    match engine.shortest_path(source, target) {
        Some(path) if json => print_json(&path),
        Some(path) => {
            print_path(&path);
            0
        }
        None => {
            eprintln!(
                "No connection between '{}' and '{}' within {} degrees",
                source.trim(),
                target.trim(),
                engine.limits().max_edges
            );
            1
        }
    }
}

fn cmd_all(engine: &DegreesEngine, source: &str, target: &str, json: bool) -> i32 {
    if let Err(code) = check_endpoints(engine, source, target, json) {
        return code;
    }

    let paths = engine.all_paths(source, target);
    if paths.is_empty() {
        eprintln!(
            "No connections between '{}' and '{}' within {} degrees",
            source.trim(),
            target.trim(),
            engine.limits().max_edges
        );
        return 1;
    }

    if json {
        return print_json(&paths);
    }
    for path in &paths {
        print_path(path);
    }
    println!("{} path(s)", paths.len());
    0
}

fn cmd_suggest(engine: &DegreesEngine, text: &str, limit: usize, json: bool) -> i32 {
    let suggestions = engine.suggestions_limited(text, limit);
    if json {
        return print_json(&suggestions);
    }
    if suggestions.is_empty() {
        println!("No suggestions.");
    }
    for name in suggestions {
        println!("{}", name);
    }
    0
}

fn cmd_summary(engine: &DegreesEngine, json: bool) -> i32 {
    let summary = engine.summary();
    if json {
        return print_json(&summary);
    }
    println!("{}", summary);
    println!(
        "  works: {}  participants: {}  loaded: {}",
        summary.work_count,
        summary.participant_count,
        summary.loaded_at.to_rfc3339()
    );
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let engine = match DegreesEngine::load(&cli.catalog) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Shortest { source, target } => cmd_shortest(&engine, &source, &target, cli.json),
        Commands::All { source, target } => cmd_all(&engine, &source, &target, cli.json),
        Commands::Suggest { text, limit } => cmd_suggest(&engine, &text, limit, cli.json),
        Commands::Summary => cmd_summary(&engine, cli.json),
    };
    std::process::exit(code);
}
