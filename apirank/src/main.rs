//! # apirank
//!
//! A CLI tool that ranks the APIs in a catalog by usage.
//!
//! ## Overview
//!
//! apirank is built on top of apiranklib. It reads a JSON catalog (an array
//! of objects), takes one label field from every entry, ranks the distinct
//! labels by how often they occur, and prints the ranking either as JSON or
//! as an HTML table document.
//!
//! ## Usage
//!
//! ```bash
//! # Rank NumPy APIs from data/threshold.json and print JSON
//! apirank
//!
//! # Rank a different field from a different catalog
//! apirank rank --data data/other.json --field torch --pretty
//!
//! # Render the ranking as an HTML page
//! apirank table --template docs/table_template.html --output docs/ranks.html
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` or `-v`.

use std::path::PathBuf;
use std::process::ExitCode;

use apiranklib::{
    load_labels, rank_by_usage, records_from, HtmlRenderer, MissingFields, TableOptions,
    TemplateCache,
};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::Style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod render;

/// Catalog read when `--data` is not given
const DEFAULT_DATA_PATH: &str = "data/threshold.json";

/// Label field plucked when `--field` is not given
const DEFAULT_FIELD: &str = "numpy";

const DEFAULT_TITLE: &str = "API usage ranking";

/// Arguments selecting the catalog and label field
fn source_args() -> [Arg; 2] {
    [
        Arg::new("data")
            .short('d')
            .long("data")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_DATA_PATH)
            .help("Path to the JSON catalog (array of objects)"),
        Arg::new("field")
            .short('f')
            .long("field")
            .default_value(DEFAULT_FIELD)
            .help("Entry field holding the label to rank"),
    ]
}

fn pretty_arg() -> Arg {
    Arg::new("pretty")
        .long("pretty")
        .action(ArgAction::SetTrue)
        .help("Pretty-print the JSON output")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("apirank")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rank catalog APIs by usage and print JSON or an HTML table")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging on stderr"),
        )
        .args(source_args())
        .arg(pretty_arg())
        .subcommand(
            Command::new("rank")
                .about("Print the usage ranking as JSON (default command)")
                .args(source_args())
                .arg(pretty_arg()),
        )
        .subcommand(
            Command::new("table")
                .about("Render the usage ranking as an HTML table document")
                .args(source_args())
                .arg(
                    Arg::new("template")
                        .short('t')
                        .long("template")
                        .value_parser(value_parser!(PathBuf))
                        .help("HTML template with {{TITLE}} and {{TABLE}} placeholders"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .default_value(DEFAULT_TITLE)
                        .help("Document title"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the document to a file instead of stdout"),
                )
                .arg(
                    Arg::new("missing")
                        .long("missing")
                        .value_parser(["empty", "error"])
                        .default_value("empty")
                        .help("What to do when a row lacks a column: leave it empty or fail"),
                ),
        )
}

/// Load labels from the catalog named in matches
fn load_source(matches: &ArgMatches) -> anyhow::Result<Vec<String>> {
    let data = matches
        .get_one::<PathBuf>("data")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
    let field = matches
        .get_one::<String>("field")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_FIELD);

    debug!(data = %data.display(), field, "loading catalog");
    Ok(load_labels(&data, field)?)
}

/// Handler for rank command
fn rank_handler(matches: &ArgMatches) -> anyhow::Result<()> {
    let labels = load_source(matches)?;
    let ranked = rank_by_usage(&labels);
    let json = render::ranking_json(&ranked, matches.get_flag("pretty"))?;
    render::write_output(&json, None)
}

/// Handler for table command
fn table_handler(matches: &ArgMatches) -> anyhow::Result<()> {
    let labels = load_source(matches)?;
    let ranked = rank_by_usage(&labels);

    let template = match matches.get_one::<PathBuf>("template") {
        Some(path) => TemplateCache::from_path(path),
        None => TemplateCache::builtin(),
    };
    let missing = match matches.get_one::<String>("missing") {
        Some(policy) => policy.parse::<MissingFields>().map_err(anyhow::Error::msg)?,
        None => MissingFields::default(),
    };
    let renderer =
        HtmlRenderer::new(template).with_options(TableOptions::new().missing_fields(missing));

    let title = matches
        .get_one::<String>("title")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_TITLE);
    let html = renderer.create_table(&records_from(&ranked), title)?;

    render::write_output(&html, matches.get_one::<PathBuf>("output").map(|p| p.as_path()))
}

/// Install the stderr log subscriber
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let verbose = matches.get_flag("verbose")
        || matches
            .subcommand()
            .is_some_and(|(_, sub)| sub.get_flag("verbose"));
    init_tracing(verbose);

    let result = match matches.subcommand() {
        Some(("table", sub)) => table_handler(sub),
        Some(("rank", sub)) => rank_handler(sub),
        // No subcommand: rank with the root arguments
        _ => rank_handler(&matches),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let label = Style::new().red().bold().for_stderr().apply_to("Error:");
            eprintln!("{label} {e:#}");
            ExitCode::FAILURE
        }
    }
}
