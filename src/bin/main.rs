//! cube-utils CLI - Inspect which cubes and members a Cube query touches
//!
//! Usage:
//!   cube-utils cubes [<query.json>] [--url <url>]
//!   cube-utils members [<query.json>] [--axis <axis>...]
//!   cube-utils filter-members [<query.json>] [--with-values]
//!   cube-utils url-params <url>
//!
//! Examples:
//!   cube-utils cubes query.json
//!   cat query.json | cube-utils members --axis measures --axis timeDimensions
//!   cube-utils filter-members --with-values --url '/cubejs-api/v1/load?query=...'

use clap::{Args, Parser, Subcommand, ValueEnum};
use cube_utils::config::{OutputFormat, Settings};
use cube_utils::{
    extract_cubes, extract_filters_members, extract_filters_members_with_values,
    extract_members, extract_url_params, query_payload_from_url, Axis,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cube-utils")]
#[command(about = "Extract cube and member references from Cube query payloads")]
#[command(version)]
struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(short, long, global = true)]
    output: Option<FormatArg>,

    /// Path to a settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cubes a query touches
    Cubes {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List the members a query references
    Members {
        #[command(flatten)]
        input: InputArgs,

        /// Axis to scan, by payload key (repeatable; defaults to the configured axes)
        #[arg(short, long = "axis", value_parser = parse_axis)]
        axes: Vec<Axis>,
    },

    /// List the members referenced by filters and segments
    FilterMembers {
        #[command(flatten)]
        input: InputArgs,

        /// Include the literal values each member is filtered by
        #[arg(long)]
        with_values: bool,
    },

    /// Print the decoded query parameters of a URL
    UrlParams {
        /// URL (absolute or relative)
        url: String,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Path to a JSON query payload ('-' or omitted for stdin)
    file: Option<PathBuf>,

    /// Read the payload from the `query` parameter of a request URL
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,
}

fn parse_axis(key: &str) -> Result<Axis, String> {
    Axis::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = Axis::ALL.iter().map(|axis| axis.key()).collect();
        format!("unknown axis '{}' (expected one of: {})", key, known.join(", "))
    })
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// One entry per line
    Lines,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Lines => OutputFormat::Lines,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let printer = Printer {
        format: cli.output.map_or(settings.output.format, Into::into),
        pretty: settings.output.pretty,
    };

    let result = match cli.command {
        Commands::Cubes { input } => cmd_cubes(&input, &printer),
        Commands::Members { input, axes } => {
            let axes = if axes.is_empty() {
                settings.extract.axes.clone()
            } else {
                axes
            };
            cmd_members(&input, &axes, &printer)
        }
        Commands::FilterMembers { input, with_values } => {
            cmd_filter_members(&input, with_values, &printer)
        }
        Commands::UrlParams { url } => {
            cmd_url_params(&url, &printer);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn cmd_cubes(input: &InputArgs, printer: &Printer) -> Result<(), String> {
    let payload = read_payload(input)?;
    let cubes = extract_cubes(&payload).map_err(|e| e.to_string())?;
    printer.print_set(&cubes);
    Ok(())
}

fn cmd_members(input: &InputArgs, axes: &[Axis], printer: &Printer) -> Result<(), String> {
    let payload = read_payload(input)?;
    let members = extract_members(&payload, axes).map_err(|e| e.to_string())?;
    printer.print_set(&members);
    Ok(())
}

fn cmd_filter_members(
    input: &InputArgs,
    with_values: bool,
    printer: &Printer,
) -> Result<(), String> {
    let payload = read_payload(input)?;

    if !with_values {
        let members = extract_filters_members(&payload).map_err(|e| e.to_string())?;
        printer.print_set(&members);
        return Ok(());
    }

    let rows = extract_filters_members_with_values(&payload).map_err(|e| e.to_string())?;
    match printer.format {
        OutputFormat::Json => printer.print_json(&rows),
        OutputFormat::Lines => {
            for row in &rows {
                match &row.values {
                    Some(values) => {
                        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                        println!("{}\t{}", row.member, values.join(","));
                    }
                    None => println!("{}\tnull", row.member),
                }
            }
        }
    }
    Ok(())
}

fn cmd_url_params(url: &str, printer: &Printer) {
    let params = extract_url_params(url);
    match printer.format {
        OutputFormat::Json => printer.print_json(&params),
        OutputFormat::Lines => {
            for (key, value) in &params {
                match value {
                    cube_utils::ParamValue::Single(v) => println!("{}={}", key, v),
                    cube_utils::ParamValue::Multiple(vs) => {
                        for v in vs {
                            println!("{}={}", key, v);
                        }
                    }
                }
            }
        }
    }
}

/// Read the payload from `--url`, a file, or stdin.
fn read_payload(input: &InputArgs) -> Result<Value, String> {
    if let Some(url) = &input.url {
        // A request without a `query` parameter carries no members.
        return query_payload_from_url(url)
            .map(|payload| payload.unwrap_or_else(|| Value::Object(Default::default())))
            .map_err(|e| format!("Error reading query from '{}': {}", url, e));
    }

    let source = match &input.file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Error reading stdin: {}", e))?;
            buf
        }
    };

    serde_json::from_str(&source).map_err(|e| format!("Invalid JSON payload: {}", e))
}

struct Printer {
    format: OutputFormat,
    pretty: bool,
}

impl Printer {
    fn print_set(&self, items: &BTreeSet<String>) {
        match self.format {
            OutputFormat::Json => self.print_json(items),
            OutputFormat::Lines => {
                for item in items {
                    println!("{}", item);
                }
            }
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        match rendered {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing output: {}", e),
        }
    }
}
