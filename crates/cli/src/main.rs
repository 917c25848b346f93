// ABOUTME: CLI binary for the blogstats extraction engine.
// ABOUTME: Feeds saved HTML documents through the engine and prints the transport response.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use blogstats_engine::{
    export_record, format_summary, handle_request, Engine, Request, Response, StatsStore,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "blogstats")]
#[command(about = "Extract blog visitor statistics from saved HTML pages")]
struct Args {
    /// HTML file path(s) to extract from. Use "-" to read one document from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// Output format: json (transport response) or summary (text view)
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: String,

    /// Output compact JSON instead of pretty
    #[arg(long = "compact")]
    compact: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Persist the last successful record to this key-value store file
    #[arg(long = "store")]
    store: Option<PathBuf>,

    /// Export the last successful record as a dated JSON file into this directory
    #[arg(long = "export")]
    export: Option<PathBuf>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

fn load_html(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading HTML from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(target).with_context(|| format!("reading HTML file {}", target))
    }
}

/// Neutral failure line for the summary view; extraction emptiness never
/// reaches this, only an engine-level fault does.
const FAILURE_MESSAGE: &str = "could not retrieve stats data; try reloading the page";

fn render(responses: &[Response], args: &Args) -> Result<String> {
    match args.format.to_lowercase().as_str() {
        "summary" => {
            let parts: Vec<String> = responses
                .iter()
                .map(|r| match (&r.data, r.success) {
                    (Some(record), true) => format_summary(record),
                    _ => FAILURE_MESSAGE.to_string(),
                })
                .collect();
            Ok(parts.join("\n\n"))
        }
        _ => {
            let rendered = if responses.len() == 1 {
                if args.compact {
                    serde_json::to_string(&responses[0])?
                } else {
                    serde_json::to_string_pretty(&responses[0])?
                }
            } else if args.compact {
                serde_json::to_string(&responses)?
            } else {
                serde_json::to_string_pretty(&responses)?
            };
            Ok(rendered)
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let engine = Engine::builder().build();
    let start = Instant::now();

    let mut responses = Vec::new();
    let mut had_error = false;

    for target in &args.targets {
        match load_html(target) {
            Ok(html) => {
                let response = handle_request(&engine, &html, &Request::GetStats);
                if !response.success {
                    had_error = true;
                }
                responses.push(response);
            }
            Err(e) => {
                eprintln!("error: {:#}", e);
                had_error = true;
            }
        }
    }

    let elapsed = start.elapsed();

    // Persist/export the most recent successful record, like the popup does
    // with its last response.
    let last_record = responses
        .iter()
        .rev()
        .find(|r| r.success)
        .and_then(|r| r.data.as_ref());

    if let Some(record) = last_record {
        if let Some(store_path) = &args.store {
            StatsStore::new(store_path)
                .save_record(record)
                .context("persisting record to store")?;
        }
        if let Some(export_dir) = &args.export {
            let path = export_record(record, export_dir).context("exporting record")?;
            eprintln!("exported: {}", path.display());
        }
    }

    if !responses.is_empty() {
        let rendered = render(&responses, args)?;
        if let Some(output_path) = &args.output {
            fs::write(output_path, rendered)
                .with_context(|| format!("writing output to {:?}", output_path))?;
        } else {
            println!("{}", rendered);
        }
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    Ok(!had_error)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
