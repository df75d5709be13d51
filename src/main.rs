//! Heat-Exchange Report Calculator
//!
//! Reads a JSON description of a cooling network (hot process flows and the
//! coolers they reject heat into), computes heat exchange, cooling
//! efficiencies, and cooler water requirements, and emits a JSON report.

mod calculator;
mod error;
mod models;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::error::CalcError;
use crate::models::Network;

#[derive(Parser)]
#[command(name = "hx-calculator")]
#[command(about = "Heat-exchange report calculator for hot-flow/cooler networks")]
struct Cli {
    /// Input JSON document; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Write the JSON report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Print a readable summary on stdout in place of the JSON report
    #[arg(short, long)]
    summary: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = read_input(cli.input.as_deref())?;
    let network: Network =
        serde_json::from_str(&raw).map_err(|e| CalcError::malformed(e.to_string()))?;

    let report = calculator::process(&network)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match (&cli.output, cli.summary) {
        (Some(path), _) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        (None, false) => println!("{}", json),
        (None, true) => {}
    }

    if cli.summary {
        print!("{}", calculator::summarize(&report));
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
