//! Tree check CLI
//!
//! # Usage
//!
//! ```bash
//! # Plain true/false
//! cargo run --bin tree-check -- graph.txt
//!
//! # Explain the verdict, JSON input, custom config
//! cargo run --bin tree-check -- graph.json --explain --config validator.yaml
//! ```
//!
//! Exit codes: 0 tree, 1 not a tree, 2 input or configuration error.

use anyhow::Context;
use clap::Parser;
use disjoint_forest::{GraphInput, GraphTreeValidator, InputFormat, ValidatorConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tree-check")]
#[command(about = "Check whether an undirected graph is a single tree", long_about = None)]
struct Cli {
    /// Graph file (JSON `{"n": .., "edges": [[u, v], ..]}` or text edge list)
    input: PathBuf,

    /// Input format (json|text); guessed from the extension when omitted
    #[arg(short, long)]
    format: Option<InputFormat>,

    /// Validator configuration (YAML, version 1)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print why the graph is or is not a tree
    #[arg(long)]
    explain: bool,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = match &cli.config {
        Some(path) => ValidatorConfig::from_yaml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    let validator = GraphTreeValidator::new(config)?;

    let graph = GraphInput::read(&cli.input, cli.format)
        .with_context(|| format!("reading graph {}", cli.input.display()))?;
    info!(n = graph.n, edges = graph.edges.len(), "graph loaded");

    let verdict = graph.check(&validator)?;
    info!(verdict = verdict.as_str(), "graph checked");

    if cli.explain {
        println!("{}", verdict);
    } else {
        println!("{}", verdict.is_tree());
    }
    Ok(verdict.is_tree())
}
