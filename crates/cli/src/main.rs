use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod classify;
mod commands;
mod provenance;

use classify::KindArg;
use commands::AlgoArg;
use provenance::{current_git_rev, write_sidecar, Sidecar};

#[derive(Parser)]
#[command(name = "euler")]
#[command(about = "Euler circuits on adjacency-matrix multigraphs")]
struct Cmd {
    /// Debug-level logs on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build circuits and verify them; JSON report per algorithm and start vertex
    Solve {
        /// JSON file holding an array of integer rows
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = KindArg::Auto)]
        kind: KindArg,
        #[arg(long, value_enum, default_value_t = AlgoArg::All)]
        algo: AlgoArg,
        /// 1-based start vertex; every vertex when omitted
        #[arg(long)]
        start: Option<usize>,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Degrees, connectivity and feasibility without building a circuit
    Check {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = KindArg::Auto)]
        kind: KindArg,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            kind,
            algo,
            start,
            out,
        } => solve(&input, kind, algo, start, out.as_deref()),
        Action::Check { input, kind } => {
            let graph = commands::load_graph(&input, kind)?;
            emit(&commands::check(&graph)?, None)
        }
        Action::Report => report(),
    }
}

fn solve(
    input: &Path,
    kind: KindArg,
    algo: AlgoArg,
    start: Option<usize>,
    out: Option<&Path>,
) -> Result<()> {
    tracing::info!(input = %input.display(), ?algo, ?start, "solve");
    let graph = commands::load_graph(input, kind)?;
    let report = commands::solve(&graph, algo, start)?;
    emit(&report, out)?;
    if let Some(out) = out {
        let params = json!({
            "input": input.to_string_lossy(),
            "kind": report.kind,
            "algo": format!("{algo:?}").to_lowercase(),
            "start": start,
        });
        write_sidecar(out, Sidecar::new("solve", params))?;
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "crate_version": eulerian::VERSION,
        "algorithms": eulerian::circuit::Algorithm::ALL.map(|a| a.to_string()),
    });
    emit(&obj, None)
}

/// Pretty JSON to `out` (creating parent directories) or to stdout.
fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{text}"),
    }
    Ok(())
}
