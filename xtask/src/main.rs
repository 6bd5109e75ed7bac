use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trellis::algorithms::{connected_components, minimum_spanning_tree, shortest_paths};
use trellis::{AdjListGraph, AdjMatrixGraph, Undirected, WeightedGraph};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Trellis workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Import a `strict graph` file and print a JSON summary
    Inspect {
        /// Path to the description
        path: PathBuf,

        /// Store layout to import into
        #[arg(long, value_enum, default_value_t = Store::List)]
        store: Store,

        /// Node value to compute distances from
        #[arg(long)]
        from: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Store {
    List,
    Matrix,
}

const BENCHES: &[&str] = &[
    "shortest_path_benchmark",
    "disjoint_set_benchmark",
    "graph_benchmark",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Inspect { path, store, from } => {
            let summary = match store {
                Store::List => {
                    let graph = AdjListGraph::<String>::from_dot_file(&path)
                        .with_context(|| format!("failed to import {}", path.display()))?;
                    summarize(&graph, from.as_deref())
                }
                Store::Matrix => {
                    let graph = AdjMatrixGraph::<String>::from_dot_file(&path)
                        .with_context(|| format!("failed to import {}", path.display()))?;
                    summarize(&graph, from.as_deref())
                }
            }?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct Summary {
    nodes: usize,
    edges: usize,
    total_weight: i64,
    components: usize,
    spanning_weight: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    distances: Option<BTreeMap<String, Option<i64>>>,
}

fn summarize<G>(graph: &G, from: Option<&str>) -> Result<Summary>
where
    G: WeightedGraph<Value = String, Direction = Undirected>,
{
    let distances = match from {
        Some(value) => {
            let start = graph
                .registry()
                .find(value)
                .with_context(|| format!("no node named {value:?}"))?;
            let paths = shortest_paths(graph, start).context("start node vanished")?;
            let table = paths
                .iter()
                .filter_map(|(id, d)| graph.node(id).map(|v| (v.clone(), d.finite())))
                .collect();
            Some(table)
        }
        None => None,
    };

    let summary = Summary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        total_weight: graph.total_weight(),
        components: connected_components(graph).len(),
        spanning_weight: minimum_spanning_tree(graph).total_weight(),
        distances,
    };
    info!(nodes = summary.nodes, edges = summary.edges, "inspected graph");
    Ok(summary)
}

fn run_benchmarks(quick: bool) -> Result<()> {
    info!("compiling benchmarks");
    let status = Command::new("cargo")
        .args(["build", "--benches", "--release", "-p", "trellis"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for bench in BENCHES {
        info!(bench, "running");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "-p", "trellis", "--bench", bench]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {bench}"))?;

        if status.success() {
            info!(bench, elapsed = ?start.elapsed(), "finished");
        } else {
            warn!(bench, "benchmark failed");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        warn!(path = %criterion_dir.display(), "no criterion output found");
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean |")?;
    writeln!(file, "|---|---|")?;
    for (name, time_ns) in &results {
        writeln!(file, "| {} | {} |", name, format_time(*time_ns))?;
    }

    info!(path = %report_path.display(), rows = results.len(), "report written");
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

/// Collects `<bench>/new/estimates.json` mean times, keyed by the path below
/// the criterion root.
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, f64>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) != Some("report") {
                collect_results(root, &path, results);
            }
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = run_dir.parent() else { continue };
        let Ok(name) = bench_dir.strip_prefix(root) else { continue };

        let mean = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64());
        if let Some(time_ns) = mean {
            results.insert(name.display().to_string(), time_ns);
        }
    }
}
