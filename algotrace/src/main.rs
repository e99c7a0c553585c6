//! Algotrace Runner
//!
//! Runs the selected engines over the reference data sets and prints their
//! traces, either as JSON documents or as a readable walkthrough.

use algotrace::bst::{self, Entry, Key};
use algotrace::config::{Algorithm, OutputFormat, RunnerConfig, DEFAULT_LOG_FILTER};
use algotrace::critical_path;
use algotrace::fixtures::{
    self, Student, HASH_KEYS, HASH_MISS_KEYS, HASH_MODULUS, LINEAR_TABLE_SLOTS,
};
use algotrace::graph::{AdjacencyList, MatrixGraph};
use algotrace::hash::{ChainedTable, LinearProbeTable, SearchOutcome};
use algotrace::mst::{self, MstSummary};
use algotrace::static_search::{self, StaticTable};
use algotrace::trace::{LookupStep, MstStep, Trace, TraversalStep};
use algotrace::traversal;
use anyhow::{Context, Result};
use dotenv::dotenv;
use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Key looked up in the tree demo when none is configured.
const DEFAULT_BST_KEY: Key = 37;

/// Key looked up in the hash demos when none is configured.
const DEFAULT_HASH_KEY: i64 = 27;

/// Key looked up in the static table demo when none is configured.
const DEFAULT_TABLE_KEY: Key = 88;

/// Initialize tracing/logging.
fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();
    }

    info!(
        service_name = "algotrace",
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );
}

/// JSON document printed per algorithm.
#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    algorithm: &'static str,
    result: &'a T,
}

fn print_json<T: Serialize>(algorithm: Algorithm, body: &T) -> Result<()> {
    let report = Report {
        algorithm: algorithm.as_str(),
        result: body,
    };
    let json = serde_json::to_string_pretty(&report)
        .with_context(|| format!("Failed to serialize {algorithm} report"))?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
struct TraversalReport<'a> {
    vertices: Vec<&'a str>,
    trace: &'a Trace<TraversalStep>,
}

#[derive(Serialize)]
struct MstReport<'a> {
    vertices: &'a [String],
    trace: &'a Trace<MstStep>,
    summary: MstSummary,
}

#[derive(Serialize)]
struct BstReport<'a> {
    key: Key,
    in_order: Vec<&'a Entry<Student>>,
    visited: Vec<Key>,
    found: Option<&'a Entry<Student>>,
    comparisons: usize,
}

#[derive(Serialize)]
struct HashReport<'a> {
    linear: &'a LinearProbeTable,
    linear_search: SearchOutcome,
    linear_asl: SearchLengths,
    chained: &'a ChainedTable,
    chained_search: SearchOutcome,
    chained_asl: SearchLengths,
}

/// Average search lengths over the stored keys and one miss per home slot.
#[derive(Serialize)]
struct SearchLengths {
    successful: f64,
    unsuccessful: f64,
}

#[derive(Serialize)]
struct StaticSearchReport<'a> {
    key: Key,
    table: &'a [Entry<Student>],
    sequential: &'a Trace<LookupStep>,
    sorted: &'a [Entry<Student>],
    binary: &'a Trace<LookupStep>,
}

fn run_traversal(algorithm: Algorithm, config: &RunnerConfig) -> Result<()> {
    let graph = fixtures::traversal_graph();
    let trace = match algorithm {
        Algorithm::Bfs => traversal::bfs(&graph),
        _ => traversal::dfs(&graph),
    };

    match config.format {
        OutputFormat::Json => print_json(
            algorithm,
            &TraversalReport {
                vertices: graph.labels().collect(),
                trace: &trace,
            },
        ),
        OutputFormat::Pretty => {
            println!("== {} ==", algorithm.as_str().to_uppercase());
            print!("{graph}");
            print_traversal(&graph, &trace);
            Ok(())
        }
    }
}

fn print_traversal(graph: &AdjacencyList, trace: &Trace<TraversalStep>) {
    for (index, step) in trace.iter().enumerate() {
        match *step {
            TraversalStep::Visit { vertex } => {
                println!("{index:>3}  visit {}", graph.label(vertex))
            }
            TraversalStep::Edge { from, to } => {
                println!("{index:>3}  edge  {} -> {}", graph.label(from), graph.label(to))
            }
        }
    }
    let order: Vec<&str> = trace
        .replay_all()
        .visited
        .into_iter()
        .map(|v| graph.label(v))
        .collect();
    println!("order: {}\n", order.join(" "));
}

fn run_mst(algorithm: Algorithm, config: &RunnerConfig) -> Result<()> {
    let graph = fixtures::mst_graph();
    let trace = match algorithm {
        Algorithm::Kruskal => mst::kruskal(&graph),
        _ => mst::prim(&graph),
    };
    let summary = MstSummary::from_trace(&trace, graph.vexnum());

    match config.format {
        OutputFormat::Json => print_json(
            algorithm,
            &MstReport {
                vertices: graph.labels(),
                trace: &trace,
                summary,
            },
        ),
        OutputFormat::Pretty => {
            println!("== {} ==", algorithm.as_str().to_uppercase());
            print_mst(&graph, &trace, &summary);
            Ok(())
        }
    }
}

fn print_mst(graph: &MatrixGraph, trace: &Trace<MstStep>, summary: &MstSummary) {
    for (index, step) in trace.iter().enumerate() {
        println!("{index:>3}  {:?}  {}", step.kind, step.message);
    }
    let edges: Vec<String> = summary
        .edges
        .iter()
        .map(|e| format!("{}-{}({})", graph.label(e.from), graph.label(e.to), e.weight))
        .collect();
    println!(
        "tree: {}  weight {}{}\n",
        edges.join(" "),
        summary.total_weight,
        if summary.spanning { "" } else { "  (not spanning)" }
    );
}

fn run_critical_path(config: &RunnerConfig) -> Result<()> {
    let network = fixtures::activity_network();
    let trace = critical_path::analyze(&network);

    match config.format {
        OutputFormat::Json => print_json(Algorithm::CriticalPath, &trace),
        OutputFormat::Pretty => {
            println!("== CRITICAL PATH ==");
            for (index, step) in trace.iter().enumerate() {
                println!("{index:>3}  {:?}  {}", step.phase, step.message);
            }
            let state = trace.replay_all();
            let path: Vec<&str> = state
                .critical_vertices
                .iter()
                .map(|&v| network.label(v))
                .collect();
            println!("critical: {}\n", path.join(" -> "));
            Ok(())
        }
    }
}

async fn run_bst(config: &RunnerConfig) -> Result<()> {
    let key = config.search_key.unwrap_or(DEFAULT_BST_KEY);
    let tree = bst::build_balanced(&fixtures::students());
    let pretty = config.format == OutputFormat::Pretty;
    let delay = config.step_delay;

    if pretty {
        println!("== BST ==");
    }

    let mut visited = Vec::new();
    let result = bst::search_observed(tree.as_deref(), key, |node| {
        visited.push(node.key());
        if pretty {
            println!("  visit {}", node.key());
        }
        async move {
            if !delay.is_zero() {
                sleep(delay).await;
            }
        }
    })
    .await;
    debug!(key, visited = visited.len(), "Observed search complete");

    let found = result.node.map(|node| node.entry());
    match config.format {
        OutputFormat::Json => print_json(
            Algorithm::Bst,
            &BstReport {
                key,
                in_order: bst::in_order(tree.as_deref()),
                visited,
                found,
                comparisons: result.comparisons,
            },
        ),
        OutputFormat::Pretty => {
            match found {
                Some(entry) => println!(
                    "found {}: {} ({}, {}) after {} comparisons\n",
                    entry.key,
                    entry.value.name,
                    entry.value.sex,
                    entry.value.age,
                    result.comparisons
                ),
                None => println!("{key} not found after {} comparisons\n", result.comparisons),
            }
            Ok(())
        }
    }
}

fn run_hash(config: &RunnerConfig) -> Result<()> {
    let key = config.search_key.unwrap_or(DEFAULT_HASH_KEY);
    let linear = LinearProbeTable::with_modulus(LINEAR_TABLE_SLOTS, HASH_MODULUS)?
        .build(&HASH_KEYS)
        .context("Failed to build linear probing table")?;
    let chained = ChainedTable::new(HASH_MODULUS)?.build(&HASH_KEYS);
    let linear_search = linear.search(key);
    let chained_search = chained.search(key);
    let linear_asl = SearchLengths {
        successful: linear.average_search_length(&HASH_KEYS),
        unsuccessful: linear.average_search_length(&HASH_MISS_KEYS),
    };
    let chained_asl = SearchLengths {
        successful: chained.average_search_length(&HASH_KEYS),
        unsuccessful: chained.average_search_length(&HASH_MISS_KEYS),
    };

    match config.format {
        OutputFormat::Json => print_json(
            Algorithm::Hash,
            &HashReport {
                linear: &linear,
                linear_search,
                linear_asl,
                chained: &chained,
                chained_search,
                chained_asl,
            },
        ),
        OutputFormat::Pretty => {
            println!("== HASH ==");
            for (slot, stored) in linear.slots().iter().enumerate() {
                match stored {
                    Some(k) => println!("  [{slot:>2}] {k}"),
                    None => println!("  [{slot:>2}] -"),
                }
            }
            println!(
                "linear: {key} {} after probing {:?}",
                if linear_search.found() { "found" } else { "absent" },
                linear_search.probes
            );
            println!(
                "linear ASL: {:.2} successful, {:.2} unsuccessful",
                linear_asl.successful, linear_asl.unsuccessful
            );
            for bucket in 0..chained.bucket_count() {
                let keys: Vec<String> = chained.bucket(bucket).map(|k| k.to_string()).collect();
                println!("  <{bucket:>2}> {}", keys.join(" -> "));
            }
            println!(
                "chained: {key} {} after {} comparisons",
                if chained_search.found() { "found" } else { "absent" },
                chained_search.comparisons
            );
            println!(
                "chained ASL: {:.2} successful, {:.2} unsuccessful\n",
                chained_asl.successful, chained_asl.unsuccessful
            );
            Ok(())
        }
    }
}

fn run_static_search(config: &RunnerConfig) -> Result<()> {
    let key = config.search_key.unwrap_or(DEFAULT_TABLE_KEY);
    let table = StaticTable::new(fixtures::student_table());
    let sequential = static_search::sequential(&table, key);
    let sorted = table.clone().into_sorted();
    let binary = static_search::binary(&sorted, key);

    match config.format {
        OutputFormat::Json => print_json(
            Algorithm::Search,
            &StaticSearchReport {
                key,
                table: table.records(),
                sequential: &sequential,
                sorted: sorted.records(),
                binary: &binary,
            },
        ),
        OutputFormat::Pretty => {
            println!("== SEARCH ==");
            print_lookup("sequential", key, &sequential);
            print_lookup("binary", key, &binary);
            println!();
            Ok(())
        }
    }
}

fn print_lookup(name: &str, key: Key, trace: &Trace<LookupStep>) {
    for (index, step) in trace.iter().enumerate() {
        match step.range {
            Some((low, high)) => println!(
                "{index:>3}  [{low}..={high}] mid {} key {}  {:?}",
                step.index, step.key, step.verdict
            ),
            None => println!(
                "{index:>3}  [{}] key {}  {:?}",
                step.index, step.key, step.verdict
            ),
        }
    }
    let state = trace.replay_all();
    match state.found {
        Some(index) => println!(
            "{name}: {key} at index {index} after {} comparisons",
            state.comparisons
        ),
        None => println!("{name}: {key} absent after {} comparisons", state.comparisons),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = RunnerConfig::from_env().context("Invalid runner configuration")?;
    init_tracing(config.log_json);

    info!(
        algorithm = %config.algorithm,
        format = ?config.format,
        step_delay_ms = config.step_delay.as_millis() as u64,
        "Starting algotrace"
    );

    for algorithm in config.algorithm.expand() {
        match algorithm {
            Algorithm::Dfs | Algorithm::Bfs => run_traversal(algorithm, &config)?,
            Algorithm::Prim | Algorithm::Kruskal => run_mst(algorithm, &config)?,
            Algorithm::CriticalPath => run_critical_path(&config)?,
            Algorithm::Bst => run_bst(&config).await?,
            Algorithm::Hash => run_hash(&config)?,
            Algorithm::Search => run_static_search(&config)?,
            Algorithm::All => {}
        }
    }

    info!("Algotrace completed successfully");
    Ok(())
}
