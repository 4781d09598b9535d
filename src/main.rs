//! Headless driver: seed a graph, replay an input script, print the result.
//!
//! ```text
//! nodeboard [--seed FILE] [--script FILE] [--settings FILE] [--verbose]
//! ```
//!
//! Without `--seed` the built-in demo graph is used. Logging is controlled by
//! `RUST_LOG` (default `nodeboard=info`). `--verbose` reports every timed
//! scope, not just the ones over budget (needs the `profiling` feature).

use anyhow::{Context, Result, bail};
use nodeboard::perf;
use nodeboard::script::InputScript;
use nodeboard::{Editor, GraphSeed, GraphStore, Settings};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Args {
    seed: Option<PathBuf>,
    script: Option<PathBuf>,
    settings: Option<PathBuf>,
    verbose: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--verbose" {
            args.verbose = true;
            continue;
        }
        let slot = match arg.as_str() {
            "--seed" => &mut args.seed,
            "--script" => &mut args.script,
            "--settings" => &mut args.settings,
            other => bail!("unknown argument: {other}"),
        };
        let value = iter.next().with_context(|| format!("{arg} needs a file path"))?;
        *slot = Some(PathBuf::from(value));
    }
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nodeboard=info")))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    perf::set_verbose(args.verbose);
    let settings = Settings::load_or_default(args.settings.as_deref());

    let seed = match &args.seed {
        Some(path) => GraphSeed::load(path).with_context(|| format!("failed to load seed {}", path.display()))?,
        None => GraphSeed::demo(),
    };
    let graph = GraphStore::from_seed(seed, settings.node_radius);
    info!(nodes = graph.nodes().len(), edges = graph.edges().len(), "Graph seeded");

    let mut editor = Editor::with_graph(graph, &settings);

    if let Some(path) = &args.script {
        let script =
            InputScript::load(path).with_context(|| format!("failed to load script {}", path.display()))?;
        let ((), elapsed) = perf::time(|| script.run(&mut editor));
        info!(steps = script.steps.len(), elapsed_us = elapsed.as_micros() as u64, "Script replayed");
    }

    let json = serde_json::to_string_pretty(&editor.snapshot()).context("failed to serialise snapshot")?;
    println!("{json}");
    Ok(())
}
