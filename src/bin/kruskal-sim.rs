//! Command-line front end: reads a graph, runs the engine, narrates the result.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kruskal_sim::narrate::{self, NarrationOptions};
use kruskal_sim::{GraphInput, Kruskal, KruskalConfig, WeightPolicy};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kruskal-sim")]
#[command(about = "Step-by-step Kruskal minimum spanning tree simulator", long_about = None)]
struct Cli {
    /// Use the built-in 6-vertex example graph
    #[arg(long, conflicts_with = "input")]
    example: bool,

    /// Read the graph from a file (stdin when absent)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Input format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Only print the final tree, without per-step narration or snapshots
    #[arg(long, short, default_value_t = false)]
    quiet: bool,

    /// Narrate every step but omit the dividers between them
    #[arg(long, default_value_t = false)]
    no_dividers: bool,

    /// Print the run as JSON instead of narration
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Reject negative edge weights
    #[arg(long, default_value_t = false)]
    non_negative: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `n m` followed by `m` lines of `u v w`
    Text,
    /// `{"vertices": n, "edges": [[u, v, w], ...]}`
    Json,
}

fn main() -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let graph = load_graph(&cli)?;

    let config = KruskalConfig::new()
        .with_snapshots(!cli.quiet)
        .with_weight_policy(if cli.non_negative {
            WeightPolicy::NonNegative
        } else {
            WeightPolicy::AllowNegative
        });

    let run = Kruskal::new(config)
        .run(graph.vertex_count, &graph.edges)
        .context("cannot compute spanning tree")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&run).context("cannot encode run as JSON")?;
        println!("{json}");
        return Ok(());
    }

    let title = format!(
        "Graph with n={}, m={} (id: u - v : weight):",
        graph.vertex_count,
        graph.edges.len()
    );
    let mut text = String::new();
    narrate::write_edge_table(&mut text, &title, &graph.edges)?;
    text.push('\n');
    text.push_str(&narrate::render(
        &run,
        NarrationOptions {
            verbose: !cli.quiet,
            dividers: !cli.no_dividers,
            show_sorted: !cli.quiet,
        },
    ));
    print!("{text}");

    Ok(())
}

fn load_graph(cli: &Cli) -> Result<GraphInput> {
    if cli.example {
        return Ok(GraphInput::example());
    }

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read graph from stdin")?;
            buf
        }
    };

    let graph = match cli.format {
        Format::Text => GraphInput::parse_text(&source),
        Format::Json => GraphInput::parse_json(&source),
    }
    .context("malformed graph description")?;

    Ok(graph)
}
