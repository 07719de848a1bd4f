//! Human-readable narration of a finished run.
//!
//! Everything here is a projection over [`KruskalRun`]; nothing re-runs the
//! algorithm.

use crate::graph::{Edge, KruskalRun, SelectionStep};
use std::fmt::{self, Write};

const DIVIDER: &str = "----------------------------------------";

/// What to include in the narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrationOptions {
    /// Narrate each considered edge.
    pub verbose: bool,
    /// Print a divider after each narrated step.
    pub dividers: bool,
    /// List the edges in sorted order before the steps.
    pub show_sorted: bool,
}

impl Default for NarrationOptions {
    fn default() -> Self {
        Self {
            verbose: true,
            dividers: true,
            show_sorted: true,
        }
    }
}

/// Renders `run` as text.
pub fn render(run: &KruskalRun, opts: NarrationOptions) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_run(&mut out, run, opts);
    out
}

/// Writes `run` as text into `out`.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_run<W: Write>(out: &mut W, run: &KruskalRun, opts: NarrationOptions) -> fmt::Result {
    if opts.show_sorted {
        write_edge_table(out, "Edges sorted by weight (id: u - v : weight):", &run.sorted_edges)?;
        writeln!(out)?;
    }

    if opts.verbose {
        writeln!(out, "Starting Kruskal's algorithm...")?;
        writeln!(out)?;
        for step in &run.trace {
            write_step(out, step)?;
            if opts.dividers {
                writeln!(out, "{DIVIDER}")?;
            } else {
                writeln!(out)?;
            }
        }
    }

    let result = &run.result;
    if result.is_spanning_tree && !result.selected_edges.is_empty() {
        write!(
            out,
            "Spanning tree complete (selected {} edges)",
            result.selected_edges.len()
        )?;
        if run.stopped_early() {
            write!(out, "; {} edges not considered", run.unconsidered)?;
        }
        writeln!(out, ".")?;
    }
    if !result.is_spanning_tree {
        writeln!(
            out,
            "Warning: graph is not connected; result is a spanning forest of {} trees.",
            result.component_count()
        )?;
    }

    writeln!(out)?;
    write_edge_table(out, "Selected edges (id: u - v : weight):", &result.selected_edges)?;
    writeln!(out, "Total weight: {}", result.total_weight)
}

/// Writes one considered edge.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_step<W: Write>(out: &mut W, step: &SelectionStep) -> fmt::Result {
    let e = &step.edge;
    writeln!(out, "Considering edge {e}")?;
    writeln!(
        out,
        "  roots: find({}) = {}, find({}) = {}",
        e.u, step.root_u, e.v, step.root_v
    )?;
    if step.accepted {
        writeln!(out, "  => different components, SELECT")?;
        if let Some(components) = &step.components {
            writeln!(out, "  components: {components}")?;
        }
    } else {
        writeln!(out, "  => would form a cycle, SKIP")?;
    }
    Ok(())
}

/// Writes a titled `id: u - v : weight` table.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_edge_table<W: Write>(out: &mut W, title: &str, edges: &[Edge]) -> fmt::Result {
    writeln!(out, "{title}")?;
    for e in edges {
        writeln!(out, "{:>3}: {} - {} : {}", e.id, e.u, e.v, e.weight)?;
    }
    Ok(())
}
