//! Influence timeline library - re-exports for testing and the binary.
//!
//! Pipeline stages, in order:
//!
//! - `loader`: `edges.csv` rows into `EdgeRecord`s
//! - `graph`: records folded into an undirected influence graph
//! - `layout`: timeline positions (year, rank)
//! - `traces`: fixed-shape list of chart layers
//! - `menu`: theme dropdown as visibility vectors
//! - `render` / `templates`: the self-contained HTML page

use std::fs;
use std::path::PathBuf;
use tracing::info;

pub mod error;
pub mod graph;
pub mod layout;
pub mod loader;
pub mod menu;
pub mod models;
pub mod render;
pub mod templates;
pub mod traces;


// ============================================================================
// Configuration
// ============================================================================

pub const INPUT_CSV: &str = "edges.csv";
pub const ASSETS_DIR: &str = "assets";
pub const OUTPUT_HTML: &str = "interactive.html";
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const CHART_TITLE: &str = "Interactive Timeline–Network with Theme Filters (Book-Level)";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub title: String,
    pub runtime_url: String,
}

impl PipelineConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_CSV),
            output_dir: PathBuf::from(ASSETS_DIR),
            output_file: OUTPUT_HTML.to_string(),
            title: CHART_TITLE.to_string(),
            runtime_url: PLOTLY_CDN_URL.to_string(),
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    pub records: usize,
    pub nodes: usize,
    pub edges: usize,
    pub themes: usize,
    pub traces: usize,
}

/// Setup step: create the output directory if needed.
pub fn ensure_output_dir(config: &PipelineConfig) -> Result<()> {
    fs::create_dir_all(&config.output_dir).map_err(|source| PipelineError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })
}

/// Load → build → layout → traces → menu → render, then one write.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    ensure_output_dir(config)?;

    let records = load_edges(&config.input)?;
    let graph = build_graph(&records);
    let positions = compute_positions(&graph);
    let themes = collect_themes(&records);
    let trace_set = build_traces(&graph, &positions, &themes);
    let menu = build_menu(&trace_set);

    let trace_count = trace_set.len();
    let figure = build_figure(&config.title, trace_set, menu);
    let html = render_document(&figure, &config.runtime_url)?;

    let output = config.output_path();
    write_document(&output, &html)?;

    info!(
        records = records.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        themes = themes.len(),
        traces = trace_count,
        "pipeline complete"
    );

    Ok(RunSummary {
        output,
        records: records.len(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        themes: themes.len(),
        traces: trace_count,
    })
}

// Re-export commonly used types
pub use error::{InputError, PipelineError, Result};

pub use graph::{build_graph, InfluenceEdge, InfluenceGraph, WorkNode};

pub use layout::{compute_positions, Position, Positions};

pub use loader::{collect_themes, load_edges, normalize_theme, parse_edges, parse_themes};

pub use menu::{build_menu, visibility_for_all, visibility_for_theme, ALL_THEMES_LABEL};

pub use models::{EdgeRecord, Figure, Trace, TraceRole, UpdateMenu};

pub use render::{build_figure, render_document, write_document};

pub use traces::{build_traces, edge_hover_text, ThemeFilter, TraceSet, RENDERED_WEIGHTS};
