//! Data structures for influence records and the rendered figure.
//!
//! The figure types serialize directly into the JSON shape the Plotly
//! runtime expects (`data` + `layout`), so field names follow Plotly's
//! attribute names rather than Rust conventions.

use serde::Serialize;

// ============================================================================
// Input Records
// ============================================================================

/// One parsed row of `edges.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source_title: String,
    pub source_year: i64,
    pub target_title: String,
    pub target_year: i64,
    pub weight: i64,
    /// Normalized themes, first-occurrence order, no duplicates.
    pub themes: Vec<String>,
    pub note: String,
}

// ============================================================================
// Traces
// ============================================================================

/// What a trace stands for. Not serialized; used to check the menu's
/// index contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceRole {
    /// Edges of one weight, optionally restricted to one theme.
    Edges { theme: Option<String>, weight: i64 },
    /// The single node-marker trace.
    Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: Vec<f64>,
    pub line: Line,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub name: String,
    pub x: Vec<Option<i64>>,
    pub y: Vec<Option<i64>>,
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    pub text: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hovertext: Vec<String>,
    pub hoverinfo: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub visible: bool,
    #[serde(skip)]
    pub role: TraceRole,
    /// True when the filter matched nothing and this is the hidden stand-in point.
    #[serde(skip)]
    pub placeholder: bool,
}

// ============================================================================
// Layout and Menu
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

/// Argument object of a Plotly `update` button.
#[derive(Debug, Clone, Serialize)]
pub struct VisibilityUpdate {
    pub visible: Vec<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuButton {
    pub label: String,
    pub method: &'static str,
    pub args: [VisibilityUpdate; 1],
}

impl MenuButton {
    pub fn visibility(&self) -> &[bool] {
        &self.args[0].visible
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub menu_type: &'static str,
    pub direction: &'static str,
    pub active: usize,
    pub buttons: Vec<MenuButton>,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub hovermode: &'static str,
    pub showlegend: bool,
    pub margin: Margin,
    pub updatemenus: Vec<UpdateMenu>,
}

/// Everything handed to `Plotly.newPlot`.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}
