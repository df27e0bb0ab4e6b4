//! Trace generation.
//!
//! Every chart layer is built once, up front. The dropdown only flips
//! visibility, so the trace list has a fixed shape:
//!
//! ```text
//! [all w2, all w3, theme_0 w2, theme_0 w3, ..., theme_n w3, nodes]
//! ```
//!
//! A (theme, weight) combination with no matching edges still gets a slot,
//! filled by a hidden single-point placeholder.

use crate::graph::{InfluenceEdge, InfluenceGraph};
use crate::layout::Positions;
use crate::models::{Line, Marker, Trace, TraceRole};
use std::collections::HashMap;
use tracing::debug;

/// Only these weights are drawn; weight 1 edges stay in the graph but never
/// reach the chart.
pub const RENDERED_WEIGHTS: [i64; 2] = [2, 3];

// ============================================================================
// Filters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeFilter {
    All,
    Theme(String),
}

impl ThemeFilter {
    pub fn accepts(&self, edge: &InfluenceEdge) -> bool {
        match self {
            ThemeFilter::All => true,
            ThemeFilter::Theme(theme) => edge.has_theme(theme),
        }
    }

    fn slug(&self) -> &str {
        match self {
            ThemeFilter::All => "all",
            ThemeFilter::Theme(theme) => theme,
        }
    }

    fn theme(&self) -> Option<String> {
        match self {
            ThemeFilter::All => None,
            ThemeFilter::Theme(theme) => Some(theme.clone()),
        }
    }
}

// ============================================================================
// Edge Traces
// ============================================================================

pub fn edge_line_width(weight: i64) -> f64 {
    2.5 * weight as f64
}

pub fn edge_hover_text(edge: &InfluenceEdge) -> String {
    let themes = if edge.themes.is_empty() {
        "—".to_string()
    } else {
        edge.themes.join(", ")
    };
    format!(
        "{} → {}<br>Themes: {}<br>Influence: {} / 3<br>{}",
        edge.source, edge.target, themes, edge.weight, edge.note
    )
}

/// One line trace for every edge passing `filter` with exactly `weight`.
/// `shown` is the initial visibility when the trace is non-empty.
pub fn build_edge_trace(
    graph: &InfluenceGraph,
    positions: &Positions,
    filter: &ThemeFilter,
    weight: i64,
    shown: bool,
) -> Trace {
    let suffix = format!("{}_w{}", filter.slug(), weight);
    let role = TraceRole::Edges {
        theme: filter.theme(),
        weight,
    };

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut text = Vec::new();

    for edge in graph.edges() {
        if edge.weight != weight || !filter.accepts(edge) {
            continue;
        }
        let (Some(p0), Some(p1)) = (positions.get(&edge.source), positions.get(&edge.target)) else {
            continue;
        };
        let hover = edge_hover_text(edge);
        x.extend([Some(p0.x), Some(p1.x), None]);
        y.extend([Some(p0.y), Some(p1.y), None]);
        text.extend([Some(hover.clone()), Some(hover), None]);
    }

    if x.is_empty() {
        return Trace {
            trace_type: "scatter",
            name: format!("edges_{}", suffix),
            x: vec![None],
            y: vec![None],
            mode: "lines",
            line: Some(Line { width: 1.0 }),
            marker: None,
            text: Vec::new(),
            hovertext: Vec::new(),
            hoverinfo: "text",
            textposition: None,
            opacity: None,
            visible: false,
            role,
            placeholder: true,
        };
    }

    Trace {
        trace_type: "scatter",
        name: format!("Edges_{} (w={})", suffix, weight),
        x,
        y,
        mode: "lines",
        line: Some(Line {
            width: edge_line_width(weight),
        }),
        marker: None,
        text,
        hovertext: Vec::new(),
        hoverinfo: "text",
        textposition: None,
        opacity: Some(0.6),
        visible: shown,
        role,
        placeholder: false,
    }
}

// ============================================================================
// Node Trace
// ============================================================================

pub fn node_marker_size(centrality: f64) -> f64 {
    18.0 + 40.0 * centrality
}

/// Markers for every node. Centrality is over the whole graph, not the
/// active theme.
pub fn build_node_trace(
    graph: &InfluenceGraph,
    positions: &Positions,
    centrality: &HashMap<String, f64>,
) -> Trace {
    let mut x = Vec::with_capacity(graph.node_count());
    let mut y = Vec::with_capacity(graph.node_count());
    let mut text = Vec::with_capacity(graph.node_count());
    let mut hovertext = Vec::with_capacity(graph.node_count());
    let mut size = Vec::with_capacity(graph.node_count());

    for node in graph.nodes() {
        let Some(pos) = positions.get(&node.title) else {
            continue;
        };
        let cent = centrality.get(&node.title).copied().unwrap_or(0.0);
        x.push(Some(pos.x));
        y.push(Some(pos.y));
        text.push(Some(format!("{}<br>Year≈{}", node.title, node.year)));
        hovertext.push(format!(
            "{}<br>Approx. year: {}<br>Degree centrality: {:.2}",
            node.title, node.year, cent
        ));
        size.push(node_marker_size(cent));
    }

    Trace {
        trace_type: "scatter",
        name: "Works".to_string(),
        x,
        y,
        mode: "markers+text",
        line: None,
        marker: Some(Marker {
            size,
            line: Line { width: 1.0 },
        }),
        text,
        hovertext,
        hoverinfo: "text",
        textposition: Some("top center"),
        opacity: None,
        visible: true,
        role: TraceRole::Nodes,
        placeholder: false,
    }
}

// ============================================================================
// Trace Set
// ============================================================================

/// The full, fixed-shape trace list plus the index contract the menu uses.
#[derive(Debug, Clone)]
pub struct TraceSet {
    traces: Vec<Trace>,
    themes: Vec<String>,
}

impl TraceSet {
    /// Trace count for a given number of themes.
    pub fn expected_len(theme_count: usize) -> usize {
        RENDERED_WEIGHTS.len() * (theme_count + 1) + 1
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn into_traces(self) -> Vec<Trace> {
        self.traces
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Indices of the unfiltered w2/w3 traces.
    pub fn aggregate_indices(&self) -> [usize; 2] {
        [0, 1]
    }

    /// Indices of the w2/w3 traces for `themes()[theme_pos]`.
    pub fn theme_indices(&self, theme_pos: usize) -> [usize; 2] {
        let base = RENDERED_WEIGHTS.len() * (theme_pos + 1);
        [base, base + 1]
    }

    pub fn node_index(&self) -> usize {
        RENDERED_WEIGHTS.len() * (self.themes.len() + 1)
    }
}

/// `themes` must be sorted and distinct; it fixes the per-theme slot order.
pub fn build_traces(graph: &InfluenceGraph, positions: &Positions, themes: &[String]) -> TraceSet {
    let mut traces = Vec::with_capacity(TraceSet::expected_len(themes.len()));

    for weight in RENDERED_WEIGHTS {
        traces.push(build_edge_trace(graph, positions, &ThemeFilter::All, weight, true));
    }

    for theme in themes {
        let filter = ThemeFilter::Theme(theme.clone());
        for weight in RENDERED_WEIGHTS {
            traces.push(build_edge_trace(graph, positions, &filter, weight, false));
        }
    }

    let centrality = graph.degree_centrality();
    traces.push(build_node_trace(graph, positions, &centrality));

    debug!(
        traces = traces.len(),
        placeholders = traces.iter().filter(|t| t.placeholder).count(),
        "built traces"
    );

    TraceSet {
        traces,
        themes: themes.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::layout::compute_positions;
    use crate::loader::collect_themes;
    use crate::models::EdgeRecord;
    use proptest::prelude::*;

    fn record(src: &str, sy: i64, tgt: &str, ty: i64, w: i64, themes: &[&str], note: &str) -> EdgeRecord {
        EdgeRecord {
            source_title: src.to_string(),
            source_year: sy,
            target_title: tgt.to_string(),
            target_year: ty,
            weight: w,
            themes: themes.iter().map(|t| t.to_string()).collect(),
            note: note.to_string(),
        }
    }

    fn traces_for(records: &[EdgeRecord]) -> TraceSet {
        let graph = build_graph(records);
        let positions = compute_positions(&graph);
        build_traces(&graph, &positions, &collect_themes(records))
    }

    fn sample() -> Vec<EdgeRecord> {
        vec![
            record("A", 1800, "B", 1810, 2, &["freedom"], ""),
            record("B", 1810, "C", 1850, 3, &["freedom", "abolition"], "x"),
        ]
    }

    #[test]
    fn test_trace_count_and_order() {
        let set = traces_for(&sample());
        assert_eq!(set.len(), 7);
        let roles: Vec<TraceRole> = set.traces().iter().map(|t| t.role.clone()).collect();
        let edges = |theme: Option<&str>, weight| TraceRole::Edges {
            theme: theme.map(str::to_string),
            weight,
        };
        assert_eq!(
            roles,
            vec![
                edges(None, 2),
                edges(None, 3),
                edges(Some("abolition"), 2),
                edges(Some("abolition"), 3),
                edges(Some("freedom"), 2),
                edges(Some("freedom"), 3),
                TraceRole::Nodes,
            ]
        );
    }

    #[test]
    fn test_index_accessors_match_roles() {
        let set = traces_for(&sample());
        for i in set.aggregate_indices() {
            assert!(matches!(set.traces()[i].role, TraceRole::Edges { theme: None, .. }));
        }
        for (pos, theme) in set.themes().iter().enumerate() {
            let [w2, w3] = set.theme_indices(pos);
            assert_eq!(
                set.traces()[w2].role,
                TraceRole::Edges { theme: Some(theme.clone()), weight: 2 }
            );
            assert_eq!(
                set.traces()[w3].role,
                TraceRole::Edges { theme: Some(theme.clone()), weight: 3 }
            );
        }
        assert_eq!(set.traces()[set.node_index()].role, TraceRole::Nodes);
    }

    #[test]
    fn test_hover_text_for_multi_theme_edge() {
        let set = traces_for(&sample());
        let all_w3 = &set.traces()[1];
        let hover = all_w3.text[0].as_deref().unwrap();
        assert!(hover.starts_with("B → C<br>"));
        assert!(hover.contains("Themes: freedom, abolition"));
        assert!(hover.contains("Influence: 3 / 3"));
        assert!(hover.ends_with("<br>x"));
    }

    #[test]
    fn test_hover_text_without_themes_uses_dash() {
        let edge = InfluenceEdge {
            source: "A".into(),
            target: "B".into(),
            weight: 2,
            themes: vec![],
            note: String::new(),
        };
        assert_eq!(edge_hover_text(&edge), "A → B<br>Themes: —<br>Influence: 2 / 3<br>");
    }

    #[test]
    fn test_segment_layout() {
        let set = traces_for(&sample());
        let all_w2 = &set.traces()[0];
        assert_eq!(all_w2.x, vec![Some(1800), Some(1810), None]);
        assert_eq!(all_w2.y, vec![Some(0), Some(1), None]);
        assert_eq!(all_w2.text.len(), 3);
        assert_eq!(all_w2.text[2], None);
        assert_eq!(all_w2.line, Some(Line { width: 5.0 }));
        assert_eq!(set.traces()[1].line, Some(Line { width: 7.5 }));
    }

    #[test]
    fn test_empty_combination_is_hidden_placeholder() {
        let set = traces_for(&sample());
        // abolition only appears on the weight-3 edge.
        let [w2, _] = set.theme_indices(0);
        let trace = &set.traces()[w2];
        assert!(trace.placeholder);
        assert!(!trace.visible);
        assert_eq!(trace.x, vec![None]);
        assert_eq!(trace.y, vec![None]);
        assert_eq!(trace.name, "edges_abolition_w2");
    }

    #[test]
    fn test_weight_one_never_drawn() {
        let set = traces_for(&[record("A", 1800, "B", 1810, 1, &["grief"], "")]);
        assert_eq!(set.len(), 5);
        for trace in &set.traces()[..set.node_index()] {
            assert!(trace.placeholder);
        }
        let nodes = &set.traces()[set.node_index()];
        assert_eq!(nodes.x.len(), 2);
    }

    #[test]
    fn test_initial_visibility() {
        let set = traces_for(&sample());
        assert!(set.traces()[0].visible);
        assert!(set.traces()[1].visible);
        for pos in 0..set.themes().len() {
            for i in set.theme_indices(pos) {
                assert!(!set.traces()[i].visible);
            }
        }
        assert!(set.traces()[set.node_index()].visible);
    }

    #[test]
    fn test_node_trace_labels_and_sizes() {
        let set = traces_for(&sample());
        let nodes = &set.traces()[set.node_index()];
        assert_eq!(nodes.name, "Works");
        assert_eq!(nodes.text[1].as_deref(), Some("B<br>Year≈1810"));
        assert_eq!(nodes.hovertext[1], "B<br>Approx. year: 1810<br>Degree centrality: 1.00");
        let sizes = &nodes.marker.as_ref().unwrap().size;
        assert_eq!(sizes, &vec![38.0, 58.0, 38.0]);
    }

    #[test]
    fn test_theme_filter_accepts() {
        let edge = InfluenceEdge {
            source: "A".into(),
            target: "B".into(),
            weight: 2,
            themes: vec!["freedom".into()],
            note: String::new(),
        };
        assert!(ThemeFilter::All.accepts(&edge));
        assert!(ThemeFilter::Theme("freedom".into()).accepts(&edge));
        assert!(!ThemeFilter::Theme("abolition".into()).accepts(&edge));
    }

    proptest! {
        #[test]
        fn prop_trace_count_matches_theme_count(
            rows in prop::collection::vec(
                (0usize..5, 1700i64..1900, 0usize..5, 1700i64..1900, 1i64..=3,
                 prop::collection::vec("[a-d]", 0..3)),
                1..12,
            )
        ) {
            let titles = ["A", "B", "C", "D", "E"];
            let records: Vec<EdgeRecord> = rows
                .iter()
                .map(|(s, sy, t, ty, w, themes)| EdgeRecord {
                    source_title: titles[*s].to_string(),
                    source_year: *sy,
                    target_title: titles[*t].to_string(),
                    target_year: *ty,
                    weight: *w,
                    themes: themes.clone(),
                    note: String::new(),
                })
                .collect();
            let themes = collect_themes(&records);
            let set = traces_for(&records);
            prop_assert_eq!(set.len(), 2 + 2 * themes.len() + 1);
            prop_assert_eq!(set.len(), TraceSet::expected_len(themes.len()));
            prop_assert_eq!(set.node_index(), set.len() - 1);
        }
    }
}
