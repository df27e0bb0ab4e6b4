//! Influence graph building.
//!
//! Folds edge records into an undirected simple graph keyed by work title.
//! Later records win: a node's year is the last year seen for its title, and
//! a repeated pair (in either orientation) replaces the earlier edge's
//! attributes outright.

use crate::models::EdgeRecord;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkNode {
    pub title: String,
    pub year: i64,
}

/// An influence edge. `source`/`target` are the orientation of the record
/// that last wrote this pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluenceEdge {
    pub source: String,
    pub target: String,
    pub weight: i64,
    pub themes: Vec<String>,
    pub note: String,
}

impl InfluenceEdge {
    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }
}

/// Nodes and edges are kept in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct InfluenceGraph {
    nodes: Vec<WorkNode>,
    node_index: HashMap<String, usize>,
    edges: Vec<InfluenceEdge>,
    edge_index: HashMap<(String, String), usize>,
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl InfluenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or overwrite the year of an existing one.
    pub fn upsert_node(&mut self, title: &str, year: i64) {
        match self.node_index.get(title) {
            Some(&idx) => self.nodes[idx].year = year,
            None => {
                self.node_index.insert(title.to_string(), self.nodes.len());
                self.nodes.push(WorkNode {
                    title: title.to_string(),
                    year,
                });
            }
        }
    }

    /// Insert an edge, or replace every attribute of the existing edge for
    /// this unordered pair. Endpoints must already exist.
    pub fn upsert_edge(&mut self, edge: InfluenceEdge) {
        let key = pair_key(&edge.source, &edge.target);
        match self.edge_index.get(&key) {
            Some(&idx) => self.edges[idx] = edge,
            None => {
                self.edge_index.insert(key, self.edges.len());
                self.edges.push(edge);
            }
        }
    }

    pub fn nodes(&self) -> &[WorkNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[InfluenceEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn year_of(&self, title: &str) -> Option<i64> {
        self.node_index.get(title).map(|&idx| self.nodes[idx].year)
    }

    pub fn edge_between(&self, a: &str, b: &str) -> Option<&InfluenceEdge> {
        self.edge_index.get(&pair_key(a, b)).map(|&idx| &self.edges[idx])
    }

    /// Degree per title. A self-loop adds 2 to its node.
    pub fn degrees(&self) -> HashMap<String, usize> {
        let mut degree: HashMap<String, usize> =
            self.nodes.iter().map(|n| (n.title.clone(), 0)).collect();
        for e in &self.edges {
            *degree.entry(e.source.clone()).or_insert(0) += 1;
            *degree.entry(e.target.clone()).or_insert(0) += 1;
        }
        degree
    }

    /// Degree divided by `n - 1`. A lone node has centrality 1.0.
    pub fn degree_centrality(&self) -> HashMap<String, f64> {
        let n = self.nodes.len();
        if n <= 1 {
            return self.nodes.iter().map(|node| (node.title.clone(), 1.0)).collect();
        }
        let scale = 1.0 / (n - 1) as f64;
        self.degrees()
            .into_iter()
            .map(|(title, deg)| (title, deg as f64 * scale))
            .collect()
    }
}

// ============================================================================
// Graph Building
// ============================================================================

pub fn build_graph(records: &[EdgeRecord]) -> InfluenceGraph {
    let mut graph = InfluenceGraph::new();

    for r in records {
        graph.upsert_node(&r.source_title, r.source_year);
        graph.upsert_node(&r.target_title, r.target_year);

        if r.source_title == r.target_title {
            warn!(title = %r.source_title, "self-referencing edge");
        }

        graph.upsert_edge(InfluenceEdge {
            source: r.source_title.clone(),
            target: r.target_title.clone(),
            weight: r.weight,
            themes: r.themes.clone(),
            note: r.note.clone(),
        });
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built influence graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_builds_nodes_and_edges() {
        let graph = build_graph(&[
            record("A", 1800, "B", 1810, 2, &["freedom"], ""),
            record("B", 1810, "C", 1850, 3, &["freedom", "abolition"], "x"),
        ]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.year_of("A"), Some(1800));
        assert_eq!(graph.year_of("B"), Some(1810));
        assert_eq!(graph.year_of("C"), Some(1850));
        let titles: Vec<&str> = graph.nodes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_node_year_last_write_wins() {
        let graph = build_graph(&[
            record("A", 1800, "B", 1810, 2, &[], ""),
            record("B", 1815, "C", 1850, 2, &[], ""),
            record("C", 1850, "A", 1799, 2, &[], ""),
        ]);
        assert_eq!(graph.year_of("A"), Some(1799));
        assert_eq!(graph.year_of("B"), Some(1815));
    }

    #[test]
    fn test_duplicate_pair_overwrites_without_merge() {
        let graph = build_graph(&[
            record("A", 1800, "B", 1810, 2, &["freedom"], "first"),
            record("A", 1800, "B", 1810, 3, &["abolition"], "second"),
        ]);
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edge_between("A", "B").unwrap();
        assert_eq!(edge.weight, 3);
        assert_eq!(edge.themes, vec!["abolition"]);
        assert_eq!(edge.note, "second");
    }

    #[test]
    fn test_reversed_pair_is_same_edge() {
        let graph = build_graph(&[
            record("A", 1800, "B", 1810, 2, &[], ""),
            record("B", 1810, "A", 1800, 3, &[], "back"),
        ]);
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edge_between("A", "B").unwrap();
        assert_eq!(edge.source, "B");
        assert_eq!(edge.target, "A");
        assert_eq!(edge.weight, 3);
    }

    #[test]
    fn test_self_loop_kept() {
        let graph = build_graph(&[record("A", 1800, "A", 1800, 2, &[], "")]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degrees()["A"], 2);
        assert_eq!(graph.degree_centrality()["A"], 1.0);
    }

    #[test]
    fn test_degree_centrality() {
        let graph = build_graph(&[
            record("A", 1800, "B", 1810, 2, &[], ""),
            record("B", 1810, "C", 1850, 3, &[], ""),
        ]);
        let cent = graph.degree_centrality();
        assert!((cent["A"] - 0.5).abs() < 1e-9);
        assert!((cent["B"] - 1.0).abs() < 1e-9);
        assert!((cent["C"] - 0.5).abs() < 1e-9);
    }
}
