//! Timeline layout: x is the node's year, y is its rank by year.

use crate::graph::InfluenceGraph;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

pub type Positions = HashMap<String, Position>;

/// Same-year nodes keep insertion order, so they stack instead of overlapping.
pub fn compute_positions(graph: &InfluenceGraph) -> Positions {
    let mut by_year: Vec<_> = graph.nodes().iter().collect();
    by_year.sort_by_key(|n| n.year);

    by_year
        .into_iter()
        .enumerate()
        .map(|(rank, node)| {
            (
                node.title.clone(),
                Position {
                    x: node.year,
                    y: rank as i64,
                },
            )
        })
        .collect()
}
