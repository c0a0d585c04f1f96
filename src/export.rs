use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::error::Result;
use crate::network::BenchmarkGraph;

#[derive(Serialize)]
pub struct EdgeEntry {
    pub source: u32,
    pub target: u32,
    pub weight: f64,
}

/// Serializable edge-list snapshot of a built network. Node labels are the
/// 1-based cell indices.
#[derive(Serialize)]
pub struct EdgeList {
    pub num_nodes: usize,
    pub edges: Vec<EdgeEntry>,
}

impl EdgeList {
    pub fn from_graph(graph: &BenchmarkGraph) -> Self {
        let edges = graph
            .edge_references()
            .map(|e| {
                let a = graph[e.source()];
                let b = graph[e.target()];
                EdgeEntry {
                    source: a.min(b),
                    target: a.max(b),
                    weight: *e.weight(),
                }
            })
            .collect();
        Self {
            num_nodes: graph.node_count(),
            edges,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
