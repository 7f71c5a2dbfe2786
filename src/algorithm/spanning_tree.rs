use crate::{
    graph::{Edge, Graph},
    sets::mapping::IdMap,
};

/// Input of a minimum spanning tree computation: a graph and a length per edge.
///
/// Only visible edges take part; hidden edges keep their distance entry so that the
/// same mapping can be reused after showing them again.
#[derive(Debug, Clone, Copy)]
pub struct MinSpanningTreeProblem<'g> {
    graph: &'g Graph,
    distances: &'g IdMap<Edge, i64>,
}

impl<'g> MinSpanningTreeProblem<'g> {
    pub fn new(graph: &'g Graph, distances: &'g IdMap<Edge, i64>) -> Self {
        MinSpanningTreeProblem { graph, distances }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn distances(&self) -> &'g IdMap<Edge, i64> {
        self.distances
    }

    /// Length of `edge`, `None` if the mapping has no entry for its id.
    pub fn distance(&self, edge: &Edge) -> Option<i64> {
        self.distances.get(edge).copied()
    }

    /// Sum of the lengths of all visible edges that have one.
    pub fn total_distance(&self) -> i64 {
        self.graph
            .edges()
            .filter_map(|edge| self.distance(edge))
            .sum()
    }
}
