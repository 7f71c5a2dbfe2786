use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    error::GraphError,
    graph::{Graph, NodeId},
};

/// An undirected multigraph on `nodes` nodes with exactly `edges` uniformly drawn edges
/// (self-loops and parallel edges allowed). The same seed always gives the same graph.
///
/// Fails with `UnknownNode` only when edges are requested on an empty node set.
pub fn random_graph(nodes: usize, edges: usize, seed: u64) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(nodes, edges);
    if edges == 0 {
        return Ok(graph);
    }
    if nodes == 0 {
        return Err(GraphError::UnknownNode { id: 0 });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..edges {
        let start = NodeId::new(rng.random_range(0..nodes));
        let end = NodeId::new(rng.random_range(0..nodes));
        graph.create_edge(start, end)?;
    }
    debug!(nodes, edges, seed, "generated random graph");
    Ok(graph)
}
