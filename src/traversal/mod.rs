//! Lazy traversals over hideable graphs.
//!
//! [`GraphSearch`] walks whatever implements [`Traversable`](crate::graph::Traversable),
//! in the order given by its [`Frontier`], and fills a [`PredecessorTree`] as it goes.
//! [`PredecessorWalk`] reads any [`PredecessorMap`] back from a node to the root.

mod frontier;
mod predecessor;
mod search;

pub use frontier::*;
pub use predecessor::*;
pub use search::*;

use crate::graph::{Direction, Edge, NodeId, Traversable};

/// Edges of a fewest-hops route from `start` to `end`, in walking order.
///
/// `None` if either node is hidden or `end` cannot be reached. From a node to itself
/// the route is empty.
pub fn find_path<G: Traversable>(
    graph: &G,
    start: NodeId,
    end: NodeId,
    direction: Direction,
) -> Option<Vec<Edge>> {
    if !graph.is_node_visible(start) || !graph.is_node_visible(end) {
        return None;
    }
    if start == end {
        return Some(Vec::new());
    }

    let options = SearchOptions {
        start: Some(start),
        iterate_all_edges: false,
        direction,
    };
    let mut search = BreadthFirstSearch::with_options(graph, options);
    search.by_ref().find(|(node, _)| *node == end)?;

    let mut edges = search.predecessors().walk(end).into_edges().ok()?;
    edges.reverse();
    Some(edges)
}
