use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use tracing::trace;

use crate::{
    graph::{Direction, Edge, NodeId, Traversable},
    sets::visited::{NodeBitset, VisitorSet},
    statistics::SearchStats,
    traversal::{Frontier, PredecessorTree},
};

/// Knobs of a [`GraphSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Root of the search. `None` picks the lowest visible node.
    pub start: Option<NodeId>,
    /// Also report edges that lead to already visited nodes.
    pub iterate_all_edges: bool,
    pub direction: Direction,
}

impl SearchOptions {
    pub fn from_node(start: NodeId) -> Self {
        SearchOptions {
            start: Some(start),
            ..SearchOptions::default()
        }
    }
}

/// A lazy traversal over the visible part of a graph.
///
/// Yields `(node, edge)` for every node reachable from the root, where `edge` is the
/// edge the node was discovered over. The root itself is never yielded. Discovering
/// edges are recorded in a [`PredecessorTree`] as the iterator advances.
///
/// One instance makes one pass. The graph is borrowed for the whole search, so it
/// cannot change underneath it.
pub struct GraphSearch<'g, G, F>
where
    G: Traversable + 'g,
    F: Frontier,
{
    graph: &'g G,
    options: SearchOptions,
    frontier: F,
    visited: NodeBitset,
    predecessors: PredecessorTree,
    current: Option<G::Steps<'g>>,
    stats: SearchStats,
}

/// First-in-first-out search, nodes come out by increasing hop distance.
pub type BreadthFirstSearch<'g, G> = GraphSearch<'g, G, VecDeque<NodeId>>;

/// Stack-ordered search.
pub type DepthFirstSearch<'g, G> = GraphSearch<'g, G, Vec<NodeId>>;

/// Always expands the lowest discovered node id next.
pub type LowestIdFirstSearch<'g, G> = GraphSearch<'g, G, BinaryHeap<Reverse<NodeId>>>;

impl<'g, G, F> GraphSearch<'g, G, F>
where
    G: Traversable + 'g,
    F: Frontier,
{
    /// Search from the lowest visible node, following edges forward.
    pub fn new(graph: &'g G) -> Self {
        Self::with_options(graph, SearchOptions::default())
    }

    pub fn with_options(graph: &'g G, options: SearchOptions) -> Self {
        let mut search = GraphSearch {
            graph,
            options,
            frontier: F::default(),
            visited: NodeBitset::new(graph.node_capacity()),
            predecessors: PredecessorTree::new(graph.node_capacity()),
            current: None,
            stats: SearchStats::new(),
        };

        match options.start.or_else(|| graph.first_visible_node()) {
            Some(start) if graph.is_node_visible(start) => {
                search.visited.set(start);
                search.frontier.push(start);
                search.stats.bump_nodes_discovered();
            }
            start => trace!(?start, "search has no visible root"),
        }
        search
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Edges over which the nodes yielded so far were discovered.
    pub fn predecessors(&self) -> &PredecessorTree {
        &self.predecessors
    }

    pub fn into_predecessors(self) -> PredecessorTree {
        self.predecessors
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// `true` once `node` has been reached (the root counts as reached).
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node)
    }

    /// Number of nodes reached so far, the root included.
    pub fn visited_count(&self) -> usize {
        self.visited.count()
    }
}

impl<'g, G, F> Iterator for GraphSearch<'g, G, F>
where
    G: Traversable + 'g,
    F: Frontier,
{
    type Item = (NodeId, Edge);

    fn next(&mut self) -> Option<(NodeId, Edge)> {
        loop {
            if let Some(steps) = self.current.as_mut() {
                for (neighbor, edge) in steps.by_ref() {
                    self.stats.bump_edges_scanned();
                    if !self.graph.is_node_visible(neighbor) {
                        continue;
                    }
                    if self.visited.visit(neighbor) {
                        self.frontier.push(neighbor);
                        self.predecessors.record(neighbor, *edge);
                        self.stats.bump_nodes_discovered();
                    } else if !self.options.iterate_all_edges {
                        continue;
                    }
                    self.stats.bump_edges_surfaced();
                    return Some((neighbor, *edge));
                }
                self.current = None;
            }

            let node = self.frontier.pop()?;
            let graph = self.graph;
            self.current = Some(graph.steps(node, self.options.direction));
        }
    }
}
