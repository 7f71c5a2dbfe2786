use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::{
    error::GraphError,
    graph::{Edge, NodeId},
    sets::{mapping::IdMap, visited::VisitorSet},
};

/// Anything that can answer "which edge led to this node".
pub trait PredecessorMap {
    fn predecessor(&self, node: NodeId) -> Option<Edge>;

    /// Walks from `from` back towards the root of the map.
    fn walk(&self, from: NodeId) -> PredecessorWalk<'_, Self> {
        PredecessorWalk::new(self, from)
    }
}

/// Discovering edges of one traversal, dense over the node ids of its graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredecessorTree {
    edges: IdMap<NodeId, Option<Edge>>,
}

impl PredecessorTree {
    pub fn new(node_capacity: usize) -> Self {
        PredecessorTree {
            edges: IdMap::with_domain(node_capacity),
        }
    }

    /// Records `edge` as the way `node` was reached. Returns the previous entry.
    pub fn record(&mut self, node: NodeId, edge: Edge) -> Option<Edge> {
        self.edges.set(&node, Some(edge))
    }

    /// Number of nodes with a recorded edge.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// `(node, edge)` pairs in node id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Edge)> + '_ {
        self.edges
            .iter()
            .filter_map(|(id, edge)| edge.map(|edge| (NodeId::new(id), edge)))
    }
}

impl PredecessorMap for PredecessorTree {
    fn predecessor(&self, node: NodeId) -> Option<Edge> {
        self.edges.get(&node).copied().flatten()
    }
}

impl PredecessorMap for HashMap<NodeId, Edge> {
    fn predecessor(&self, node: NodeId) -> Option<Edge> {
        self.get(&node).copied()
    }
}

/// Lazy walk over predecessor edges, from a node back to the root.
///
/// Each step moves to the far endpoint of the emitted edge, so the walk follows
/// trees built in either direction. A node seen twice means the map is cyclic: the
/// walk then stops before emitting the edge that closes the cycle.
pub struct PredecessorWalk<'m, M: PredecessorMap + ?Sized> {
    map: &'m M,
    current: NodeId,
    seen: HashSet<NodeId>,
    cycle_at: Option<NodeId>,
    finished: bool,
}

impl<'m, M: PredecessorMap + ?Sized> PredecessorWalk<'m, M> {
    pub fn new(map: &'m M, from: NodeId) -> Self {
        let mut seen: HashSet<NodeId> = HashSet::new();
        seen.set(from);
        PredecessorWalk {
            map,
            current: from,
            seen,
            cycle_at: None,
            finished: false,
        }
    }

    /// `true` once the walk stopped on a repeated node.
    pub fn cycle_detected(&self) -> bool {
        self.cycle_at.is_some()
    }

    /// Runs the walk to its end. Fails if the map turned out to be cyclic.
    pub fn into_edges(mut self) -> Result<Vec<Edge>, GraphError> {
        let edges: Vec<Edge> = self.by_ref().collect();
        match self.cycle_at {
            Some(node) => Err(GraphError::CycleDetected { node: node.internal }),
            None => Ok(edges),
        }
    }
}

impl<M: PredecessorMap + ?Sized> Iterator for PredecessorWalk<'_, M> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        if self.finished {
            return None;
        }
        let Some(edge) = self.map.predecessor(self.current) else {
            self.finished = true;
            return None;
        };
        let next = edge.opposite(self.current);
        if !self.seen.visit(next) {
            debug!(node = next.internal, edge = edge.id(), "predecessor walk hit a cycle");
            self.cycle_at = Some(next);
            self.finished = true;
            return None;
        }
        self.current = next;
        Some(edge)
    }
}
