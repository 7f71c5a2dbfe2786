use std::fmt::Display;

use crate::{
    error::GraphError,
    graph::{Direction, Edge, Graph, IncidentEdges, NodeId, Traversable},
    structure::Path,
    traversal::find_path,
};

/// A directed reading of a [`Graph`].
///
/// Storage, hiding and id allocation are those of the wrapped graph; this type only
/// decides that an edge leads from `start()` to `end()`. Out- and in-degrees are
/// counted from the incidence cache, so they cost O(degree).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectedGraph {
    graph: Graph,
}

impl DirectedGraph {
    pub fn new(node_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            graph: Graph::new(node_capacity, edge_capacity),
        }
    }

    pub fn is_directed(&self) -> bool {
        true
    }

    pub fn as_graph(&self) -> &Graph {
        &self.graph
    }

    /// Mutable access to the underlying graph. All of its mutators keep the caches
    /// consistent, so the directed view stays valid.
    pub fn as_graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn into_inner(self) -> Graph {
        self.graph
    }

    pub fn create_edge(&mut self, start: NodeId, end: NodeId) -> Result<Edge, GraphError> {
        self.graph.create_edge(start, end)
    }

    /// Visible edges leaving `node`.
    pub fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.graph
            .incident_edges(node)
            .filter(move |edge| edge.start() == node)
    }

    /// Visible edges entering `node`.
    pub fn incoming_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.graph
            .incident_edges(node)
            .filter(move |edge| edge.end() == node)
    }

    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing_edges(node).map(Edge::end)
    }

    pub fn predecessor_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming_edges(node).map(Edge::start)
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing_edges(node).count()
    }

    pub fn in_degree(&self, node: NodeId) -> usize {
        self.incoming_edges(node).count()
    }

    /// Every visible edge turned around, ids kept.
    pub fn reverse_graph(&self) -> DirectedGraph {
        DirectedGraph {
            graph: self.graph.reverse_graph(),
        }
    }

    /// Shortest path (by edge count) along visible edges, or `None` if `end` cannot
    /// be reached. A path from a node to itself is empty.
    pub fn path(&self, start: NodeId, end: NodeId) -> Option<Path> {
        let edges = find_path(self, start, end, Direction::Forward)?;
        Path::try_from_edges(edges).ok()
    }
}

impl From<Graph> for DirectedGraph {
    fn from(graph: Graph) -> Self {
        DirectedGraph { graph }
    }
}

impl Display for DirectedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.graph, f)
    }
}

/// Steps of a directed graph: outgoing edges forward, incoming edges in reverse.
pub struct DirectedSteps<'a> {
    node: NodeId,
    direction: Direction,
    edges: IncidentEdges<'a>,
}

impl<'a> Iterator for DirectedSteps<'a> {
    type Item = (NodeId, &'a Edge);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node;
        match self.direction {
            Direction::Forward => self
                .edges
                .find(|edge| edge.start() == node)
                .map(|edge| (edge.end(), edge)),
            Direction::Reverse => self
                .edges
                .find(|edge| edge.end() == node)
                .map(|edge| (edge.start(), edge)),
        }
    }
}

impl Traversable for DirectedGraph {
    type Steps<'a> = DirectedSteps<'a>;

    fn node_capacity(&self) -> usize {
        self.graph.node_capacity()
    }

    fn is_node_visible(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    fn first_visible_node(&self) -> Option<NodeId> {
        self.graph.nodes().next()
    }

    fn steps(&self, node: NodeId, direction: Direction) -> DirectedSteps<'_> {
        DirectedSteps {
            node,
            direction,
            edges: self.graph.incident_edges(node),
        }
    }
}
