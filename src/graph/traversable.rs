use crate::graph::{Edge, Graph, IncidentEdges, NodeId};

/// Which way a traversal follows edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// The view of a graph that traversals need.
///
/// A step is an `(neighbor, edge)` pair: the edge leaves the current node and the
/// neighbor is where it leads in the requested direction. Implementations only
/// yield visible edges.
pub trait Traversable {
    /// Iterator over the steps out of one node.
    type Steps<'a>: Iterator<Item = (NodeId, &'a Edge)>
    where
        Self: 'a;

    /// Upper bound (exclusive) for node ids.
    fn node_capacity(&self) -> usize;

    /// `true` for a node that exists and is not hidden.
    fn is_node_visible(&self, node: NodeId) -> bool;

    /// Lowest visible node id, the default traversal root.
    fn first_visible_node(&self) -> Option<NodeId>;

    fn steps(&self, node: NodeId, direction: Direction) -> Self::Steps<'_>;
}

/// Steps of an undirected graph: every visible incident edge, leading to its
/// opposite endpoint whichever the direction.
pub struct UndirectedSteps<'a> {
    node: NodeId,
    edges: IncidentEdges<'a>,
}

impl<'a> Iterator for UndirectedSteps<'a> {
    type Item = (NodeId, &'a Edge);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node;
        self.edges.next().map(|edge| (edge.opposite(node), edge))
    }
}

impl Traversable for Graph {
    type Steps<'a> = UndirectedSteps<'a>;

    fn node_capacity(&self) -> usize {
        Graph::node_capacity(self)
    }

    fn is_node_visible(&self, node: NodeId) -> bool {
        self.contains_node(node)
    }

    fn first_visible_node(&self) -> Option<NodeId> {
        self.nodes().next()
    }

    fn steps(&self, node: NodeId, _direction: Direction) -> UndirectedSteps<'_> {
        UndirectedSteps {
            node,
            edges: self.incident_edges(node),
        }
    }
}
