use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Anything that lives in an id-indexed slot.
///
/// The id doubles as the slot index, so it must stay fixed for the lifetime of the
/// element.
pub trait Identifiable {
    fn id(&self) -> usize;
}

/// Identity of a graph node. Nodes carry no payload beyond their id.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId {
    pub internal: usize,
}

impl NodeId {
    pub const fn new(internal: usize) -> Self {
        NodeId { internal }
    }
}

impl Identifiable for NodeId {
    fn id(&self) -> usize {
        self.internal
    }
}

impl Debug for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal)
    }
}

impl From<usize> for NodeId {
    fn from(internal: usize) -> Self {
        NodeId { internal }
    }
}

/// Identity of an edge slot.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId {
    pub internal: usize,
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal)
    }
}

/// An immutable ordered pair of nodes with its own id.
///
/// Undirected graphs store one `Edge` per connection and expose it from both endpoints.
/// Inside one graph ids are unique, so comparing all fields agrees with comparing ids;
/// comparing all fields additionally tells apart two different edges that claim the
/// same id.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    start: NodeId,
    end: NodeId,
}

impl Edge {
    pub fn new(id: usize, start: NodeId, end: NodeId) -> Self {
        Edge {
            id: EdgeId { internal: id },
            start,
            end,
        }
    }

    pub fn id(&self) -> usize {
        self.id.internal
    }

    pub fn edge_id(&self) -> EdgeId {
        self.id
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }

    pub fn is_incident_to(&self, node: NodeId) -> bool {
        self.start == node || self.end == node
    }

    /// The endpoint across from `node`. For a node that is not an endpoint the start
    /// node is returned.
    pub fn opposite(&self, node: NodeId) -> NodeId {
        if self.start == node {
            self.end
        } else {
            self.start
        }
    }

    /// Renders the edge as its node pair, e.g. `(0,1)`.
    pub fn nodes_to_string(&self) -> String {
        format!("({},{})", self.start, self.end)
    }
}

impl Identifiable for Edge {
    fn id(&self) -> usize {
        Edge::id(self)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let edge = Edge::new(4, NodeId::new(1), NodeId::new(2));
        assert_eq!(edge.id(), 4);
        assert_eq!(edge.edge_id(), EdgeId { internal: 4 });
        assert_eq!(edge.start(), NodeId::new(1));
        assert_eq!(edge.end(), NodeId::new(2));
        assert!(!edge.is_loop());
    }

    #[test]
    fn test_opposite_endpoint() {
        let edge = Edge::new(0, NodeId::new(3), NodeId::new(5));
        assert_eq!(edge.opposite(NodeId::new(3)), NodeId::new(5));
        assert_eq!(edge.opposite(NodeId::new(5)), NodeId::new(3));

        let self_loop = Edge::new(1, NodeId::new(2), NodeId::new(2));
        assert!(self_loop.is_loop());
        assert_eq!(self_loop.opposite(NodeId::new(2)), NodeId::new(2));
    }

    #[test]
    fn test_incidence() {
        let edge = Edge::new(0, NodeId::new(3), NodeId::new(5));
        assert!(edge.is_incident_to(NodeId::new(3)));
        assert!(edge.is_incident_to(NodeId::new(5)));
        assert!(!edge.is_incident_to(NodeId::new(4)));
    }

    #[test]
    fn test_rendering() {
        let edge = Edge::new(12, NodeId::new(0), NodeId::new(7));
        assert_eq!(format!("{edge}"), "12");
        assert_eq!(edge.nodes_to_string(), "(0,7)");
        assert_eq!(format!("{:?}", NodeId::new(7)), "7");
    }

    #[test]
    fn test_edges_with_same_id_but_other_endpoints_differ() {
        let a = Edge::new(0, NodeId::new(0), NodeId::new(1));
        let b = Edge::new(0, NodeId::new(1), NodeId::new(0));
        assert_ne!(a, b);
        assert_eq!(a, Edge::new(0, NodeId::new(0), NodeId::new(1)));
    }
}
