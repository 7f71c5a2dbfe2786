//! Error types shared by the graph structures and loaders.

use thiserror::Error;

use crate::graph::Edge;

/// Failures of structural graph operations.
///
/// Missing lookups are not errors: they come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No free slot is left, an id lies beyond the capacity, or a shrink would cut
    /// off occupied ids.
    #[error("capacity {capacity} is too small, {required} slots are required")]
    CapacityExceeded { capacity: usize, required: usize },

    /// A different element already sits at this id.
    #[error("slot {id} is already occupied by a different element")]
    SlotOccupied { id: usize },

    /// An edge endpoint refers to a node the graph does not hold.
    #[error("node {id} is not part of the graph")]
    UnknownNode { id: usize },

    /// An edge id names no stored edge.
    #[error("edge {id} is not part of the graph")]
    UnknownEdge { id: usize },

    /// The edge does not chain onto the path it was offered to.
    #[error("edge {edge} does not continue the path")]
    InconsistentPathEdge { edge: Edge },

    /// Walking a predecessor map came back to an already visited node.
    #[error("predecessor map contains a cycle through node {node}")]
    CycleDetected { node: usize },
}

/// Failures while reading a graph description from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read graph description: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("graph description is inconsistent: {0}")]
    Graph(#[from] GraphError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    #[test]
    fn test_messages_name_the_offending_ids() {
        let err = GraphError::CapacityExceeded {
            capacity: 4,
            required: 5,
        };
        assert_eq!(
            err.to_string(),
            "capacity 4 is too small, 5 slots are required"
        );

        let err = GraphError::SlotOccupied { id: 7 };
        assert_eq!(
            err.to_string(),
            "slot 7 is already occupied by a different element"
        );

        let edge = Edge::new(3, NodeId::new(0), NodeId::new(1));
        let err = GraphError::InconsistentPathEdge { edge };
        assert_eq!(err.to_string(), "edge 3 does not continue the path");
    }

    #[test]
    fn test_load_error_wraps_graph_error() {
        let err: LoadError = GraphError::UnknownNode { id: 9 }.into();
        assert!(matches!(err, LoadError::Graph(GraphError::UnknownNode { id: 9 })));
        assert!(err.to_string().contains("node 9"));
    }
}
