use std::{collections::VecDeque, fmt::Display};

use crate::{
    error::GraphError,
    graph::{Edge, NodeId},
};

/// A directed edge sequence where every edge ends where the next one starts.
///
/// Both ends can grow and shrink. An edge that does not chain onto the end it is added
/// to is refused and the path stays as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    edges: VecDeque<Edge>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    /// Builds a path from edges in walking order.
    pub fn try_from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut path = Path::new();
        for edge in edges {
            if !path.add_last_edge(edge) {
                return Err(GraphError::InconsistentPathEdge { edge });
            }
        }
        Ok(path)
    }

    /// Prepends `edge` if it ends at the current start.
    pub fn add_first_edge(&mut self, edge: Edge) -> bool {
        match self.start() {
            Some(start) if edge.end() != start => false,
            _ => {
                self.edges.push_front(edge);
                true
            }
        }
    }

    /// Appends `edge` if it starts at the current end.
    pub fn add_last_edge(&mut self, edge: Edge) -> bool {
        match self.end() {
            Some(end) if edge.start() != end => false,
            _ => {
                self.edges.push_back(edge);
                true
            }
        }
    }

    pub fn remove_first_edge(&mut self) -> bool {
        self.edges.pop_front().is_some()
    }

    pub fn remove_last_edge(&mut self) -> bool {
        self.edges.pop_back().is_some()
    }

    pub fn first(&self) -> Option<&Edge> {
        self.edges.front()
    }

    pub fn last(&self) -> Option<&Edge> {
        self.edges.back()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn start(&self) -> Option<NodeId> {
        self.first().map(Edge::start)
    }

    pub fn end(&self) -> Option<NodeId> {
        self.last().map(Edge::end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// The node pairs of the edges, e.g. `(0,1) (1,2)`.
    pub fn nodes_to_string(&self) -> String {
        self.edges
            .iter()
            .map(Edge::nodes_to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Edge;
    type IntoIter = std::collections::vec_deque::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{edge}")?;
        }
        write!(f, "}}")
    }
}
