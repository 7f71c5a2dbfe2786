use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use tracing::{debug, trace};

use crate::{
    error::GraphError,
    graph::{Edge, EdgeId, IncidentEdges, NodeId},
    sets::{hiding::HidingSet, mapping::IdMap},
};

/// Number of edges rendered per line by the debug formatters.
const EDGES_PER_LINE: usize = 10;

/// Mutable undirected graph whose nodes and edges can be hidden.
///
/// A hidden element behaves as if it were deleted, except that it keeps its id and
/// its place in the incidence caches and can be shown again in O(1). This makes it
/// cheap to restrict a graph to a subgraph over and over, e.g. for residual networks.
///
/// # Invariants
/// - Node ids `0..node_capacity()` are all present (visible or hidden).
/// - `degree(n)` is the number of visible edges with `n` as an endpoint.
/// - `incidence[n]` lists every edge ever added with `n` as an endpoint, in insertion
///   order, hidden or not. A self-loop is listed and counted once.
/// - Every mutation goes through a method that updates the caches in the same call;
///   the underlying stores are never handed out mutably.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: HidingSet<NodeId>,
    edges: HidingSet<Edge>,
    incidence: IdMap<NodeId, Vec<EdgeId>>,
    degree: IdMap<NodeId, usize>,
    last_created_edge: Option<usize>,
}

impl Graph {
    /// A graph with nodes `0..node_capacity` and room for `edge_capacity` edges.
    /// Runtime O(node_capacity + edge_capacity).
    pub fn new(node_capacity: usize, edge_capacity: usize) -> Self {
        Graph {
            nodes: HidingSet::filled(node_capacity, NodeId::new),
            edges: HidingSet::new(edge_capacity),
            incidence: IdMap::with_domain(node_capacity),
            degree: IdMap::with_domain(node_capacity),
            last_created_edge: None,
        }
    }

    pub fn is_directed(&self) -> bool {
        false
    }

    /// Number of visible nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of visible edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_count_all(&self) -> usize {
        self.nodes.len_all()
    }

    pub fn edge_count_all(&self) -> usize {
        self.edges.len_all()
    }

    pub fn node_capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub fn edge_capacity(&self) -> usize {
        self.edges.capacity()
    }

    /// Visible nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        self.nodes.iter().copied()
    }

    /// Visible edges in id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn all_nodes(&self) -> impl Iterator<Item = NodeId> {
        self.nodes.iter_all().copied()
    }

    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter_all()
    }

    pub fn hidden_nodes(&self) -> impl Iterator<Item = NodeId> {
        self.nodes.iter_hidden().copied()
    }

    pub fn hidden_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter_hidden()
    }

    /// The visible node with this id.
    pub fn node(&self, id: usize) -> Option<NodeId> {
        self.nodes.get(id).copied()
    }

    /// The visible edge with this id.
    pub fn edge(&self, id: usize) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn edge_even_if_hidden(&self, id: usize) -> Option<&Edge> {
        self.edges.get_even_if_hidden(id)
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn is_node_hidden(&self, node: NodeId) -> bool {
        self.nodes.is_hidden(node.internal)
    }

    pub fn is_edge_hidden(&self, edge: EdgeId) -> bool {
        self.edges.is_hidden(edge.internal)
    }

    /// Visible edges incident to `node`, in insertion order. O(1) to create.
    pub fn incident_edges(&self, node: NodeId) -> IncidentEdges<'_> {
        match self.incidence.get(&node) {
            Some(ids) => IncidentEdges::visible(ids, &self.edges),
            None => IncidentEdges::empty(&self.edges),
        }
    }

    /// Incident edges of `node` including hidden ones.
    pub fn incident_edges_all(&self, node: NodeId) -> IncidentEdges<'_> {
        match self.incidence.get(&node) {
            Some(ids) => IncidentEdges::all(ids, &self.edges),
            None => IncidentEdges::empty(&self.edges),
        }
    }

    /// Opposite endpoints of the visible incident edges of `node`. A node joined by
    /// several edges shows up once per edge.
    pub fn adjacent_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incident_edges(node).map(move |edge| edge.opposite(node))
    }

    /// Number of visible edges incident to `node`. O(1).
    pub fn degree(&self, node: NodeId) -> usize {
        self.degree.get(&node).copied().unwrap_or(0)
    }

    /// First visible edge in the incidence list of `start` that ends at `end`.
    /// Runtime O(degree(start)).
    pub fn edge_between(&self, start: NodeId, end: NodeId) -> Option<&Edge> {
        self.incident_edges(start)
            .find(|edge| edge.start() == start && edge.end() == end)
    }

    /// Like [`Graph::edge_between`] but hidden edges match too.
    pub fn edge_between_all(&self, start: NodeId, end: NodeId) -> Option<&Edge> {
        self.incident_edges_all(start)
            .find(|edge| edge.start() == start && edge.end() == end)
    }

    /// All visible edges from `start` to `end`.
    pub fn edges_between(&self, start: NodeId, end: NodeId) -> Vec<&Edge> {
        self.incident_edges(start)
            .filter(|edge| edge.start() == start && edge.end() == end)
            .collect()
    }

    pub fn exists_edge(&self, start: NodeId, end: NodeId) -> bool {
        self.edge_between(start, end).is_some()
    }

    /// Adds an edge from `start` to `end` under the next free id.
    ///
    /// Ids are probed starting right after the id of the last created edge, wrapping
    /// around the capacity, and the first slot that holds no edge at all (visible or
    /// hidden) is taken. This keeps edge ids dense and below the capacity.
    ///
    /// # Errors
    /// - [`GraphError::UnknownNode`] if an endpoint is not in the graph.
    /// - [`GraphError::CapacityExceeded`] if every edge slot is taken.
    pub fn create_edge(&mut self, start: NodeId, end: NodeId) -> Result<Edge, GraphError> {
        self.check_node(start)?;
        self.check_node(end)?;

        let capacity = self.edge_capacity();
        let first = self.last_created_edge.map_or(0, |id| id + 1);
        let free_id = (0..capacity)
            .map(|offset| (first + offset) % capacity)
            .find(|&id| self.edges.get_even_if_hidden(id).is_none());

        let Some(id) = free_id else {
            debug!(capacity, "no free edge slot left");
            return Err(GraphError::CapacityExceeded {
                capacity,
                required: capacity + 1,
            });
        };

        let edge = Edge::new(id, start, end);
        self.set_edge(edge)?;
        self.last_created_edge = Some(id);
        trace!(id, %start, %end, "created edge");
        Ok(edge)
    }

    /// Inserts `edge` at the slot of its id and links it into both incidence caches.
    ///
    /// Re-inserting the edge that already occupies the slot does nothing.
    ///
    /// # Errors
    /// - [`GraphError::UnknownNode`] if an endpoint is not in the graph.
    /// - [`GraphError::SlotOccupied`] if a different edge has this id.
    /// - [`GraphError::CapacityExceeded`] if the id does not fit the edge capacity.
    pub fn set_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.check_node(edge.start())?;
        self.check_node(edge.end())?;

        if !self.edges.add(edge)? {
            return Ok(());
        }

        self.link(&edge.start(), edge.edge_id());
        self.degree.increase(&edge.start(), 1);
        if !edge.is_loop() {
            self.link(&edge.end(), edge.edge_id());
            self.degree.increase(&edge.end(), 1);
        }
        Ok(())
    }

    /// Inserts edges one by one, stopping at the first failure.
    pub fn set_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Edge>,
    {
        edges.into_iter().try_for_each(|edge| self.set_edge(edge))
    }

    /// Inserts `node` at the slot of its id. A node that is already present is left
    /// untouched together with its incident edges.
    pub fn set_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        if self.nodes.add(node)? {
            self.incidence.set(&node, Vec::new());
            self.degree.set(&node, 0);
        }
        Ok(())
    }

    pub fn set_nodes<I>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        nodes.into_iter().try_for_each(|node| self.set_node(node))
    }

    /// Hides or shows an edge, keeping the degrees of both endpoints in sync.
    ///
    /// Returns `true` if the state changed; unknown ids and no-op toggles return
    /// `false`. Runtime O(1).
    pub fn set_edge_hidden(&mut self, edge: EdgeId, hidden: bool) -> bool {
        let Some(&edge) = self.edges.get_even_if_hidden(edge.internal) else {
            return false;
        };
        if !self.edges.set_hidden(edge.id(), hidden) {
            return false;
        }

        self.shift_degree(edge.start(), hidden);
        if !edge.is_loop() {
            self.shift_degree(edge.end(), hidden);
        }
        true
    }

    /// Hides or shows a node.
    ///
    /// Hiding cascades to every edge in the node's incidence cache. Showing does not
    /// bring those edges back: they may have been hidden on their own before.
    /// Runtime O(degree) for hiding, O(1) for showing.
    pub fn set_node_hidden(&mut self, node: NodeId, hidden: bool) -> bool {
        if self.nodes.get_even_if_hidden(node.internal).is_none()
            || self.nodes.is_hidden(node.internal) == hidden
        {
            return false;
        }

        if hidden {
            let incident = self.incidence.get_mut(&node).map(std::mem::take);
            if let Some(incident) = incident {
                let mut hidden_edges = 0;
                for &edge in &incident {
                    if self.set_edge_hidden(edge, true) {
                        hidden_edges += 1;
                    }
                }
                debug!(%node, hidden_edges, "hid node and its incident edges");
                self.incidence.set(&node, incident);
            }
        }
        self.nodes.set_hidden(node.internal, hidden)
    }

    /// Toggles only the node flag, leaving incident edges and degrees alone.
    pub fn set_node_hidden_only(&mut self, node: NodeId, hidden: bool) -> bool {
        self.nodes.set_hidden(node.internal, hidden)
    }

    /// Shows every hidden edge, updating degrees along the way.
    pub fn show_all_edges(&mut self) {
        let hidden: Vec<EdgeId> = self.edges.iter_hidden().map(Edge::edge_id).collect();
        for edge in hidden {
            self.set_edge_hidden(edge, false);
        }
    }

    /// Resizes the node space. New ids are filled with fresh, visible nodes.
    ///
    /// # Errors
    /// [`GraphError::CapacityExceeded`] if existing nodes would be cut off.
    pub fn set_node_capacity(&mut self, capacity: usize) -> Result<(), GraphError> {
        let old_capacity = self.node_capacity();
        if capacity == old_capacity {
            return Ok(());
        }

        self.nodes.set_capacity(capacity)?;
        self.incidence.set_domain_size(capacity);
        self.degree.set_domain_size(capacity);
        for id in old_capacity..capacity {
            self.set_node(NodeId::new(id))?;
        }
        debug!(old_capacity, capacity, "resized node capacity");
        Ok(())
    }

    /// Resizes the edge space.
    ///
    /// # Errors
    /// [`GraphError::CapacityExceeded`] if existing edges would be cut off.
    pub fn set_edge_capacity(&mut self, capacity: usize) -> Result<(), GraphError> {
        let old_capacity = self.edge_capacity();
        if capacity == old_capacity {
            return Ok(());
        }
        self.edges.set_capacity(capacity)?;
        debug!(old_capacity, capacity, "resized edge capacity");
        Ok(())
    }

    /// Id handed out by the latest `create_edge`. The next call probes from the
    /// slot after it.
    pub fn last_created_edge(&self) -> Option<usize> {
        self.last_created_edge
    }

    /// Moves the `create_edge` cursor, e.g. when restoring a saved graph.
    ///
    /// # Errors
    /// [`GraphError::CapacityExceeded`] if `id` is not a slot of the edge store.
    pub fn set_last_created_edge(&mut self, id: usize) -> Result<(), GraphError> {
        let capacity = self.edge_capacity();
        if id >= capacity {
            return Err(GraphError::CapacityExceeded {
                capacity,
                required: id.saturating_add(1),
            });
        }
        self.last_created_edge = Some(id);
        Ok(())
    }

    /// A new graph over the same node ids holding every visible edge with its
    /// endpoints swapped. Edges keep their ids; hidden edges are left out.
    pub fn reverse_graph(&self) -> Graph {
        let mut reversed = Graph::new(self.node_capacity(), self.edge_capacity());
        for edge in self.edges() {
            let flipped = Edge::new(edge.id(), edge.end(), edge.start());
            // ids are unique in `self` and every node id exists in `reversed`
            let inserted = reversed.set_edge(flipped);
            debug_assert!(inserted.is_ok());
        }
        reversed.last_created_edge = self.last_created_edge;
        reversed
    }

    /// Like the `Display` output but with edges rendered as node pairs:
    ///
    /// ```text
    /// V = {0, 1, 2}
    /// E= {(0,1), (1,2)}
    /// ```
    pub fn deep_to_string(&self) -> String {
        let mut out = String::from("V = {");
        write_wrapped(&mut out, self.nodes().map(|n| n.to_string()), usize::MAX);
        out.push_str("}\nE= {");
        write_wrapped(
            &mut out,
            self.edges().map(Edge::nodes_to_string),
            EDGES_PER_LINE,
        );
        out.push_str("}\n");
        out
    }

    fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        match self.nodes.get_even_if_hidden(node.internal) {
            Some(_) => Ok(()),
            None => Err(GraphError::UnknownNode { id: node.internal }),
        }
    }

    fn shift_degree(&mut self, node: NodeId, hidden: bool) {
        if hidden {
            self.degree.decrease(&node, 1);
        } else {
            self.degree.increase(&node, 1);
        }
    }

    fn link(&mut self, node: &NodeId, edge: EdgeId) {
        if let Some(ids) = self.incidence.get_mut(node) {
            ids.push(edge);
        }
    }
}

/// Comma separated list, with a line break before every `per_line`-th item.
fn write_wrapped<I>(out: &mut String, items: I, per_line: usize)
where
    I: Iterator<Item = String>,
{
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
            if i % per_line == 0 {
                out.push('\n');
            }
        }
        out.push_str(&item);
    }
}

impl Display for Graph {
    /// Visible nodes then visible edges, e.g. `({0, 1, 2}, {0, 1})`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::from("({");
        write_wrapped(&mut out, self.nodes().map(|n| n.to_string()), usize::MAX);
        out.push_str("}, {");
        write_wrapped(
            &mut out,
            self.edges().map(|e| e.to_string()),
            EDGES_PER_LINE,
        );
        out.push_str("})");
        f.write_str(&out)
    }
}

/// Graphs are equal when their node and edge stores are, hidden elements and their
/// hidden state included.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Eq for Graph {}

impl Hash for Graph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nodes.hash(state);
        self.edges.hash(state);
    }
}
