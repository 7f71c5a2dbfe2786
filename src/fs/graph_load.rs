use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{GraphError, LoadError},
    graph::{DirectedGraph, Edge, EdgeId, Graph, NodeId},
};

/// A graph as stored on disk.
///
/// ```json
/// {
///   "nodes": 3,
///   "directed": true,
///   "edges": [{ "id": 0, "start": 0, "end": 1 }, { "id": 1, "start": 1, "end": 2 }],
///   "hidden_edges": [1]
/// }
/// ```
///
/// `edge_capacity` defaults to one slot past the highest edge id. Hidden nodes are
/// applied after hidden edges and hide their incident edges too, unless
/// `hidden_nodes_only` is set: then only the node flags change and `hidden_edges`
/// is taken as the complete list. `last_created_edge` restores where edge id
/// allocation continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDescription {
    pub nodes: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_capacity: Option<usize>,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hidden_edges: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hidden_nodes: Vec<usize>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden_nodes_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_created_edge: Option<usize>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl GraphDescription {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let description: GraphDescription = serde_json::from_reader(reader)?;
        debug!(
            path = %path.as_ref().display(),
            nodes = description.nodes,
            edges = description.edges.len(),
            "loaded graph description"
        );
        Ok(description)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Describes `graph` including its hidden nodes and edges, exactly enough for
    /// [`build`](Self::build) to return an equal graph that allocates the same ids.
    pub fn from_graph(graph: &Graph, directed: bool) -> Self {
        GraphDescription {
            nodes: graph.node_capacity(),
            edge_capacity: Some(graph.edge_capacity()),
            directed,
            edges: graph.all_edges().copied().collect(),
            hidden_edges: graph.hidden_edges().map(|edge| edge.id()).collect(),
            hidden_nodes: graph.hidden_nodes().map(|node| node.internal).collect(),
            hidden_nodes_only: true,
            last_created_edge: graph.last_created_edge(),
        }
    }

    /// Builds the described graph, ignoring `directed`.
    pub fn build(&self) -> Result<Graph, GraphError> {
        let edge_capacity = self.edge_capacity.unwrap_or_else(|| {
            self.edges
                .iter()
                .map(|edge| edge.id() + 1)
                .max()
                .unwrap_or(0)
        });

        let mut graph = Graph::new(self.nodes, edge_capacity);
        graph.set_edges(self.edges.iter().copied())?;

        for &id in &self.hidden_edges {
            if graph.edge_even_if_hidden(id).is_none() {
                return Err(GraphError::UnknownEdge { id });
            }
            graph.set_edge_hidden(EdgeId { internal: id }, true);
        }
        for &id in &self.hidden_nodes {
            if id >= graph.node_capacity() {
                return Err(GraphError::UnknownNode { id });
            }
            let node = NodeId::new(id);
            if self.hidden_nodes_only {
                graph.set_node_hidden_only(node, true);
            } else {
                graph.set_node_hidden(node, true);
            }
        }
        if let Some(id) = self.last_created_edge {
            graph.set_last_created_edge(id)?;
        }
        Ok(graph)
    }

    pub fn build_directed(&self) -> Result<DirectedGraph, GraphError> {
        self.build().map(DirectedGraph::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Traversable;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test_graphs/diamond.json");

    #[test]
    fn test_load_fixture() {
        let description = GraphDescription::load_from_path(FIXTURE).unwrap();
        assert_eq!(description.nodes, 4);
        assert!(description.directed);
        assert_eq!(description.edges.len(), 4);

        let graph = description.build_directed().unwrap();
        assert_eq!(graph.as_graph().edge_count(), 3);
        assert!(graph.as_graph().is_edge_hidden(EdgeId { internal: 3 }));
        assert_eq!(graph.out_degree(NodeId::new(0)), 2);
        assert_eq!(graph.in_degree(NodeId::new(3)), 1);
        assert!(graph.is_node_visible(NodeId::new(3)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GraphDescription::load_from_path("test_graphs/does_not_exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = GraphDescription::from_json_str(r#"{ "nodes": "three" }"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));

        let err = GraphDescription::from_json_str(r#"{ "nodes": 1, "colour": 2 }"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_edge_capacity_defaults_past_highest_id() {
        let description = GraphDescription::from_json_str(
            r#"{ "nodes": 2, "edges": [{ "id": 4, "start": 0, "end": 1 }] }"#,
        )
        .unwrap();
        let graph = description.build().unwrap();
        assert_eq!(graph.edge_capacity(), 5);
        assert_eq!(graph.edge(4).map(|edge| edge.end()), Some(NodeId::new(1)));
    }

    #[test]
    fn test_inconsistent_descriptions_fail_to_build() {
        let unknown_endpoint = GraphDescription::from_json_str(
            r#"{ "nodes": 2, "edges": [{ "id": 0, "start": 0, "end": 5 }] }"#,
        )
        .unwrap();
        assert_eq!(
            unknown_endpoint.build(),
            Err(GraphError::UnknownNode { id: 5 })
        );

        let unknown_hidden = GraphDescription::from_json_str(
            r#"{ "nodes": 2, "edges": [], "hidden_edges": [0] }"#,
        )
        .unwrap();
        assert_eq!(unknown_hidden.build(), Err(GraphError::UnknownEdge { id: 0 }));

        let duplicate = GraphDescription::from_json_str(
            r#"{ "nodes": 3, "edges": [
                { "id": 0, "start": 0, "end": 1 },
                { "id": 0, "start": 1, "end": 2 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(duplicate.build(), Err(GraphError::SlotOccupied { id: 0 }));
    }

    #[test]
    fn test_hidden_node_hides_its_edges() {
        let description = GraphDescription::from_json_str(
            r#"{ "nodes": 3, "edges": [
                { "id": 0, "start": 0, "end": 1 },
                { "id": 1, "start": 1, "end": 2 }
            ], "hidden_nodes": [2] }"#,
        )
        .unwrap();
        let graph = description.build().unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(NodeId::new(1)), 1);
    }

    #[test]
    fn test_description_of_built_graph_rebuilds_it() {
        let description = GraphDescription::load_from_path(FIXTURE).unwrap();
        let graph = description.build().unwrap();

        let again = GraphDescription::from_graph(&graph, true);
        assert_eq!(again.build().unwrap(), graph);

        let json = serde_json::to_string(&again).unwrap();
        assert_eq!(GraphDescription::from_json_str(&json).unwrap(), again);
    }

    #[test]
    fn test_node_hidden_without_its_edges_rebuilds_unchanged() {
        let (n0, n1, n2) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
        let mut graph = Graph::new(3, 4);
        graph.create_edge(n0, n1).unwrap();
        graph.create_edge(n1, n2).unwrap();
        graph.set_node_hidden_only(n2, true);

        let mut rebuilt = GraphDescription::from_graph(&graph, false).build().unwrap();
        assert_eq!(rebuilt, graph);
        assert_eq!(rebuilt.edge_count(), 2);
        assert!(rebuilt.is_node_hidden(n2));
        let degrees: Vec<_> = [n0, n1, n2].map(|node| rebuilt.degree(node)).to_vec();
        assert_eq!(degrees, vec![1, 2, 1]);

        assert_eq!(rebuilt.last_created_edge(), Some(1));
        assert_eq!(
            rebuilt.create_edge(n0, n2).unwrap(),
            graph.create_edge(n0, n2).unwrap()
        );
    }

    #[test]
    fn test_cursor_outside_edge_store_fails_to_build() {
        let description = GraphDescription::from_json_str(
            r#"{ "nodes": 2, "edge_capacity": 2, "last_created_edge": 2 }"#,
        )
        .unwrap();
        assert_eq!(
            description.build(),
            Err(GraphError::CapacityExceeded {
                capacity: 2,
                required: 3
            })
        );
    }

    #[test]
    fn test_saved_description_loads_back() {
        let mut graph = GraphDescription::load_from_path(FIXTURE)
            .unwrap()
            .build()
            .unwrap();
        graph.set_node_hidden_only(NodeId::new(1), true);
        let description = GraphDescription::from_graph(&graph, true);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");
        description.save_to_path(&path).unwrap();

        let loaded = GraphDescription::load_from_path(&path).unwrap();
        assert_eq!(loaded, description);
        assert_eq!(loaded.build_directed().unwrap().into_inner(), graph);
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("saved.json");
        let description = GraphDescription::from_graph(&Graph::new(1, 0), false);

        let err = description.save_to_path(path).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
