use tracing::info;

/// Counters collected while a traversal runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    nodes_discovered: usize,
    edges_scanned: usize,
    edges_surfaced: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        SearchStats {
            nodes_discovered: 0,
            edges_scanned: 0,
            edges_surfaced: 0,
        }
    }

    /// Record that a node was reached for the first time (the root included).
    pub fn bump_nodes_discovered(&mut self) {
        self.nodes_discovered += 1
    }

    /// Record that a visible incident edge was looked at while expanding a node.
    pub fn bump_edges_scanned(&mut self) {
        self.edges_scanned += 1
    }

    /// Record that an edge was handed out to the caller.
    pub fn bump_edges_surfaced(&mut self) {
        self.edges_surfaced += 1
    }

    pub fn get_nodes_discovered(&self) -> usize {
        self.nodes_discovered
    }

    pub fn get_edges_scanned(&self) -> usize {
        self.edges_scanned
    }

    pub fn get_edges_surfaced(&self) -> usize {
        self.edges_surfaced
    }

    /// Adds the counters of `other` into `self`, e.g. to total several searches.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_discovered += other.nodes_discovered;
        self.edges_scanned += other.edges_scanned;
        self.edges_surfaced += other.edges_surfaced;
    }

    /// Emits all counters as one `info` event.
    pub fn report(&self, label: &str) {
        info!(
            label,
            nodes_discovered = self.nodes_discovered,
            edges_scanned = self.edges_scanned,
            edges_surfaced = self.edges_surfaced,
            "search statistics"
        );
    }
}
