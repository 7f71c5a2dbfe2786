use crate::graph::NodeId;

/// Marks nodes as seen during a graph walk.
pub trait VisitorSet {
    fn get(&self, node: NodeId) -> bool;
    fn set(&mut self, node: NodeId);

    /// Marks `node` and reports whether it was unmarked before.
    fn visit(&mut self, node: NodeId) -> bool {
        if self.get(node) {
            false
        } else {
            self.set(node);
            true
        }
    }
}
