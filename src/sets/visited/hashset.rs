use hashbrown::HashSet;

use crate::{graph::NodeId, sets::visited::VisitorSet};

/// Sparse marker set, for walks that touch few nodes of a large id space.
impl VisitorSet for HashSet<NodeId> {
    fn get(&self, node: NodeId) -> bool {
        self.contains(&node)
    }

    fn set(&mut self, node: NodeId) {
        self.insert(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_reports_first_time_only() {
        let mut set: HashSet<NodeId> = HashSet::new();
        assert!(set.visit(NodeId::new(1_000_000)));
        assert!(!set.visit(NodeId::new(1_000_000)));
        assert!(VisitorSet::get(&set, NodeId::new(1_000_000)));
        assert!(!VisitorSet::get(&set, NodeId::new(3)));
    }
}
