use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use crate::graph::NodeId;

/// The queue of discovered but not yet expanded nodes.
///
/// The pop order decides the traversal order: first-in-first-out gives a breadth-first
/// search, last-in-first-out a depth-first one, a min-heap expands the lowest id first.
pub trait Frontier: Default {
    fn push(&mut self, node: NodeId);

    /// Next node to expand, or `None` when the search is exhausted.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Frontier for VecDeque<NodeId> {
    fn push(&mut self, node: NodeId) {
        self.push_back(node)
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl Frontier for Vec<NodeId> {
    fn push(&mut self, node: NodeId) {
        Vec::push(self, node)
    }

    fn pop(&mut self) -> Option<NodeId> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl Frontier for BinaryHeap<Reverse<NodeId>> {
    fn push(&mut self, node: NodeId) {
        BinaryHeap::push(self, Reverse(node))
    }

    fn pop(&mut self) -> Option<NodeId> {
        BinaryHeap::pop(self).map(|Reverse(node)| node)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
}
