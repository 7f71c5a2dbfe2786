use crate::{graph::NodeId, sets::visited::VisitorSet};

const WORD_BITS: usize = 64;

/// A fixed-capacity set of node marks packed into 64-bit words.
///
/// # Examples
///
/// ```
/// use veilgraph::{graph::NodeId, sets::visited::{NodeBitset, VisitorSet}};
///
/// let mut marks = NodeBitset::new(10);
/// assert!(!marks.get(NodeId::new(3)));
///
/// marks.set(NodeId::new(3));
/// assert!(marks.get(NodeId::new(3)));
/// assert_eq!(marks.count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct NodeBitset {
    words: Box<[u64]>,
    capacity: usize,
}

impl NodeBitset {
    /// Space for node ids `0..capacity`, all unmarked.
    pub fn new(capacity: usize) -> Self {
        NodeBitset {
            words: vec![0u64; capacity.div_ceil(WORD_BITS)].into_boxed_slice(),
            capacity,
        }
    }

    /// Number of marked nodes.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl VisitorSet for NodeBitset {
    /// Marks `node`.
    ///
    /// # Panics
    ///
    /// Panics if the node id is not below the capacity.
    fn set(&mut self, node: NodeId) {
        let index = node.internal;
        assert!(index < self.capacity);
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// `true` if `node` is marked. Ids beyond the capacity are never marked.
    fn get(&self, node: NodeId) -> bool {
        let index = node.internal;
        if index >= self.capacity {
            return false;
        }
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    #[test]
    fn new_zero_capacity_constructs() {
        let marks = NodeBitset::new(0);
        assert_eq!(marks.count(), 0);
        assert!(!marks.get(n(0)));
    }

    #[test]
    fn all_marks_start_cleared() {
        for cap in [1usize, 63, 64, 65, 128, 130] {
            let marks = NodeBitset::new(cap);
            for i in 0..cap {
                assert!(!marks.get(n(i)), "node {i} should start unmarked for cap {cap}");
            }
        }
    }

    #[test]
    fn set_and_get_across_word_boundaries() {
        let cap = 200;
        let mut marks = NodeBitset::new(cap);
        let to_set = [0usize, 1, 63, 64, 127, 128, 199];
        for &i in &to_set {
            marks.set(n(i));
        }

        for i in 0..cap {
            assert_eq!(marks.get(n(i)), to_set.contains(&i), "mismatch at {i}");
        }
        assert_eq!(marks.count(), to_set.len());
    }

    #[test]
    fn visit_marks_once() {
        let mut marks = NodeBitset::new(8);
        assert!(marks.visit(n(5)));
        assert!(!marks.visit(n(5)));
        assert_eq!(marks.count(), 1);
    }

    #[test]
    fn get_out_of_range_is_unmarked() {
        let marks = NodeBitset::new(10);
        assert!(!marks.get(n(10)));
        assert!(!marks.get(n(1000)));
    }

    #[test]
    #[should_panic]
    fn set_out_of_bounds_panics() {
        let mut marks = NodeBitset::new(10);
        marks.set(n(10));
    }
}
