//! Visited-node tracking for traversals.
//!
//! [`NodeBitset`] is the dense choice sized by the node capacity; the hashed set is
//! used where only a handful of nodes is ever marked.

mod hashset;
mod node_bitset;
mod visitor_set;

pub use node_bitset::*;
pub use visitor_set::*;
