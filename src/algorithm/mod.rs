//! Problem descriptions handed to graph algorithms.

mod spanning_tree;
pub use spanning_tree::*;
