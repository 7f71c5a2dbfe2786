//! Id-indexed data structures backing the graph and its traversals.
//!
//! # Submodules
//!
//! - [`hiding`]: slot arena whose occupants can be hidden and shown in O(1)
//! - [`mapping`]: dense per-id values (degrees, incidence lists, predecessors, weights)
//! - [`visited`]: node marks for traversals

pub mod hiding;
pub mod mapping;
pub mod visited;
