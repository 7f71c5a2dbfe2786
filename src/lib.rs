//! In-memory graphs whose nodes and edges can be hidden and shown again without
//! losing their ids or their place in the incidence lists.
//!
//! Restricting a graph to a subgraph is then a matter of flipping flags, which is
//! what algorithms over residual networks or pruned scenarios do over and over.
//! Lazy traversals ([`traversal::GraphSearch`]) and a small [`structure::Path`] type
//! sit on top of the storage.

pub mod algorithm;
pub mod error;
pub mod fs;
pub mod graph;
pub mod sets;
pub mod statistics;
pub mod structure;
pub mod traversal;
