//! Reading and writing graph description files.
//!
//! Graphs are stored as JSON [`GraphDescription`]s, see `test_graphs/` for samples.

mod graph_load;
pub use graph_load::*;
