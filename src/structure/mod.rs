//! Edge sequences built on top of a graph.

mod path;
pub use path::*;
