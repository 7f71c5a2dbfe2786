//! Graph storage with hideable nodes and edges.
//!
//! [`Graph`] owns two [`HidingSet`](crate::sets::hiding::HidingSet) stores plus the
//! per-node incidence and degree caches derived from them. [`DirectedGraph`] reads the
//! same storage with edge orientation. Both expose themselves to traversals through
//! [`Traversable`].

mod directed;
mod graph;
mod incidence;
mod node;
mod random;
mod traversable;

pub use directed::*;
pub use graph::*;
pub use incidence::*;
pub use node::*;
pub use random::*;
pub use traversable::*;
