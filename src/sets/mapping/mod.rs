//! Dense id-indexed mappings used for per-node and per-edge bookkeeping.

mod id_map;

pub use id_map::*;
