//! Identity-indexed storage with logical deletion.
//!
//! Elements sit at the slot given by their id and can be hidden and shown again
//! without losing that slot.

mod hiding_set;

pub use hiding_set::*;
