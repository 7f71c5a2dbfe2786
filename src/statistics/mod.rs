//! Counters collected by graph traversals.
//!
//! A [`SearchStats`] is owned by each search; totals over several searches are built with
//! [`SearchStats::merge`] and logged with [`SearchStats::report`].

mod stats;
pub use stats::*;
