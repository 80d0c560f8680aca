//! Filesystem-facing components
//!
//! - `snapshot`: recursive enumeration of one input tree
//! - `output`: collision-free writes into the output tree
//! - `reconciler`: classifies every path and writes its artifact
//! - `session`: input validation and per-run state

pub mod output;
pub mod reconciler;
pub mod session;
pub mod snapshot;
