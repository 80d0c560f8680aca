//! Compare two directory trees and write their differences as a browsable tree
//!
//! - `areas`: filesystem-facing pieces (snapshots, the output tree, the
//!   reconciler and the validated session)
//! - `artifacts`: pure building blocks (ignore rules, comment styles, content
//!   probes, line diffing, the reconcile plan, options and size parsing)
//! - `commands`: the run and dry-run operations on a session

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::session::{Session, SessionError};
pub use artifacts::options::{Counters, Options};
