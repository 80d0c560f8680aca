//! User-facing operations on a validated [`Session`](crate::areas::session::Session)
//!
//! - `run`: reconcile both trees into the output directory and print a summary
//! - `preview`: print what a run would do without touching the disk

pub mod preview;
pub mod run;
