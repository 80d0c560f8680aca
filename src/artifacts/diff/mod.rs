//! Line-level diffing
//!
//! - `myers`: Myers' shortest edit script over any `Eq + Hash` sequence
//! - `annotate`: renders an edit script over text lines as one merged buffer,
//!   with removed and added lines marked in the file's own comment syntax
//!
//! There are no hunks or context windows: every line of both sides appears in
//! the merged output exactly once.

pub mod annotate;
pub mod myers;

pub use annotate::{annotate, annotate_files, split_lines};
pub use myers::{DiffAlgorithm, Edit, MyersDiff};
