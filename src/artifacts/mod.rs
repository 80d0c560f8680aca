//! Building blocks that do not own any filesystem state
//!
//! - `comment`: extension-driven comment styles for annotations
//! - `content`: digests, binary sniffing and best-effort text reads
//! - `diff`: Myers' diff and the annotated merge of two texts
//! - `ignore`: built-in and user ignore rules
//! - `options`: run settings and the outcome counters
//! - `plan`: which paths are deleted, new or common
//! - `size`: human-friendly byte sizes

pub mod comment;
pub mod content;
pub mod diff;
pub mod ignore;
pub mod options;
pub mod plan;
pub mod size;
