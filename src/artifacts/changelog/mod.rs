//! Release-grouped changelog
//!
//! Turns two streams of time-stamped records (tags and commits) into the
//! per-release view taglog prints:
//!
//! - `record`: The `TimestampedRecord` shared by tags and commits
//! - `filter`: Case-insensitive conventional-commit prefix predicate
//! - `sorter`: Newest-first ordering
//! - `clusterer`: Assignment of commits to release windows
//! - `renderer`: Aligned text output
//!
//! ## Release windows
//!
//! With tags sorted newest first, tag `i` owns every commit `c` with
//! `tags[i+1] < c <= tags[i]`. Commits newer than the newest tag go to the
//! synthetic `untagged` window, and the oldest tag owns everything older than
//! itself.

pub mod clusterer;
pub mod filter;
pub mod record;
pub mod renderer;
pub mod sorter;

/// Label of the window holding commits newer than every tag
pub const UNTAGGED_LABEL: &str = "untagged";
