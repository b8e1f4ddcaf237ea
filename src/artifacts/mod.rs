//! Git data structures and algorithms
//!
//! - `changelog`: Release-window clustering and rendering
//! - `config`: Conventional prefix configuration
//! - `core`: Shared utilities (pager wrapper, logging)
//! - `log`: Commit and tag collection from history
//! - `objects`: Git object types (commit, annotated tag)
//! - `pack`: Packfile formats (index, entries, deltas)
//! - `refs`: Reference names

pub mod changelog;
pub mod config;
pub mod core;
pub mod log;
pub mod objects;
pub mod pack;
pub mod refs;
