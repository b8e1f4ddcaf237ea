//! taglog: conventional commits grouped by release tag
//!
//! Reads a Git repository straight from its `.git` directory, keeps the
//! commits whose message starts with a configured prefix, and lists them under
//! the tag whose release window contains them:
//!
//! ```text
//! untagged feat: parse packed-refs
//! v0.2.0   fix: keep timezone offsets
//!          perf: single pass clustering
//! v0.1.0   feat: initial release
//! ```
//!
//! - `areas`: Object database, references and the repository handle
//! - `artifacts`: Git objects and the changelog algorithms
//! - `commands`: The user-facing command

pub mod areas;
pub mod artifacts;
pub mod commands;
