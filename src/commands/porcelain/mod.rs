//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `taglog`: Show conventional commits grouped by release tag

pub mod taglog;
