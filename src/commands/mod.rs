//! Command implementations
//!
//! - `porcelain`: User-facing commands (the release-grouped changelog)

pub mod porcelain;
