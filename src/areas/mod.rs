//! Core repository components
//!
//! This module contains the read-only building blocks taglog needs from a Git
//! repository:
//!
//! - `database`: Object database, loose and packed (commits, annotated tags)
//! - `pack`: Object lookup in a single packfile
//! - `refs`: Reference lookup (HEAD, branches, tags, packed-refs)
//! - `repository`: Coordination of the above plus the output writer

pub(crate) mod database;
pub(crate) mod pack;
pub(crate) mod refs;
pub mod repository;
