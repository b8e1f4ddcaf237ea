//! Repository history as taglog sees it
//!
//! - `rev_list`: Every commit reachable from the repository's references,
//!   each visited once, regardless of branches and merges
//! - `tag_list`: One time-stamped record per tag, dated by the tagged commit

pub mod rev_list;
pub mod tag_list;
