pub mod ref_name;

/// Namespace holding tag refs
pub const TAGS_PREFIX: &str = "refs/tags/";
/// Namespace holding branch refs
pub const HEADS_PREFIX: &str = "refs/heads/";
