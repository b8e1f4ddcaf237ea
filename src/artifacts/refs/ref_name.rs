use crate::artifacts::refs::{HEADS_PREFIX, TAGS_PREFIX};
use derive_new::new;

/// Full name of a reference, relative to the `.git` directory
///
/// e.g. `HEAD`, `refs/heads/master`, `refs/tags/v1.0.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn is_tag(&self) -> bool {
        self.0.starts_with(TAGS_PREFIX)
    }

    pub fn as_ref_path(&self) -> &str {
        &self.0
    }

    /// Name without its namespace, as git prints it (`refs/tags/v1` -> `v1`)
    pub fn to_short_name(&self) -> &str {
        self.0
            .strip_prefix(TAGS_PREFIX)
            .or_else(|| self.0.strip_prefix(HEADS_PREFIX))
            .unwrap_or(&self.0)
    }
}

impl AsRef<str> for SymRefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymRefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
