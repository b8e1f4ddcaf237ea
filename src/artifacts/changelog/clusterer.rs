use crate::artifacts::changelog::UNTAGGED_LABEL;
use crate::artifacts::changelog::record::TimestampedRecord;

/// One release window and the commits it owns, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    label: String,
    commits: Vec<String>,
}

impl Window {
    fn new(label: String) -> Self {
        Window {
            label,
            commits: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn commits(&self) -> &[String] {
        &self.commits
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Commits grouped by release window
///
/// Windows are kept in display order: `untagged` first, then one window per
/// tag from newest to oldest. Every window is present even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clusters {
    windows: Vec<Window>,
}

impl Clusters {
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Window labels in display order
    pub fn order(&self) -> impl Iterator<Item = &str> {
        self.windows.iter().map(Window::label)
    }

    /// Window at `position` in display order, `0` being `untagged`
    ///
    /// Labels are not unique (a tag may be literally named `untagged`), so
    /// windows are addressed by position rather than by label.
    pub fn window(&self, position: usize) -> Option<&Window> {
        self.windows.get(position)
    }

    pub fn untagged(&self) -> &[String] {
        // always present, see build_clusters
        &self.windows[0].commits
    }

    pub fn total_commits(&self) -> usize {
        self.windows.iter().map(|window| window.commits.len()).sum()
    }
}

/// Assign every commit to exactly one release window
///
/// Both inputs must already be sorted newest first. Commits are walked once
/// while a cursor advances over the tags, so the cost is linear in
/// `tags + commits`.
///
/// Boundaries are upper-inclusive: a commit made at the very instant of a tag
/// belongs to that tag, not to the older one.
pub fn build_clusters(tags: &[TimestampedRecord], commits: &[TimestampedRecord]) -> Clusters {
    debug_assert!(is_newest_first(tags), "tags must be sorted newest first");
    debug_assert!(is_newest_first(commits), "commits must be sorted newest first");

    let mut windows = Vec::with_capacity(tags.len() + 1);
    windows.push(Window::new(UNTAGGED_LABEL.to_string()));
    windows.extend(tags.iter().map(|tag| Window::new(tag.content().to_string())));

    if tags.is_empty() {
        windows[0]
            .commits
            .extend(commits.iter().map(|commit| commit.content().to_string()));
        return Clusters { windows };
    }

    // number of tags at or after the current commit; 0 means "untagged",
    // n means the window of tags[n - 1]
    let mut passed = 0;
    for commit in commits {
        while passed < tags.len() && commit.timestamp() <= tags[passed].timestamp() {
            passed += 1;
        }

        windows[passed].commits.push(commit.content().to_string());
    }

    Clusters { windows }
}

fn is_newest_first(records: &[TimestampedRecord]) -> bool {
    records
        .windows(2)
        .all(|pair| pair[0].timestamp() >= pair[1].timestamp())
}
