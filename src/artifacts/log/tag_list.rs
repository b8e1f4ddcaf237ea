use crate::areas::repository::Repository;
use crate::artifacts::changelog::record::TimestampedRecord;
use derive_new::new;

/// Tags of a repository as time-stamped records
///
/// A tag is dated by the author time of the commit it (eventually) points at,
/// and named by its short ref name (`refs/tags/v1.0.0` -> `v1.0.0`). Tags
/// that cannot be dated are left out with a warning.
#[derive(Clone, new)]
pub struct TagList<'r> {
    repository: &'r Repository,
}

impl TagList<'_> {
    pub fn records(&self) -> anyhow::Result<Vec<TimestampedRecord>> {
        let mut records = Vec::new();

        for entry in self.repository.refs().list_tags()? {
            let target = entry.peeled().unwrap_or(entry.oid());

            match self.repository.database().peel_to_commit(target) {
                Ok(Some((oid, commit))) => match commit.timestamp() {
                    Some(timestamp) => records.push(TimestampedRecord::new(
                        timestamp,
                        entry.name().to_short_name().to_string(),
                    )),
                    None => tracing::warn!(
                        tag = %entry.name(),
                        commit = %oid,
                        "tagged commit has no readable author time, skipping"
                    ),
                },
                Ok(None) => tracing::warn!(
                    tag = %entry.name(),
                    "tag does not point at a commit, skipping"
                ),
                Err(error) => tracing::warn!(tag = %entry.name(), "skipping tag: {error:#}"),
            }
        }

        tracing::debug!(count = records.len(), "collected tags");
        Ok(records)
    }
}
