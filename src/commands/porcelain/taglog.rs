use crate::areas::repository::Repository;
use crate::artifacts::changelog::clusterer::{Clusters, build_clusters};
use crate::artifacts::changelog::filter::ConventionalFilter;
use crate::artifacts::changelog::record::TimestampedRecord;
use crate::artifacts::changelog::renderer::{RenderOptions, render_lines};
use crate::artifacts::changelog::sorter::sort_newest_first;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::log::tag_list::TagList;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct TaglogOptions {
    /// Show whole commit messages instead of their first line
    pub full_message: bool,
    pub color: bool,
}

impl Repository {
    pub async fn taglog(
        &self,
        filter: &ConventionalFilter,
        opts: &TaglogOptions,
    ) -> anyhow::Result<Clusters> {
        let tags = TagList::new(self).records()?;
        let commits = self.conventional_commits(filter, opts.full_message)?;

        // the two streams are independent, sort them side by side
        let (tags, commits) = tokio::try_join!(
            tokio::task::spawn_blocking(move || sort_newest_first(tags)),
            tokio::task::spawn_blocking(move || sort_newest_first(commits)),
        )?;

        let clusters = build_clusters(&tags, &commits);
        tracing::debug!(
            windows = clusters.windows().len(),
            untagged = clusters.untagged().len(),
            commits = clusters.total_commits(),
            "clustered commits by release"
        );

        let render_opts = RenderOptions { color: opts.color };
        for line in render_lines(&clusters, &render_opts) {
            writeln!(self.writer(), "{}", line)?;
        }
        self.writer().flush()?;

        Ok(clusters)
    }

    fn conventional_commits(
        &self,
        filter: &ConventionalFilter,
        full_message: bool,
    ) -> anyhow::Result<Vec<TimestampedRecord>> {
        let mut scanned = 0usize;
        let commits = RevList::from_all_refs(self)?
            .into_iter()
            .inspect(|_| scanned += 1)
            .filter(|(_, commit)| filter.is_conventional(commit.message()))
            .filter_map(|(oid, commit)| {
                let Some(timestamp) = commit.timestamp() else {
                    tracing::warn!(commit = %oid, "no readable author time, leaving commit out");
                    return None;
                };
                let content = if full_message {
                    commit.message().trim_end().to_string()
                } else {
                    commit.short_message()
                };
                Some(TimestampedRecord::new(timestamp, content))
            })
            .collect::<Vec<_>>();

        tracing::debug!(scanned, conventional = commits.len(), "collected commits");
        Ok(commits)
    }
}
