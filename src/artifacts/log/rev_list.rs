use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::HashSet;

/// Walk over all commits reachable from a set of starting points
///
/// History is treated as a flat set: every parent of a merge is followed and
/// each commit is yielded once, in no particular order.
#[derive(Clone, new)]
pub struct RevList<'r> {
    repository: &'r Repository,
    roots: Vec<ObjectId>,
}

impl<'r> RevList<'r> {
    /// Start from HEAD and from every reference, annotated tags peeled
    ///
    /// References that cannot be read are skipped with a warning. It is an
    /// error when there are references but none of them can be read.
    pub fn from_all_refs(repository: &'r Repository) -> anyhow::Result<Self> {
        let refs = repository.refs();
        let mut starts = Vec::new();

        if let Some(head) = refs.read_head()? {
            starts.push((HEAD_REF_NAME.to_string(), head));
        }
        for entry in refs.list_all_refs()? {
            let target = entry.peeled().unwrap_or(entry.oid()).clone();
            starts.push((entry.name().to_string(), target));
        }

        let mut roots = Vec::new();
        let mut unreadable = 0usize;
        for (reference, target) in &starts {
            match repository.database().peel_to_commit(target) {
                Ok(Some((oid, _))) => roots.push(oid),
                Ok(None) => {
                    tracing::debug!(%reference, "reference does not lead to a commit")
                }
                Err(error) => {
                    unreadable += 1;
                    tracing::warn!(%reference, "skipping reference: {error:#}")
                }
            }
        }

        if roots.is_empty() && unreadable > 0 {
            anyhow::bail!(
                "None of the {} references could be read, the object database may be incomplete",
                unreadable
            );
        }

        Ok(RevList::new(repository, roots))
    }
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = (ObjectId, Commit);
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            repository: self.repository,
            pending: self.roots,
            seen: HashSet::new(),
        }
    }
}

pub struct RevListIntoIter<'r> {
    repository: &'r Repository,
    pending: Vec<ObjectId>,
    seen: HashSet<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = (ObjectId, Commit);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(commit_oid) = self.pending.pop() {
            if !self.seen.insert(commit_oid.clone()) {
                continue;
            }

            match self
                .repository
                .database()
                .parse_object_as_commit(&commit_oid)
            {
                Ok(Some(commit)) => {
                    self.pending.extend(
                        commit
                            .parents()
                            .iter()
                            .filter(|parent| !self.seen.contains(*parent))
                            .cloned(),
                    );
                    return Some((commit_oid, commit));
                }
                Ok(None) => {
                    tracing::warn!(object = %commit_oid, "expected a commit, skipping")
                }
                // the walk stops along this line of history only
                Err(error) => {
                    tracing::warn!(object = %commit_oid, "skipping unreadable commit: {error:#}")
                }
            }
        }

        None
    }
}
