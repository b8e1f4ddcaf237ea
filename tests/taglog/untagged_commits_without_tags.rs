use crate::common::command::{git_commit_at, init_repository_dir, run_taglog_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn untagged_commits_without_tags(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_commit_at(dir, "feat: a", "2023-01-01 10:00:00 +0000");
    git_commit_at(dir, "Initial import", "2023-01-01 11:00:00 +0000");
    git_commit_at(dir, "fix: b", "2023-01-01 12:00:00 +0000");

    let expected = "untagged fix: b\n         feat: a\n";

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}
