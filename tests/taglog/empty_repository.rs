use crate::common::command::{git_commit_at, init_repository_dir, run_taglog_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn empty_repository(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[rstest]
fn repository_without_conventional_commits(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_commit_at(dir, "Initial commit", "2023-01-01 10:00:00 +0000");
    git_commit_at(dir, "wip", "2023-01-01 11:00:00 +0000");

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}
