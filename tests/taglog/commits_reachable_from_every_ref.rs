use crate::common::command::{
    git_commit_at, git_tag, init_repository_dir, run_git_command, run_taglog_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commits_reachable_from_every_ref(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_commit_at(dir, "feat: base", "2023-01-01 10:00:00 +0000");
    git_tag(dir, "v1");

    run_git_command(dir, &["checkout", "-q", "-b", "side"])
        .assert()
        .success();
    git_commit_at(dir, "fix: on side branch", "2023-01-02 10:00:00 +0000");

    run_git_command(dir, &["checkout", "-q", "master"])
        .assert()
        .success();
    git_commit_at(dir, "perf: on master", "2023-01-03 10:00:00 +0000");

    // the side branch is never merged, its commit is still listed
    let expected = "untagged perf: on master\n         fix: on side branch\nv1       feat: base\n";

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}
