use crate::common::command::{
    git_commit_at, init_repository_dir, run_git_command, run_taglog_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn merged_history_lists_each_commit_once(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_commit_at(dir, "feat: base", "2023-01-01 10:00:00 +0000");

    run_git_command(dir, &["checkout", "-q", "-b", "topic"])
        .assert()
        .success();
    git_commit_at(dir, "fix: topic work", "2023-01-02 10:00:00 +0000");

    run_git_command(dir, &["checkout", "-q", "master"])
        .assert()
        .success();
    git_commit_at(dir, "doc: master work", "2023-01-03 10:00:00 +0000");

    run_git_command(dir, &["merge", "-q", "--no-ff", "-m", "feat: merge topic", "topic"])
        .envs(vec![
            ("GIT_AUTHOR_DATE", "2023-01-04 10:00:00 +0000"),
            ("GIT_COMMITTER_DATE", "2023-01-04 10:00:00 +0000"),
        ])
        .assert()
        .success();

    let expected = "untagged feat: merge topic\n         doc: master work\n         fix: topic work\n         feat: base\n";

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}
