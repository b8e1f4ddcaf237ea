use crate::common::command::{
    git_commit_at, git_commit_with_dates, git_tag, init_repository_dir, run_taglog_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn author_time_orders_commits(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_commit_at(dir, "feat: tagged", "2023-01-01 12:00:00 +0000");
    git_tag(dir, "v1");

    // rebased or cherry-picked work: authored before the tag, committed after it
    git_commit_with_dates(
        dir,
        "fix: authored early",
        "2023-01-01 09:00:00 +0000",
        "2023-06-01 09:00:00 +0000",
    );

    let expected = "v1       feat: tagged\n         fix: authored early\n";

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}
