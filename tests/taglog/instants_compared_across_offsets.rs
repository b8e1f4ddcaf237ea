use crate::common::command::{
    git_commit_at, git_commit_with_dates, git_tag, init_repository_dir, run_taglog_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn instants_compared_across_offsets(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_commit_at(dir, "feat: release", "2023-01-01 12:00:00 +0000");
    git_tag(dir, "v1");

    // 13:30 at +0200 is 11:30 UTC, older than the tag despite the later wall clock
    git_commit_with_dates(
        dir,
        "fix: from another timezone",
        "2023-01-01 13:30:00 +0200",
        "2023-01-01 13:30:00 +0200",
    );
    // 07:30 at -0500 is 12:30 UTC, newer than the tag
    git_commit_with_dates(
        dir,
        "perf: from the west",
        "2023-01-01 07:30:00 -0500",
        "2023-01-01 07:30:00 -0500",
    );

    let expected = "untagged perf: from the west\nv1       feat: release\n         fix: from another timezone\n";

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}
