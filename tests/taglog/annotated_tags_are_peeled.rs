use crate::common::command::{
    git_annotated_tag, git_commit_at, git_tag, init_repository_dir, run_taglog_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn annotated_tags_are_peeled(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_commit_at(dir, "feat: first", "2023-01-01 10:00:00 +0000");
    // the tagger date is far in the future: the window is bounded by the commit
    git_annotated_tag(dir, "v1.0.0", "2030-01-01 00:00:00 +0000");

    git_commit_at(dir, "fix: second", "2023-02-01 10:00:00 +0000");
    git_tag(dir, "v1.0.1");

    git_commit_at(dir, "perf: third", "2023-03-01 10:00:00 +0000");

    let expected = "untagged perf: third\nv1.0.1   fix: second\nv1.0.0   feat: first\n";

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}
