use crate::common::command::{git_commit_at, git_tag, init_repository_dir, run_taglog_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn full_message_flag(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_commit_at(
        dir,
        "feat: parser\n\nHandles nested blocks.",
        "2023-01-01 10:00:00 +0000",
    );
    git_tag(dir, "v1");

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff("v1       feat: parser\n"));

    let expected = "v1       feat: parser\n         \n         Handles nested blocks.\n";

    run_taglog_command(dir, &["--full"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}
