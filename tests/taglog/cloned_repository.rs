use crate::common::command::{
    git_annotated_tag, git_commit_at, git_tag, init_repository_dir, loose_object_dirs,
    run_git_command, run_taglog_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn cloned_repository(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let origin = init_repository_dir.path();

    git_commit_at(origin, "feat: first", "2023-01-01 10:00:00 +0000");
    git_annotated_tag(origin, "v0.1.0", "2023-01-01 10:00:00 +0000");
    git_commit_at(origin, "fix: second", "2023-01-02 10:00:00 +0000");
    git_tag(origin, "v0.2.0");
    git_commit_at(origin, "feat: third", "2023-01-03 10:00:00 +0000");

    // --no-local goes through the pack protocol instead of hard-linking objects
    let clone_parent = TempDir::new()?;
    let origin_path = origin.to_string_lossy().to_string();
    run_git_command(
        clone_parent.path(),
        &["clone", "-q", "--no-local", &origin_path, "clone"],
    )
    .assert()
    .success();

    let clone = clone_parent.path().join("clone");
    assert_eq!(loose_object_dirs(&clone), Vec::<String>::new());

    let expected = "untagged feat: third\nv0.2.0   fix: second\nv0.1.0   feat: first\n";

    run_taglog_command(&clone, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}
