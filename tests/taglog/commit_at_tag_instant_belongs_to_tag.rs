use crate::common::command::{
    git_commit_at, git_tag, init_repository_dir, run_taglog_command, stdout_of,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_at_tag_instant_belongs_to_tag(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    git_commit_at(dir, "feat: tagged", "2023-01-01 12:00:00 +0000");
    git_tag(dir, "v1");

    // authored after tagging, at the very instant the tag stands for
    git_commit_at(dir, "fix: same instant", "2023-01-01 12:00:00 +0000");
    git_commit_at(dir, "fix: one second later", "2023-01-01 12:00:01 +0000");

    let output = stdout_of(&mut run_taglog_command(dir, &[]));
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "untagged fix: one second later");
    assert!(lines[1].starts_with("v1       "));
    assert!(lines[2].starts_with("         "));

    // equal author timestamps have no guaranteed relative order
    let mut tagged: Vec<&str> = lines[1..].iter().map(|line| &line[9..]).collect();
    tagged.sort_unstable();
    assert_eq!(tagged, vec!["feat: tagged", "fix: same instant"]);

    Ok(())
}
