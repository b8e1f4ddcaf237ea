use crate::common::command::{
    git_commit_at, git_tag, init_repository_dir, repository_dir, run_taglog_command,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

fn commit_history(dir: &std::path::Path) {
    git_commit_at(dir, "chore: tooling", "2023-01-01 10:00:00 +0000");
    git_commit_at(dir, "feat: feature", "2023-01-01 11:00:00 +0000");
    git_tag(dir, "v1");
    git_commit_at(dir, "build: pipeline", "2023-01-02 10:00:00 +0000");
}

#[rstest]
fn prefixes_from_repository_config(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_history(dir);

    init_repository_dir
        .child("taglog.json")
        .write_str(r#"["chore", "BUILD"]"#)?;

    let expected = "untagged build: pipeline\nv1       chore: tooling\n";

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}

#[rstest]
fn prefixes_from_explicit_config(
    init_repository_dir: TempDir,
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_history(dir);

    let config = repository_dir.child("prefixes.json");
    config.write_str(r#"{"prefixes": ["build"]}"#)?;

    let expected = "untagged build: pipeline\n";

    run_taglog_command(
        repository_dir.path(),
        &[
            "--repo",
            dir.to_str().unwrap(),
            "--config",
            config.path().to_str().unwrap(),
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::diff(expected));

    Ok(())
}

#[rstest]
fn empty_config_falls_back_to_defaults(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_history(dir);

    init_repository_dir.child("taglog.json").write_str("[]")?;

    run_taglog_command(dir, &[])
        .assert()
        .success()
        .stdout(predicate::str::diff("v1       feat: feature\n"));

    Ok(())
}

#[rstest]
fn malformed_config_is_an_error(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_history(dir);

    init_repository_dir
        .child("taglog.json")
        .write_str("{ not json")?;

    run_taglog_command(dir, &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));

    Ok(())
}

#[rstest]
fn missing_explicit_config_is_an_error(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_history(dir);

    run_taglog_command(dir, &["--config", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    Ok(())
}
