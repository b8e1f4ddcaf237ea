use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const AUTHOR_EMAIL: &str = "fake_email@email.com";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    git_init(repository_dir.path());
    repository_dir
}

pub fn run_taglog_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("taglog").expect("Failed to find taglog binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("TAGLOG_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// git isolated from the user's and the system's configuration
pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    cmd.envs(vec![
        ("GIT_CONFIG_NOSYSTEM", "1"),
        ("GIT_CONFIG_GLOBAL", "/dev/null"),
        ("GIT_AUTHOR_NAME", AUTHOR_NAME),
        ("GIT_AUTHOR_EMAIL", AUTHOR_EMAIL),
        ("GIT_COMMITTER_NAME", AUTHOR_NAME),
        ("GIT_COMMITTER_EMAIL", AUTHOR_EMAIL),
    ]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_init(dir: &Path) {
    run_git_command(dir, &["init", "-q"]).assert().success();
    run_git_command(dir, &["symbolic-ref", "HEAD", "refs/heads/master"])
        .assert()
        .success();
}

/// Create an empty commit authored (and committed) at `date`
///
/// `date` uses the `%Y-%m-%d %H:%M:%S %z` format
pub fn git_commit_at(dir: &Path, message: &str, date: &str) {
    run_git_command(dir, &["commit", "-q", "--allow-empty", "-m", message])
        .envs(vec![("GIT_AUTHOR_DATE", date), ("GIT_COMMITTER_DATE", date)])
        .assert()
        .success();
}

/// Create a commit authored at `author_date` but recorded at `committer_date`
pub fn git_commit_with_dates(dir: &Path, message: &str, author_date: &str, committer_date: &str) {
    run_git_command(dir, &["commit", "-q", "--allow-empty", "-m", message])
        .envs(vec![
            ("GIT_AUTHOR_DATE", author_date),
            ("GIT_COMMITTER_DATE", committer_date),
        ])
        .assert()
        .success();
}

pub fn git_tag(dir: &Path, name: &str) {
    run_git_command(dir, &["tag", name]).assert().success();
}

pub fn git_annotated_tag(dir: &Path, name: &str, date: &str) {
    run_git_command(dir, &["tag", "-a", name, "-m", &format!("Release {name}")])
        .envs(vec![("GIT_COMMITTER_DATE", date)])
        .assert()
        .success();
}

/// Pack every object and ref, then delete the loose copies
pub fn git_gc(dir: &Path) {
    run_git_command(dir, &["gc", "-q", "--prune=now"])
        .assert()
        .success();
}

/// Names of the loose object directories (`ab/` for `ab...`) left in `.git/objects`
pub fn loose_object_dirs(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir.join(".git/objects"))
        .expect("Failed to list objects")
        .map(|entry| entry.expect("Failed to read objects entry").file_name())
        .map(|name| name.to_string_lossy().to_string())
        .filter(|name| name.len() == 2)
        .collect()
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}
