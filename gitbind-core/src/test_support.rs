//! Scratch repositories for tests

use std::fs::{self, OpenOptions};
use std::io::Write;

use tempfile::TempDir;

use crate::commit::CommitOptions;
use crate::repository::Repository;

/// A fresh repository with `user.name = Default` and
/// `user.email = default@example.com` in its local config
pub(crate) fn init_test_repo() -> (TempDir, Repository) {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();

    let mut config = OpenOptions::new()
        .append(true)
        .open(repo.path().join("config"))
        .unwrap();
    writeln!(config, "[user]\n\tname = Default\n\temail = default@example.com").unwrap();
    drop(config);
    drop(repo);

    // reopen so the new config is read
    let repo = Repository::open(temp.path()).unwrap();
    (temp, repo)
}

pub(crate) fn write_file(repo: &Repository, name: &str, contents: &str) {
    let workdir = repo.workdir().unwrap();
    fs::write(workdir.join(name), contents).unwrap();
}

/// Add `n` empty commits on top of HEAD
pub(crate) fn seed_commits(repo: &Repository, n: usize) {
    for i in 0..n {
        repo.commit(CommitOptions {
            allow_empty: true,
            ..CommitOptions::default().message(format!("seed {}\n", i))
        })
        .unwrap();
    }
}
