//! Wrappers for `git2/commit.h`

use std::os::raw::{c_char, c_int, c_uint};

use libgit2_sys as raw;

delegate! {
    /// Create a commit object and optionally move `update_ref` to it.
    pub fn commit_create(
        id: *mut raw::git_oid,
        repo: *mut raw::git_repository,
        update_ref: *const c_char,
        author: *const raw::git_signature,
        committer: *const raw::git_signature,
        message_encoding: *const c_char,
        message: *const c_char,
        tree: *const raw::git_tree,
        parent_count: usize,
        parents: *const *mut raw::git_commit,
    ) => raw::git_commit_create(
        id,
        repo,
        update_ref,
        author,
        committer,
        message_encoding,
        message,
        tree,
        parent_count,
        parents,
    );

    /// Look up a commit object by id.
    pub fn commit_lookup(
        commit: *mut *mut raw::git_commit,
        repo: *mut raw::git_repository,
        id: *const raw::git_oid,
    ) => raw::git_commit_lookup(commit, repo, id);

    /// Look up the `n`th parent of a commit.
    pub fn commit_parent(
        out: *mut *mut raw::git_commit,
        commit: *const raw::git_commit,
        n: c_uint,
    ) => raw::git_commit_parent(out, commit, n);

    /// Number of parents of a commit, as the result code.
    pub fn commit_parentcount(commit: *const raw::git_commit) =>
        raw::git_commit_parentcount(commit) as c_int;
}
