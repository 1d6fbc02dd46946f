//! Wrappers for `git2/revwalk.h`

use std::os::raw::{c_char, c_uint};

use libgit2_sys as raw;

delegate! {
    /// Allocate a revision walker over `repo`.
    pub fn revwalk_new(
        out: *mut *mut raw::git_revwalk,
        repo: *mut raw::git_repository,
    ) => raw::git_revwalk_new(out, repo);

    /// Next commit id of the walk. Returns `GIT_ITEROVER` once exhausted.
    pub fn revwalk_next(out: *mut raw::git_oid, walk: *mut raw::git_revwalk) =>
        raw::git_revwalk_next(out, walk);

    /// Start the walk from HEAD.
    pub fn revwalk_push_head(walk: *mut raw::git_revwalk) => raw::git_revwalk_push_head(walk);

    /// Start the walk from the commit a named reference points to.
    pub fn revwalk_push_ref(walk: *mut raw::git_revwalk, refname: *const c_char) =>
        raw::git_revwalk_push_ref(walk, refname);

    /// Change the sort order of the walk; resets it.
    pub fn revwalk_sorting(walk: *mut raw::git_revwalk, sort_mode: c_uint) =>
        raw::git_revwalk_sorting(walk, sort_mode);
}
