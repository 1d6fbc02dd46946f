//! Wrappers for `git2/tree.h`

use libgit2_sys as raw;

delegate! {
    /// Look up a tree object by id.
    pub fn tree_lookup(
        out: *mut *mut raw::git_tree,
        repo: *mut raw::git_repository,
        id: *const raw::git_oid,
    ) => raw::git_tree_lookup(out, repo, id);
}
