//! Wrappers for `git2/index.h`

use std::os::raw::c_char;

use libgit2_sys as raw;

delegate! {
    /// Add or update an index entry from a file in the working directory.
    pub fn index_add_bypath(index: *mut raw::git_index, path: *const c_char) =>
        raw::git_index_add_bypath(index, path);

    /// Write the in-memory index back to disk.
    pub fn index_write(index: *mut raw::git_index) => raw::git_index_write(index);

    /// Write the index as a tree and store its id in `out`.
    pub fn index_write_tree(out: *mut raw::git_oid, index: *mut raw::git_index) =>
        raw::git_index_write_tree(out, index);
}
