//! Wrappers for `git2/object.h`

use libgit2_sys as raw;

delegate! {
    /// Shortest unambiguous abbreviation of an object id, written to `out`.
    pub fn object_short_id(out: *mut raw::git_buf, obj: *const raw::git_object) =>
        raw::git_object_short_id(out, obj);
}
