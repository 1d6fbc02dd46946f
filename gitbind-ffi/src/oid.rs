//! Wrappers for `git2/oid.h`

use std::os::raw::c_char;

use libgit2_sys as raw;

delegate! {
    /// Parse the first `length` hex characters of `s` into an object id.
    pub fn oid_fromstrn(out: *mut raw::git_oid, s: *const c_char, length: usize) =>
        raw::git_oid_fromstrn(out, s, length);
}
