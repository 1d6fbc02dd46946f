//! Wrappers for `git2/message.h`

use std::os::raw::{c_char, c_int};

use libgit2_sys as raw;

delegate! {
    /// Clean up a commit message: trailing whitespace, blank line runs and,
    /// when `strip_comments` is set, lines starting with `comment_char`.
    pub fn message_prettify(
        out: *mut raw::git_buf,
        message: *const c_char,
        strip_comments: c_int,
        comment_char: c_char,
    ) => raw::git_message_prettify(out, message, strip_comments, comment_char);
}
