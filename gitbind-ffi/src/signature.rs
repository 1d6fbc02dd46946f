//! Wrappers for `git2/signature.h`

use libgit2_sys as raw;

delegate! {
    /// Signature from the repository's `user.name` and `user.email`, timestamped now.
    pub fn signature_default(
        out: *mut *mut raw::git_signature,
        repo: *mut raw::git_repository,
    ) => raw::git_signature_default(out, repo);

    /// Deep copy of a signature.
    pub fn signature_dup(dest: *mut *mut raw::git_signature, sig: *const raw::git_signature) =>
        raw::git_signature_dup(dest, sig);
}
