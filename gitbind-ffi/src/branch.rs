//! Wrappers for `git2/branch.h`

use std::os::raw::{c_char, c_int};

use libgit2_sys as raw;

delegate! {
    /// Create a new branch pointing at `target`.
    pub fn branch_create(
        out: *mut *mut raw::git_reference,
        repo: *mut raw::git_repository,
        branch_name: *const c_char,
        target: *const raw::git_commit,
        force: c_int,
    ) => raw::git_branch_create(out, repo, branch_name, target, force);

    /// Delete an existing branch reference.
    pub fn branch_delete(branch: *mut raw::git_reference) => raw::git_branch_delete(branch);

    /// Create an iterator over the branches selected by `list_flags`.
    pub fn branch_iterator_new(
        out: *mut *mut raw::git_branch_iterator,
        repo: *mut raw::git_repository,
        list_flags: raw::git_branch_t,
    ) => raw::git_branch_iterator_new(out, repo, list_flags);

    /// Rename a local branch.
    pub fn branch_move(
        out: *mut *mut raw::git_reference,
        branch: *mut raw::git_reference,
        new_branch_name: *const c_char,
        force: c_int,
    ) => raw::git_branch_move(out, branch, new_branch_name, force);

    /// Short name of a branch; `out` points into the reference.
    pub fn branch_name(
        out: *mut *const c_char,
        reference: *const raw::git_reference,
    ) => raw::git_branch_name(out, reference);

    /// Advance a branch iterator. Returns `GIT_ITEROVER` once exhausted.
    pub fn branch_next(
        out: *mut *mut raw::git_reference,
        out_type: *mut raw::git_branch_t,
        iter: *mut raw::git_branch_iterator,
    ) => raw::git_branch_next(out, out_type, iter);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::repository_init;
    use std::ffi::{CStr, CString};
    use std::ptr;
    use tempfile::TempDir;

    #[test]
    fn test_branch_next_past_last_branch_is_exhausted() {
        crate::init();
        let temp = TempDir::new().unwrap();
        let path = CString::new(temp.path().to_str().unwrap()).unwrap();

        unsafe {
            let mut repo = ptr::null_mut();
            assert_eq!(repository_init(&mut repo, path.as_ptr(), 0).code(), 0);

            let mut iter = ptr::null_mut();
            let res = branch_iterator_new(&mut iter, repo, raw::GIT_BRANCH_ALL);
            assert!(res.error().is_none());

            // a fresh repository has an unborn HEAD and no branches
            let mut reference = ptr::null_mut();
            let mut kind = raw::GIT_BRANCH_LOCAL;
            let res = branch_next(&mut reference, &mut kind, iter);
            assert_eq!(res.code(), raw::GIT_ITEROVER);
            assert!(res.error().is_none());
            assert!(res.is_exhausted());

            raw::git_branch_iterator_free(iter);
            raw::git_repository_free(repo);
        }
    }

    #[test]
    fn test_branch_name_of_head_after_commit() {
        crate::init();
        let temp = TempDir::new().unwrap();
        let path = CString::new(temp.path().to_str().unwrap()).unwrap();

        unsafe {
            let mut repo = ptr::null_mut();
            assert!(!repository_init(&mut repo, path.as_ptr(), 0).is_failure());

            // create an empty-tree commit on HEAD so a branch exists
            let mut index = ptr::null_mut();
            assert!(!crate::repository_index(&mut index, repo).is_failure());
            let mut tree_id = raw::git_oid { id: [0; raw::GIT_OID_RAWSZ] };
            assert!(!crate::index_write_tree(&mut tree_id, index).is_failure());
            let mut tree = ptr::null_mut();
            assert!(!crate::tree_lookup(&mut tree, repo, &tree_id).is_failure());

            let name = CString::new("Tester").unwrap();
            let email = CString::new("tester@example.com").unwrap();
            let mut sig = ptr::null_mut();
            assert_eq!(
                raw::git_signature_new(&mut sig, name.as_ptr(), email.as_ptr(), 0, 0),
                0
            );
            let head = CString::new("HEAD").unwrap();
            let message = CString::new("initial\n").unwrap();
            let mut commit_id = raw::git_oid { id: [0; raw::GIT_OID_RAWSZ] };
            let res = crate::commit_create(
                &mut commit_id,
                repo,
                head.as_ptr(),
                sig,
                sig,
                ptr::null(),
                message.as_ptr(),
                tree,
                0,
                ptr::null(),
            );
            assert_eq!(res.code(), 0);

            let mut iter = ptr::null_mut();
            assert!(!branch_iterator_new(&mut iter, repo, raw::GIT_BRANCH_LOCAL).is_failure());

            let mut reference = ptr::null_mut();
            let mut kind = raw::GIT_BRANCH_REMOTE;
            let res = branch_next(&mut reference, &mut kind, iter);
            assert_eq!(res.code(), 0);
            assert_eq!(kind, raw::GIT_BRANCH_LOCAL);

            let mut short: *const c_char = ptr::null();
            assert_eq!(branch_name(&mut short, reference).code(), 0);
            let short = CStr::from_ptr(short).to_str().unwrap().to_string();
            assert!(short == "master" || short == "main");

            let mut next = ptr::null_mut();
            assert!(branch_next(&mut next, &mut kind, iter).is_exhausted());

            raw::git_reference_free(reference);
            raw::git_branch_iterator_free(iter);
            raw::git_signature_free(sig);
            raw::git_tree_free(tree);
            raw::git_index_free(index);
            raw::git_repository_free(repo);
        }
    }
}
