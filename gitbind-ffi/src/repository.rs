//! Wrappers for `git2/repository.h`

use std::os::raw::{c_char, c_int, c_uint};

use libgit2_sys as raw;

// Exported by the bundled libgit2 but not bound by libgit2-sys.
extern "C" {
    fn git_repository_head_unborn(repo: *mut raw::git_repository) -> c_int;
}

delegate! {
    /// Resolve the reference HEAD points to.
    pub fn repository_head(
        out: *mut *mut raw::git_reference,
        repo: *mut raw::git_repository,
    ) => raw::git_repository_head(out, repo);

    /// 1 when HEAD is detached, 0 when it is not.
    pub fn repository_head_detached(repo: *mut raw::git_repository) =>
        raw::git_repository_head_detached(repo);

    /// 1 when HEAD points at a branch with no commits yet, 0 otherwise.
    pub fn repository_head_unborn(repo: *mut raw::git_repository) =>
        git_repository_head_unborn(repo);

    /// The index file of a repository.
    pub fn repository_index(
        out: *mut *mut raw::git_index,
        repo: *mut raw::git_repository,
    ) => raw::git_repository_index(out, repo);

    /// Create a new repository at `path`.
    pub fn repository_init(
        out: *mut *mut raw::git_repository,
        path: *const c_char,
        is_bare: c_uint,
    ) => raw::git_repository_init(out, path, is_bare);

    /// Open the repository at `path`.
    pub fn repository_open(
        out: *mut *mut raw::git_repository,
        path: *const c_char,
    ) => raw::git_repository_open(out, path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorClass, ErrorCode};
    use std::ffi::CString;
    use std::ptr;
    use tempfile::TempDir;

    #[test]
    fn test_open_nonexistent_path_fails_with_message() {
        crate::init();
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does").join("not").join("exist");
        let path = CString::new(missing.to_str().unwrap()).unwrap();

        let mut repo = ptr::null_mut();
        let res = unsafe { repository_open(&mut repo, path.as_ptr()) };

        assert!(res.code() < 0);
        assert!(res.is_failure());
        let detail = res.error().unwrap();
        assert!(!detail.message.is_empty());
        assert_eq!(ErrorCode::from_raw(res.code()), ErrorCode::NotFound);
    }

    #[test]
    fn test_init_then_open_round_trip() {
        crate::init();
        let temp = TempDir::new().unwrap();
        let path = CString::new(temp.path().to_str().unwrap()).unwrap();

        unsafe {
            let mut created = ptr::null_mut();
            let res = repository_init(&mut created, path.as_ptr(), 0);
            assert_eq!(res.code(), 0);
            assert!(res.error().is_none());
            raw::git_repository_free(created);

            let mut opened = ptr::null_mut();
            let res = repository_open(&mut opened, path.as_ptr());
            assert_eq!(res.code(), 0);
            assert!(!opened.is_null());

            assert_eq!(repository_head_detached(opened).code(), 0);
            assert_eq!(repository_head_unborn(opened).code(), 1);

            let mut index = ptr::null_mut();
            assert_eq!(repository_index(&mut index, opened).code(), 0);
            raw::git_index_free(index);

            raw::git_repository_free(opened);
        }
    }

    #[test]
    fn test_head_of_unborn_branch_is_reference_error() {
        crate::init();
        let temp = TempDir::new().unwrap();
        let path = CString::new(temp.path().to_str().unwrap()).unwrap();

        unsafe {
            let mut repo = ptr::null_mut();
            assert!(!repository_init(&mut repo, path.as_ptr(), 0).is_failure());

            let mut head = ptr::null_mut();
            let err = repository_head(&mut head, repo).into_result().unwrap_err();
            assert_eq!(err.code(), ErrorCode::UnbornBranch);
            assert_eq!(err.class(), ErrorClass::Reference);

            // the claimed error does not leak into the next call
            let res = repository_head_detached(repo);
            assert!(res.error().is_none());

            raw::git_repository_free(repo);
        }
    }
}
