//! Repository handles

use std::fmt;
use std::os::raw::c_uint;
use std::path::{Path, PathBuf};
use std::ptr;

use gitbind_ffi::raw;
use tracing::debug;

use crate::commit::Commit;
use crate::index::Index;
use crate::oid::Oid;
use crate::reference::Reference;
use crate::signature::Signature;
use crate::tree::Tree;
use crate::util::{from_cstr, path_to_cstring};
use crate::{Error, Result};

/// An on-disk git repository
pub struct Repository {
    raw: *mut raw::git_repository,
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.path())
            .finish_non_exhaustive()
    }
}

impl Repository {
    /// Initialize a repository with a working directory at `path`
    pub fn init(path: impl AsRef<Path>) -> Result<Self> {
        Self::init_with(path.as_ref(), false)
    }

    /// Initialize a bare repository at `path`
    pub fn init_bare(path: impl AsRef<Path>) -> Result<Self> {
        Self::init_with(path.as_ref(), true)
    }

    fn init_with(path: &Path, bare: bool) -> Result<Self> {
        gitbind_ffi::init();
        let cpath = path_to_cstring(path)?;

        let mut raw = ptr::null_mut();
        unsafe { gitbind_ffi::repository_init(&mut raw, cpath.as_ptr(), bare as c_uint) }
            .into_result()?;

        debug!(path = %path.display(), bare, "initialized repository");
        Ok(Self { raw })
    }

    /// Open an existing repository
    ///
    /// `path` is either the working directory or the git directory itself;
    /// parent directories are not searched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        gitbind_ffi::init();
        let path = path.as_ref();
        let cpath = path_to_cstring(path)?;

        let mut raw = ptr::null_mut();
        unsafe { gitbind_ffi::repository_open(&mut raw, cpath.as_ptr()) }.into_result()?;

        debug!(path = %path.display(), "opened repository");
        Ok(Self { raw })
    }

    pub(crate) fn raw(&self) -> *mut raw::git_repository {
        self.raw
    }

    /// Path to the `.git` directory, or to the repository itself when bare
    pub fn path(&self) -> PathBuf {
        unsafe { from_cstr(raw::git_repository_path(self.raw)) }
            .map(PathBuf::from)
            .unwrap_or_default()
    }

    /// Working directory; `None` for bare repositories
    pub fn workdir(&self) -> Option<PathBuf> {
        unsafe { from_cstr(raw::git_repository_workdir(self.raw)) }.map(PathBuf::from)
    }

    pub fn is_bare(&self) -> bool {
        unsafe { raw::git_repository_is_bare(self.raw) == 1 }
    }

    /// The reference HEAD resolves to
    pub fn head(&self) -> Result<Reference<'_>> {
        let mut out = ptr::null_mut();
        unsafe { gitbind_ffi::repository_head(&mut out, self.raw) }.into_result()?;
        Ok(unsafe { Reference::from_raw(out) })
    }

    /// Whether HEAD points directly at a commit instead of a branch
    pub fn is_head_detached(&self) -> Result<bool> {
        let code = unsafe { gitbind_ffi::repository_head_detached(self.raw) }.into_result()?;
        Ok(code == 1)
    }

    /// Whether HEAD points at a branch that has no commits yet
    pub fn is_head_unborn(&self) -> Result<bool> {
        let code = unsafe { gitbind_ffi::repository_head_unborn(self.raw) }.into_result()?;
        Ok(code == 1)
    }

    /// The commit HEAD points at
    pub fn tip(&self) -> Result<Commit<'_>> {
        let head = self.head()?;
        let oid = head
            .target()
            .ok_or_else(|| Error::InvalidReference(head.name().unwrap_or_default()))?;
        self.find_commit(oid)
    }

    /// The repository's index file
    pub fn index(&self) -> Result<Index> {
        let mut out = ptr::null_mut();
        unsafe { gitbind_ffi::repository_index(&mut out, self.raw) }.into_result()?;
        Ok(unsafe { Index::from_raw(out) })
    }

    /// Signature from `user.name` and `user.email`, timestamped now
    pub fn default_signature(&self) -> Result<Signature> {
        let mut out = ptr::null_mut();
        unsafe { gitbind_ffi::signature_default(&mut out, self.raw) }.into_result()?;
        Ok(unsafe { Signature::from_raw(out) })
    }

    pub fn find_commit(&self, oid: Oid) -> Result<Commit<'_>> {
        let id = oid.to_raw();
        let mut out = ptr::null_mut();
        unsafe { gitbind_ffi::commit_lookup(&mut out, self.raw, &id) }.into_result()?;
        Ok(unsafe { Commit::from_raw(out) })
    }

    pub fn find_tree(&self, oid: Oid) -> Result<Tree<'_>> {
        let id = oid.to_raw();
        let mut out = ptr::null_mut();
        unsafe { gitbind_ffi::tree_lookup(&mut out, self.raw, &id) }.into_result()?;
        Ok(unsafe { Tree::from_raw(out) })
    }
}

impl Drop for Repository {
    fn drop(&mut self) {
        unsafe { raw::git_repository_free(self.raw) }
    }
}
