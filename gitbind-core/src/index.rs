//! The index (staging area)

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use gitbind_ffi::raw;
use tracing::debug;

use crate::oid::Oid;
use crate::repository::Repository;
use crate::tree::Tree;
use crate::util::{from_cstr, path_to_cstring};
use crate::Result;

const S_IFMT: u32 = 0o170000;
const S_IFDIR: u32 = 0o040000;

/// In-memory representation of an index file
pub struct Index {
    raw: *mut raw::git_index,
}

/// A stage-0 entry copied out of the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Path relative to the working directory
    pub path: String,
    /// File length in bytes (truncated to 32 bits by git)
    pub size: u64,
    /// File mode bits
    pub mode: u32,
    /// Modification time
    pub mtime: DateTime<Utc>,
    /// Blob id of the staged content
    pub id: Oid,
}

impl IndexEntry {
    pub fn is_dir(&self) -> bool {
        self.mode & S_IFMT == S_IFDIR
    }
}

impl Index {
    /// # Safety
    ///
    /// `raw` must be a valid index that nothing else frees.
    pub(crate) unsafe fn from_raw(raw: *mut raw::git_index) -> Self {
        Self { raw }
    }

    /// Stage a file from the working directory by its relative path
    pub fn add_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let cpath = path_to_cstring(path.as_ref())?;
        unsafe { gitbind_ffi::index_add_bypath(self.raw, cpath.as_ptr()) }.into_result()?;
        Ok(())
    }

    /// Look up the stage-0 entry for a path
    ///
    /// `Ok(None)` means the path is not staged; a path that cannot be passed
    /// to libgit2 is an error.
    pub fn get(&self, path: impl AsRef<Path>) -> Result<Option<IndexEntry>> {
        let cpath = path_to_cstring(path.as_ref())?;
        unsafe {
            let entry = raw::git_index_get_bypath(self.raw, cpath.as_ptr(), 0);
            if entry.is_null() {
                return Ok(None);
            }
            let entry = &*entry;
            Ok(Some(IndexEntry {
                path: from_cstr(entry.path).unwrap_or_default(),
                size: u64::from(entry.file_size),
                mode: entry.mode,
                mtime: DateTime::from_timestamp(
                    i64::from(entry.mtime.seconds),
                    entry.mtime.nanoseconds,
                )
                .unwrap_or_default(),
                id: Oid::from_raw(&entry.id),
            }))
        }
    }

    /// Save the index to disk
    pub fn write(&mut self) -> Result<()> {
        unsafe { gitbind_ffi::index_write(self.raw) }.into_result()?;
        Ok(())
    }

    /// Write the index as a tree object in `repo`
    pub fn write_tree<'repo>(&mut self, repo: &'repo Repository) -> Result<Tree<'repo>> {
        let mut oid = Oid::ZERO.to_raw();
        unsafe { gitbind_ffi::index_write_tree(&mut oid, self.raw) }.into_result()?;
        let id = unsafe { Oid::from_raw(&oid) };
        debug!(tree = %id, "wrote index tree");
        repo.find_tree(id)
    }

    /// Number of entries in the index
    pub fn entry_count(&self) -> usize {
        unsafe { raw::git_index_entrycount(self.raw) }
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("entries", &self.entry_count())
            .finish()
    }
}

impl Drop for Index {
    fn drop(&mut self) {
        unsafe { raw::git_index_free(self.raw) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{init_test_repo, write_file};
    use crate::Error;

    #[test]
    fn test_write_index_and_reread() {
        let (_temp, repo) = init_test_repo();
        let mut index = repo.index().unwrap();
        assert_eq!(index.entry_count(), 0);

        write_file(&repo, "hello.txt", "hello world");
        index.add_path("hello.txt").unwrap();
        index.write().unwrap();

        // refetch from disk
        let index = repo.index().unwrap();
        let entry = index
            .get("hello.txt")
            .unwrap()
            .expect("entry should be staged");
        assert_eq!(entry.path, "hello.txt");
        assert_eq!(entry.size, 11);
        assert!(!entry.is_dir());
        assert_eq!(index.entry_count(), 1);
        assert!(index.get("missing.txt").unwrap().is_none());
    }

    #[test]
    fn test_get_with_nul_in_path_is_an_error() {
        let (_temp, repo) = init_test_repo();
        let index = repo.index().unwrap();

        let err = index.get("bad\0name.txt").unwrap_err();
        assert!(matches!(err, Error::Nul(_)));
    }

    #[test]
    fn test_add_missing_file_fails() {
        let (_temp, repo) = init_test_repo();
        let mut index = repo.index().unwrap();

        let err = index.add_path("nope.txt").unwrap_err();
        assert!(err.code().is_some());
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_write_tree() {
        let (_temp, repo) = init_test_repo();
        let mut index = repo.index().unwrap();

        write_file(&repo, "a.txt", "a");
        index.add_path("a.txt").unwrap();
        let tree = index.write_tree(&repo).unwrap();

        assert_eq!(tree.len(), 1);

        // cross-check the object landed in the odb
        let check = git2::Repository::open(repo.path()).unwrap();
        let found = check
            .find_tree(git2::Oid::from_bytes(tree.id().as_bytes()).unwrap())
            .unwrap();
        assert_eq!(found.get(0).unwrap().name(), Some("a.txt"));
    }
}
