//! Tree objects

use std::fmt;
use std::marker::PhantomData;

use gitbind_ffi::raw;

use crate::oid::Oid;
use crate::repository::Repository;

/// A tree looked up in a repository
pub struct Tree<'repo> {
    raw: *mut raw::git_tree,
    _marker: PhantomData<&'repo Repository>,
}

impl Tree<'_> {
    /// # Safety
    ///
    /// `raw` must be a valid tree that nothing else frees.
    pub(crate) unsafe fn from_raw(raw: *mut raw::git_tree) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub(crate) fn raw(&self) -> *const raw::git_tree {
        self.raw
    }

    pub fn id(&self) -> Oid {
        unsafe { Oid::from_raw(raw::git_tree_id(self.raw)) }
    }

    /// Number of entries directly in this tree
    pub fn len(&self) -> usize {
        unsafe { raw::git_tree_entrycount(self.raw) }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("id", &self.id()).finish()
    }
}

impl Drop for Tree<'_> {
    fn drop(&mut self) {
        unsafe { raw::git_tree_free(self.raw) }
    }
}
