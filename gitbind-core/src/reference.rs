//! References

use std::fmt;
use std::marker::PhantomData;

use gitbind_ffi::raw;

use crate::oid::Oid;
use crate::repository::Repository;
use crate::util::from_cstr;

/// A reference (branch, tag, HEAD, ...) looked up in a repository
pub struct Reference<'repo> {
    raw: *mut raw::git_reference,
    _marker: PhantomData<&'repo Repository>,
}

impl<'repo> Reference<'repo> {
    /// # Safety
    ///
    /// `raw` must be a valid reference that nothing else frees.
    pub(crate) unsafe fn from_raw(raw: *mut raw::git_reference) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub(crate) fn raw(&self) -> *mut raw::git_reference {
        self.raw
    }

    /// Replace the wrapped reference, freeing the old one
    pub(crate) fn replace(&mut self, other: Reference<'repo>) {
        *self = other;
    }

    /// Full name, e.g. `refs/heads/master`
    pub fn name(&self) -> Option<String> {
        unsafe { from_cstr(raw::git_reference_name(self.raw)) }
    }

    /// Object id a direct reference points at; `None` for symbolic references
    pub fn target(&self) -> Option<Oid> {
        let target = unsafe { raw::git_reference_target(self.raw) };
        if target.is_null() {
            None
        } else {
            Some(unsafe { Oid::from_raw(target) })
        }
    }
}

impl fmt::Debug for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("name", &self.name())
            .field("target", &self.target())
            .finish()
    }
}

impl Drop for Reference<'_> {
    fn drop(&mut self) {
        unsafe { raw::git_reference_free(self.raw) }
    }
}
