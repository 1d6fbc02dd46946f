//! Branch creation, iteration and renaming

use std::fmt;
use std::os::raw::{c_char, c_int};
use std::ptr;

use gitbind_ffi::{raw, Outcome};
use tracing::debug;

use crate::commit::Commit;
use crate::oid::Oid;
use crate::reference::Reference;
use crate::repository::Repository;
use crate::util::{from_cstr, to_cstring};
use crate::Result;

/// Whether a branch is local or remote-tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Local,
    Remote,
}

impl BranchKind {
    fn from_raw(kind: raw::git_branch_t) -> Self {
        if kind == raw::GIT_BRANCH_REMOTE {
            BranchKind::Remote
        } else {
            BranchKind::Local
        }
    }
}

/// Which branches [`Repository::branches`] yields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BranchFilter {
    #[default]
    All,
    Local,
    Remote,
}

impl BranchFilter {
    fn to_raw(self) -> raw::git_branch_t {
        match self {
            BranchFilter::All => raw::GIT_BRANCH_ALL,
            BranchFilter::Local => raw::GIT_BRANCH_LOCAL,
            BranchFilter::Remote => raw::GIT_BRANCH_REMOTE,
        }
    }
}

/// Options for creating a branch
#[derive(Debug, Default)]
pub struct BranchOptions<'a> {
    /// Commit the branch points at; defaults to HEAD's commit
    pub target: Option<&'a Commit<'a>>,
    /// Overwrite an existing branch of the same name
    pub force: bool,
}

/// A local or remote branch
pub struct Branch<'repo> {
    reference: Reference<'repo>,
    kind: BranchKind,
}

impl<'repo> Branch<'repo> {
    /// Short name, e.g. `master` or `origin/main`
    pub fn name(&self) -> Result<String> {
        let mut out: *const c_char = ptr::null();
        unsafe { gitbind_ffi::branch_name(&mut out, self.reference.raw()) }.into_result()?;
        Ok(unsafe { from_cstr(out) }.unwrap_or_default())
    }

    pub fn kind(&self) -> BranchKind {
        self.kind
    }

    pub fn reference(&self) -> &Reference<'repo> {
        &self.reference
    }

    /// Commit id the branch points at
    pub fn target(&self) -> Option<Oid> {
        self.reference.target()
    }

    /// Delete the branch reference
    pub fn delete(self) -> Result<()> {
        let name = self.reference.name();
        unsafe { gitbind_ffi::branch_delete(self.reference.raw()) }.into_result()?;
        debug!(branch = ?name, "deleted branch");
        Ok(())
    }

    /// Move a local branch to `new_name`, returning the moved branch
    ///
    /// `self` keeps pointing at the old reference, which no longer exists.
    pub fn move_to(&self, new_name: &str, force: bool) -> Result<Branch<'repo>> {
        let cname = to_cstring(new_name)?;
        let mut out = ptr::null_mut();
        unsafe {
            gitbind_ffi::branch_move(
                &mut out,
                self.reference.raw(),
                cname.as_ptr(),
                force as c_int,
            )
        }
        .into_result()?;

        debug!(from = ?self.reference.name(), to = new_name, "moved branch");
        Ok(Branch {
            reference: unsafe { Reference::from_raw(out) },
            kind: self.kind,
        })
    }

    /// Rename a local branch in place
    pub fn rename(&mut self, new_name: &str, force: bool) -> Result<()> {
        let moved = self.move_to(new_name, force)?;
        self.reference.replace(moved.reference);
        Ok(())
    }
}

impl fmt::Debug for Branch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("reference", &self.reference)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Iterator over the branches of a repository
pub struct Branches<'repo> {
    raw: *mut raw::git_branch_iterator,
    _repo: &'repo Repository,
}

impl<'repo> Iterator for Branches<'repo> {
    type Item = Result<Branch<'repo>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut out = ptr::null_mut();
        let mut kind = raw::GIT_BRANCH_LOCAL;
        match unsafe { gitbind_ffi::branch_next(&mut out, &mut kind, self.raw) }.outcome() {
            Outcome::Success(_) => Some(Ok(Branch {
                reference: unsafe { Reference::from_raw(out) },
                kind: BranchKind::from_raw(kind),
            })),
            Outcome::Exhausted => None,
            Outcome::Failure(err) => Some(Err(err.into())),
        }
    }
}

impl Drop for Branches<'_> {
    fn drop(&mut self) {
        unsafe { raw::git_branch_iterator_free(self.raw) }
    }
}

impl Repository {
    /// Create a local branch
    pub fn create_branch(&self, name: &str, options: BranchOptions<'_>) -> Result<Branch<'_>> {
        let tip;
        let target = match options.target {
            Some(target) => target,
            None => {
                tip = self.tip()?;
                &tip
            }
        };

        let cname = to_cstring(name)?;
        let mut out = ptr::null_mut();
        unsafe {
            gitbind_ffi::branch_create(
                &mut out,
                self.raw(),
                cname.as_ptr(),
                target.raw(),
                options.force as c_int,
            )
        }
        .into_result()?;

        debug!(branch = name, target = %target.id(), "created branch");
        Ok(Branch {
            reference: unsafe { Reference::from_raw(out) },
            kind: BranchKind::Local,
        })
    }

    /// Iterate over branches
    pub fn branches(&self, filter: BranchFilter) -> Result<Branches<'_>> {
        let mut out = ptr::null_mut();
        unsafe { gitbind_ffi::branch_iterator_new(&mut out, self.raw(), filter.to_raw()) }
            .into_result()?;
        Ok(Branches {
            raw: out,
            _repo: self,
        })
    }
}
