//! Revision walking

use std::fmt;
use std::ptr;

use bitflags::bitflags;
use gitbind_ffi::{raw, Outcome};
use tracing::{debug, trace};

use crate::commit::Commit;
use crate::config::{SortKey, WalkerConfig};
use crate::oid::Oid;
use crate::repository::Repository;
use crate::util::to_cstring;
use crate::Result;

bitflags! {
    /// Order in which a [`Walker`] yields commits; empty means libgit2's default
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Sort: u32 {
        /// Parents after all of their children
        const TOPOLOGICAL = 1 << 0;
        /// Newest commit time first
        const TIME = 1 << 1;
        /// Reverse whichever order was chosen
        const REVERSE = 1 << 2;
    }
}

impl From<SortKey> for Sort {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Topological => Sort::TOPOLOGICAL,
            SortKey::Time => Sort::TIME,
            SortKey::Reverse => Sort::REVERSE,
        }
    }
}

/// Options for [`Repository::walk`]
#[derive(Debug, Clone, Default)]
pub struct WalkerOptions {
    /// Reference to start from (e.g. `refs/heads/topic`); HEAD when unset
    pub start_ref: Option<String>,
    pub sorting: Sort,
}

impl WalkerOptions {
    /// Options seeded from the `[walker]` configuration section
    pub fn from_config(config: &WalkerConfig) -> Self {
        Self {
            start_ref: None,
            sorting: config.sorting.iter().copied().map(Sort::from).collect(),
        }
    }
}

/// An in-progress walk through the commits of a repository
///
/// Dropping the walker cancels the walk.
pub struct Walker<'repo> {
    raw: *mut raw::git_revwalk,
    repo: &'repo Repository,
}

impl<'repo> Walker<'repo> {
    /// Advance to the next commit id without looking the commit up
    pub fn next_id(&mut self) -> Option<Result<Oid>> {
        let mut oid = Oid::ZERO.to_raw();
        match unsafe { gitbind_ffi::revwalk_next(&mut oid, self.raw) }.outcome() {
            Outcome::Success(_) => Some(Ok(unsafe { Oid::from_raw(&oid) })),
            Outcome::Exhausted => {
                trace!("revision walk exhausted");
                None
            }
            Outcome::Failure(err) => Some(Err(err.into())),
        }
    }
}

impl<'repo> Iterator for Walker<'repo> {
    type Item = Result<Commit<'repo>>;

    fn next(&mut self) -> Option<Self::Item> {
        let repo = self.repo;
        self.next_id()
            .map(|id| id.and_then(|id| repo.find_commit(id)))
    }
}

impl fmt::Debug for Walker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker").finish_non_exhaustive()
    }
}

impl Drop for Walker<'_> {
    fn drop(&mut self) {
        unsafe { raw::git_revwalk_free(self.raw) }
    }
}

impl Repository {
    /// Walk the history reachable from HEAD, or from `options.start_ref`
    pub fn walk(&self, options: WalkerOptions) -> Result<Walker<'_>> {
        let mut out = ptr::null_mut();
        unsafe { gitbind_ffi::revwalk_new(&mut out, self.raw()) }.into_result()?;
        let walker = Walker {
            raw: out,
            repo: self,
        };

        // sorting resets the walk, so it has to come before any push
        if !options.sorting.is_empty() {
            unsafe { gitbind_ffi::revwalk_sorting(walker.raw, options.sorting.bits()) }
                .into_result()?;
        }

        match options.start_ref.as_deref() {
            Some(refname) => {
                let crefname = to_cstring(refname)?;
                unsafe { gitbind_ffi::revwalk_push_ref(walker.raw, crefname.as_ptr()) }
                    .into_result()?;
            }
            None => {
                unsafe { gitbind_ffi::revwalk_push_head(walker.raw) }.into_result()?;
            }
        }

        debug!(start = ?options.start_ref, sorting = ?options.sorting, "started revision walk");
        Ok(walker)
    }
}
