//! gitbind Core - Safe git handles over gitbind-ffi
//!
//! Every libgit2 call made here goes through a `gitbind-ffi` wrapper, so
//! failures arrive as [`Error::Git`] carrying libgit2's code, class and
//! message. Objects looked up through a [`Repository`] borrow it and are
//! freed on drop.
//!
//! Handles are neither `Send` nor `Sync`: libgit2 records errors per thread,
//! and each call's error is claimed on the thread that made it.

pub mod branch;
pub mod commit;
pub mod config;
pub mod error;
pub mod index;
pub mod message;
pub mod oid;
pub mod reference;
pub mod repository;
pub mod signature;
pub mod tree;
pub mod walker;

mod util;

#[cfg(test)]
mod test_support;

pub use branch::{Branch, BranchFilter, BranchKind, BranchOptions, Branches};
pub use commit::{Commit, CommitOptions, MessageCleanup};
pub use config::{CommitConfig, Config, SortKey, WalkerConfig};
pub use error::{Error, Result};
pub use gitbind_ffi::{ErrorClass, ErrorCode, GitError};
pub use index::{Index, IndexEntry};
pub use oid::Oid;
pub use reference::Reference;
pub use repository::Repository;
pub use signature::Signature;
pub use tree::Tree;
pub use walker::{Sort, Walker, WalkerOptions};
