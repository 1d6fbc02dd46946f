//! gitbind-ffi - Uniform results for libgit2 calls
//!
//! Every function in this crate forwards its arguments unchanged to the
//! libgit2 call of the same name and hands the return code to
//! [`wrap_result`], which yields a [`GitResult`]: the code plus, on failure,
//! the error detail libgit2 recorded for it.
//!
//! libgit2 keeps its last error in thread-local state. Each wrapper claims
//! that state before returning, so the detail in a [`GitResult`] always
//! belongs to the call that produced it. Resources written through `out`
//! pointers stay owned by the caller.

#[macro_use]
mod macros;

pub mod branch;
pub mod commit;
pub mod error;
pub mod index;
pub mod message;
pub mod object;
pub mod oid;
pub mod repository;
pub mod result;
pub mod revwalk;
pub mod signature;
pub mod tree;

pub use libgit2_sys as raw;

pub use branch::*;
pub use commit::*;
pub use error::{ErrorClass, ErrorCode, ErrorDetail, GitError};
pub use index::*;
pub use message::*;
pub use object::*;
pub use oid::*;
pub use repository::*;
pub use result::{wrap_result, GitResult, Outcome};
pub use revwalk::*;
pub use signature::*;
pub use tree::*;

/// Initialize libgit2's global state
///
/// Safe to call any number of times; only the first call does work.
pub fn init() {
    raw::init();
}
