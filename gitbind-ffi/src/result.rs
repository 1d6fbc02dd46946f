//! Result normalization for delegated libgit2 calls
//!
//! libgit2 reports failure through a negative return code and records the
//! matching message in thread-local state. [`wrap_result`] turns one return
//! code into a [`GitResult`], claiming that state when the code is a failure.

use std::ffi::CStr;
use std::os::raw::c_int;

use libgit2_sys as raw;

use crate::error::{ErrorClass, ErrorDetail, GitError};

/// Status code plus, on failure, the error detail libgit2 recorded for it
///
/// `error` is present iff `code` is negative and not [`raw::GIT_ITEROVER`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct GitResult {
    code: c_int,
    error: Option<ErrorDetail>,
}

/// Three-way reading of a [`GitResult`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The call succeeded; carries the non-negative return value
    Success(c_int),
    /// An iterator-style call has no more items
    Exhausted,
    /// The call failed
    Failure(GitError),
}

impl GitResult {
    /// The raw return code of the delegated call
    pub fn code(&self) -> c_int {
        self.code
    }

    /// Error detail, present only for failures
    pub fn error(&self) -> Option<&ErrorDetail> {
        self.error.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.code >= 0
    }

    pub fn is_exhausted(&self) -> bool {
        self.code == raw::GIT_ITEROVER
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Split into success, exhaustion or failure
    pub fn outcome(self) -> Outcome {
        match self.error {
            Some(detail) => Outcome::Failure(GitError::new(self.code, detail)),
            None if self.code == raw::GIT_ITEROVER => Outcome::Exhausted,
            None => Outcome::Success(self.code),
        }
    }

    /// Collapse exhaustion into success and surface failures as `Err`
    pub fn into_result(self) -> Result<c_int, GitError> {
        match self.error {
            Some(detail) => Err(GitError::new(self.code, detail)),
            None => Ok(self.code),
        }
    }
}

/// Normalize the return code of a delegated call
///
/// Must run on the thread that made the call, before any other libgit2 call,
/// since the error record it claims is overwritten by the next failure.
pub fn wrap_result(code: c_int) -> GitResult {
    if code >= 0 || code == raw::GIT_ITEROVER {
        return GitResult { code, error: None };
    }

    GitResult {
        code,
        error: Some(take_last_error()),
    }
}

/// Copy libgit2's last error into owned memory and clear it
fn take_last_error() -> ErrorDetail {
    // SAFETY: git_error_last returns either null or a pointer to thread-local
    // state that stays valid until the next libgit2 call on this thread; it is
    // copied out before git_error_clear runs.
    unsafe {
        let last = raw::git_error_last();
        let detail = if last.is_null() {
            ErrorDetail::unknown()
        } else {
            let class = ErrorClass::from_raw((*last).klass);
            let message = (*last).message;
            if class == ErrorClass::None || message.is_null() {
                ErrorDetail::unknown()
            } else {
                ErrorDetail {
                    message: CStr::from_ptr(message).to_string_lossy().into_owned(),
                    class,
                }
            }
        };
        raw::git_error_clear();
        detail
    }
}
