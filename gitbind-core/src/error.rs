//! Error types for gitbind

use std::path::PathBuf;

use gitbind_ffi::{ErrorClass, ErrorCode, GitError};
use thiserror::Error;

/// Result type alias for gitbind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gitbind operations
#[derive(Error, Debug)]
pub enum Error {
    /// A libgit2 call failed
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// The commit would not change anything
    #[error("nothing to commit, working directory clean")]
    NothingToCommit,

    /// The commit message is empty
    #[error("empty commit message")]
    EmptyMessage,

    /// A string argument contains a NUL byte
    #[error("String contains a NUL byte: {0}")]
    Nul(#[from] std::ffi::NulError),

    /// A path cannot be handed to libgit2
    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    /// A reference that should point at an object does not
    #[error("Reference {0:?} does not point directly at an object")]
    InvalidReference(String),

    /// Comment markers must be a single ASCII character
    #[error("Comment character must be ASCII, got {0:?}")]
    InvalidCommentChar(char),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// libgit2 status code, for errors that came from libgit2
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Error::Git(e) => Some(e.code()),
            _ => None,
        }
    }

    /// libgit2 error class, for errors that came from libgit2
    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            Error::Git(e) => Some(e.class()),
            _ => None,
        }
    }
}
