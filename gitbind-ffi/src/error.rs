//! Error types for delegated libgit2 calls

use std::fmt;
use std::os::raw::c_int;

use thiserror::Error;

/// Message attached when libgit2 fails without recording anything
pub(crate) const UNKNOWN_ERROR_MESSAGE: &str = "an unknown git error occurred";

/// Status codes returned by libgit2 (`git_error_code`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Generic error
    GenericError,
    /// Requested object could not be found
    NotFound,
    /// Object exists preventing operation
    Exists,
    /// More than one object matches
    Ambiguous,
    /// Output buffer too short to hold data
    BufSize,
    /// Callback returned a user error
    User,
    /// Operation not allowed on bare repository
    BareRepo,
    /// HEAD refers to branch with no commits
    UnbornBranch,
    /// Merge in progress prevented operation
    Unmerged,
    /// Reference was not fast-forwardable
    NotFastForward,
    /// Name/ref spec was not in a valid format
    InvalidSpec,
    /// Checkout conflicts prevented operation
    Conflict,
    /// Lock file prevented operation
    Locked,
    /// Reference value does not match expected
    Modified,
    /// Authentication error
    Auth,
    /// Server certificate is invalid
    Certificate,
    /// Patch/merge has already been applied
    Applied,
    /// The requested peel operation is not possible
    Peel,
    /// Unexpected EOF
    Eof,
    /// Invalid operation or input
    Invalid,
    /// Uncommitted changes in index prevented operation
    Uncommitted,
    /// The operation is not valid for a directory
    Directory,
    /// A merge conflict exists and cannot continue
    MergeConflict,
    /// A user-configured callback refused to act
    Passthrough,
    /// Signals end of iteration
    IterOver,
    /// Internal only
    Retry,
    /// Hashsum mismatch in object
    Mismatch,
    /// Unsaved changes in the index would be overwritten
    IndexDirty,
    /// Patch application failed
    ApplyFail,
    /// The object is not owned by the current user
    Owner,
    /// The operation timed out
    Timeout,
    /// A code this crate does not know about
    Other(i32),
}

impl ErrorCode {
    /// Map a raw libgit2 status code
    pub fn from_raw(code: c_int) -> Self {
        match code {
            -1 => Self::GenericError,
            -3 => Self::NotFound,
            -4 => Self::Exists,
            -5 => Self::Ambiguous,
            -6 => Self::BufSize,
            -7 => Self::User,
            -8 => Self::BareRepo,
            -9 => Self::UnbornBranch,
            -10 => Self::Unmerged,
            -11 => Self::NotFastForward,
            -12 => Self::InvalidSpec,
            -13 => Self::Conflict,
            -14 => Self::Locked,
            -15 => Self::Modified,
            -16 => Self::Auth,
            -17 => Self::Certificate,
            -18 => Self::Applied,
            -19 => Self::Peel,
            -20 => Self::Eof,
            -21 => Self::Invalid,
            -22 => Self::Uncommitted,
            -23 => Self::Directory,
            -24 => Self::MergeConflict,
            -30 => Self::Passthrough,
            -31 => Self::IterOver,
            -32 => Self::Retry,
            -33 => Self::Mismatch,
            -34 => Self::IndexDirty,
            -35 => Self::ApplyFail,
            -36 => Self::Owner,
            -37 => Self::Timeout,
            other => Self::Other(other),
        }
    }

    /// The raw libgit2 value
    pub fn raw(self) -> c_int {
        match self {
            Self::GenericError => -1,
            Self::NotFound => -3,
            Self::Exists => -4,
            Self::Ambiguous => -5,
            Self::BufSize => -6,
            Self::User => -7,
            Self::BareRepo => -8,
            Self::UnbornBranch => -9,
            Self::Unmerged => -10,
            Self::NotFastForward => -11,
            Self::InvalidSpec => -12,
            Self::Conflict => -13,
            Self::Locked => -14,
            Self::Modified => -15,
            Self::Auth => -16,
            Self::Certificate => -17,
            Self::Applied => -18,
            Self::Peel => -19,
            Self::Eof => -20,
            Self::Invalid => -21,
            Self::Uncommitted => -22,
            Self::Directory => -23,
            Self::MergeConflict => -24,
            Self::Passthrough => -30,
            Self::IterOver => -31,
            Self::Retry => -32,
            Self::Mismatch => -33,
            Self::IndexDirty => -34,
            Self::ApplyFail => -35,
            Self::Owner => -36,
            Self::Timeout => -37,
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "{}", code),
            known => write!(f, "{:?} ({})", known, known.raw()),
        }
    }
}

/// Subsystem that recorded an error (`git_error_t`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    None,
    NoMemory,
    Os,
    Invalid,
    Reference,
    Zlib,
    Repository,
    Config,
    Regex,
    Odb,
    Index,
    Object,
    Net,
    Tag,
    Tree,
    Indexer,
    Ssl,
    Submodule,
    Thread,
    Stash,
    Checkout,
    FetchHead,
    Merge,
    Ssh,
    Filter,
    Revert,
    Callback,
    CherryPick,
    Describe,
    Rebase,
    Filesystem,
    Patch,
    Worktree,
    Sha,
    Http,
    Internal,
    /// A class this crate does not know about
    Other(i32),
}

impl ErrorClass {
    /// Map a raw `klass` value from `git_error`
    pub fn from_raw(klass: c_int) -> Self {
        match klass {
            0 => Self::None,
            1 => Self::NoMemory,
            2 => Self::Os,
            3 => Self::Invalid,
            4 => Self::Reference,
            5 => Self::Zlib,
            6 => Self::Repository,
            7 => Self::Config,
            8 => Self::Regex,
            9 => Self::Odb,
            10 => Self::Index,
            11 => Self::Object,
            12 => Self::Net,
            13 => Self::Tag,
            14 => Self::Tree,
            15 => Self::Indexer,
            16 => Self::Ssl,
            17 => Self::Submodule,
            18 => Self::Thread,
            19 => Self::Stash,
            20 => Self::Checkout,
            21 => Self::FetchHead,
            22 => Self::Merge,
            23 => Self::Ssh,
            24 => Self::Filter,
            25 => Self::Revert,
            26 => Self::Callback,
            27 => Self::CherryPick,
            28 => Self::Describe,
            29 => Self::Rebase,
            30 => Self::Filesystem,
            31 => Self::Patch,
            32 => Self::Worktree,
            33 => Self::Sha,
            34 => Self::Http,
            35 => Self::Internal,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(klass) => write!(f, "class {}", klass),
            known => write!(f, "{:?}", known),
        }
    }
}

/// Detached copy of libgit2's last recorded error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Human readable message
    pub message: String,
    /// Subsystem that recorded the error
    pub class: ErrorClass,
}

impl ErrorDetail {
    /// Detail used when libgit2 failed without recording a message
    pub fn unknown() -> Self {
        Self {
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
            class: ErrorClass::None,
        }
    }
}

/// A failed delegated call: its status code plus the claimed error detail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} (class: {}, code: {})", .detail.message, .detail.class, .code)]
pub struct GitError {
    code: ErrorCode,
    detail: ErrorDetail,
}

impl GitError {
    /// Pair a raw failure code with its detail
    pub fn new(code: c_int, detail: ErrorDetail) -> Self {
        Self {
            code: ErrorCode::from_raw(code),
            detail,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn raw_code(&self) -> c_int {
        self.code.raw()
    }

    pub fn class(&self) -> ErrorClass {
        self.detail.class
    }

    pub fn message(&self) -> &str {
        &self.detail.message
    }

    pub fn detail(&self) -> &ErrorDetail {
        &self.detail
    }

    pub fn into_detail(self) -> ErrorDetail {
        self.detail
    }
}
