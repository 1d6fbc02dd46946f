//! Object ids

use std::fmt;
use std::os::raw::c_char;
use std::str::FromStr;

use gitbind_ffi::raw;

use crate::Error;

/// Raw length of an object id in bytes
const RAW_LEN: usize = raw::GIT_OID_RAWSZ;

/// The id of a git object
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid {
    bytes: [u8; RAW_LEN],
}

impl Oid {
    /// The all-zero id
    pub const ZERO: Oid = Oid {
        bytes: [0; RAW_LEN],
    };

    pub fn from_bytes(bytes: [u8; RAW_LEN]) -> Self {
        Self { bytes }
    }

    /// Copy an id out of libgit2 memory
    ///
    /// # Safety
    ///
    /// `ptr` must point to a valid `git_oid`.
    pub(crate) unsafe fn from_raw(ptr: *const raw::git_oid) -> Self {
        Self {
            bytes: unsafe { (*ptr).id },
        }
    }

    pub(crate) fn to_raw(self) -> raw::git_oid {
        raw::git_oid { id: self.bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bytes {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl FromStr for Oid {
    type Err = Error;

    /// Parse a full or abbreviated hex id; missing digits are zero
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        gitbind_ffi::init();
        let mut out = Oid::ZERO.to_raw();
        unsafe { gitbind_ffi::oid_fromstrn(&mut out, s.as_ptr() as *const c_char, s.len()) }
            .into_result()?;
        Ok(Self { bytes: out.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

    #[test]
    fn test_parse_and_display() {
        let oid: Oid = EMPTY_TREE.parse().unwrap();
        assert_eq!(oid.to_string(), EMPTY_TREE);
        assert!(!oid.is_zero());
    }

    #[test]
    fn test_zero() {
        assert!(Oid::ZERO.is_zero());
        assert_eq!(Oid::ZERO.to_string(), "0".repeat(40));
    }

    #[test]
    fn test_invalid_hex_is_git_error() {
        let err = "xyz".parse::<Oid>().unwrap_err();
        assert!(matches!(err, Error::Git(_)));
        assert!(err.code().is_some());
    }
}
