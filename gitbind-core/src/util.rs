//! Conversions between Rust values and the C strings libgit2 expects

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::Path;
use std::{mem, slice};

use gitbind_ffi::raw;

use crate::{Error, Result};

pub(crate) fn to_cstring(s: &str) -> Result<CString> {
    Ok(CString::new(s)?)
}

pub(crate) fn path_to_cstring(path: &Path) -> Result<CString> {
    let s = path
        .to_str()
        .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;
    to_cstring(s)
}

/// Copy a NUL-terminated string owned by libgit2
///
/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated string.
pub(crate) unsafe fn from_cstr(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// A `git_buf` that is disposed on drop
pub(crate) struct Buf {
    raw: raw::git_buf,
}

impl Buf {
    pub(crate) fn new() -> Self {
        // SAFETY: an all-zero git_buf is the documented empty buffer
        Self {
            raw: unsafe { mem::zeroed() },
        }
    }

    pub(crate) fn raw(&mut self) -> *mut raw::git_buf {
        &mut self.raw
    }

    pub(crate) fn to_string_lossy(&self) -> String {
        if self.raw.ptr.is_null() {
            return String::new();
        }
        // SAFETY: libgit2 keeps `size` bytes initialized at `ptr`
        let bytes = unsafe { slice::from_raw_parts(self.raw.ptr as *const u8, self.raw.size) };
        String::from_utf8_lossy(bytes).into_owned()
    }
}

impl Drop for Buf {
    fn drop(&mut self) {
        unsafe { raw::git_buf_dispose(&mut self.raw) }
    }
}
