//! Action signatures (who and when)

use std::fmt;
use std::ptr;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use gitbind_ffi::raw;

use crate::util::from_cstr;
use crate::Result;

/// An owned signature: name, email and timestamp of an action
pub struct Signature {
    raw: *mut raw::git_signature,
    name: String,
    email: String,
    when: DateTime<FixedOffset>,
}

impl Signature {
    /// Take ownership of a signature allocated by libgit2
    ///
    /// # Safety
    ///
    /// `raw` must be a valid signature that nothing else frees.
    pub(crate) unsafe fn from_raw(raw: *mut raw::git_signature) -> Self {
        let (name, email, time, offset_minutes) = unsafe {
            (
                from_cstr((*raw).name).unwrap_or_default(),
                from_cstr((*raw).email).unwrap_or_default(),
                (*raw).when.time,
                (*raw).when.offset,
            )
        };
        Self {
            raw,
            name,
            email,
            when: to_datetime(time, offset_minutes),
        }
    }

    /// Duplicate a signature libgit2 owns elsewhere (e.g. inside a commit)
    ///
    /// # Safety
    ///
    /// `sig` must be a valid signature for the duration of the call.
    pub(crate) unsafe fn duplicate_raw(sig: *const raw::git_signature) -> Result<Self> {
        let mut out = ptr::null_mut();
        unsafe { gitbind_ffi::signature_dup(&mut out, sig) }.into_result()?;
        Ok(unsafe { Self::from_raw(out) })
    }

    pub(crate) fn raw(&self) -> *const raw::git_signature {
        self.raw
    }

    /// Full name of the person
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// When the action happened, in the timezone it was recorded in
    pub fn when(&self) -> DateTime<FixedOffset> {
        self.when
    }

    /// An independent copy of this signature
    pub fn duplicate(&self) -> Result<Self> {
        unsafe { Self::duplicate_raw(self.raw) }
    }
}

/// libgit2 stores the offset in minutes
fn to_datetime(time: i64, offset_minutes: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(offset_minutes.saturating_mul(60)).unwrap_or(Utc.fix());
    let utc = Utc.timestamp_opt(time, 0).single().unwrap_or_default();
    utc.with_timezone(&offset)
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("when", &self.when)
            .finish()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

impl Drop for Signature {
    fn drop(&mut self) {
        unsafe { raw::git_signature_free(self.raw) }
    }
}
