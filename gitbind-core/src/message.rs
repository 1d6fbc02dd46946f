//! Commit message cleanup

use std::os::raw::{c_char, c_int};

use crate::util::{to_cstring, Buf};
use crate::{Error, Result};

/// Default comment marker, as used by `git commit`
pub const DEFAULT_COMMENT_CHAR: char = '#';

/// Clean up a message the way `git commit` does
///
/// Trailing whitespace is removed, runs of blank lines are collapsed and a
/// final newline is added. With `strip_comments`, lines starting with
/// `comment_char` are dropped.
pub fn prettify(message: &str, strip_comments: bool, comment_char: char) -> Result<String> {
    if !comment_char.is_ascii() {
        return Err(Error::InvalidCommentChar(comment_char));
    }
    gitbind_ffi::init();
    let cmessage = to_cstring(message)?;

    let mut buf = Buf::new();
    unsafe {
        gitbind_ffi::message_prettify(
            buf.raw(),
            cmessage.as_ptr(),
            strip_comments as c_int,
            comment_char as u8 as c_char,
        )
    }
    .into_result()?;

    Ok(buf.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_added() {
        assert_eq!(prettify("newline added", false, '#').unwrap(), "newline added\n");
    }

    #[test]
    fn test_comment_untouched_without_strip() {
        assert_eq!(
            prettify("newline added\n#comment untouched", false, '#').unwrap(),
            "newline added\n#comment untouched\n"
        );
    }

    #[test]
    fn test_comment_stripped() {
        assert_eq!(
            prettify("comment stripped\n#stripped comment\n", true, '#').unwrap(),
            "comment stripped\n"
        );
    }

    #[test]
    fn test_blank_lines_collapsed() {
        assert_eq!(prettify("a  \n\n\n\nb\n\n", false, '#').unwrap(), "a\n\nb\n");
    }

    #[test]
    fn test_non_ascii_marker_rejected() {
        assert!(matches!(
            prettify("x", true, 'é'),
            Err(Error::InvalidCommentChar('é'))
        ));
    }
}
