//! Validation of code segments.
//!
//! Everything here is `const` so that codes declared as `static` items are checked while the
//! crate is compiled, and codes built at runtime are checked on construction.

use core::fmt::{self, Display};

/// Separator between the segments of a full code path.
pub const SEPARATOR: &str = ".";

const SEPARATOR_BYTE: u8 = b'.';

/// A segment string that cannot be turned into a [`Code`](super::Code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePathError {
    /// The segment, or the last component of a qualified segment, is empty.
    Empty { code: &'static str },
    /// A root code was given a dot-separated path.
    RootContainsSeparator { code: &'static str },
    /// A qualified child path does not name its parent as the second-to-last segment.
    ParentMismatch { code: &'static str, found: &'static str, expected: &'static str },
}

impl CodePathError {
    /// The offending segment string as it was passed in.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Empty { code }
            | Self::RootContainsSeparator { code }
            | Self::ParentMismatch { code, .. } => *code,
        }
    }

    /// Aborts construction. Used by the panicking constructors, including in const context.
    #[track_caller]
    pub(crate) const fn fail(self) -> ! {
        match self {
            Self::Empty { .. } => panic!("error code segment must not be empty"),
            Self::RootContainsSeparator { .. } => {
                panic!("a root error code must not contain the '.' separator")
            },
            Self::ParentMismatch { .. } => {
                panic!("qualified error code does not name its parent as the second-to-last segment")
            },
        }
    }
}

impl Display for CodePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { code } => write!(f, "empty segment in error code {code:?}"),
            Self::RootContainsSeparator { code } => {
                write!(f, "expected no parent paths in root error code {code:?}")
            },
            Self::ParentMismatch { code, found, expected } => write!(
                f,
                "got {found:?} but expected a path to parent {expected:?} for {code:?}"
            ),
        }
    }
}

impl core::error::Error for CodePathError {}

/// Checks a root segment.
pub(crate) const fn check_root(code: &'static str) -> Result<&'static str, CodePathError> {
    if code.is_empty() {
        return Err(CodePathError::Empty { code });
    }
    if last_separator(code.as_bytes(), code.len()).is_some() {
        return Err(CodePathError::RootContainsSeparator { code });
    }
    Ok(code)
}

/// Checks a child segment against its parent's segment and returns the local segment.
///
/// `code` is either bare (`"blocked"`) or qualified (`"state.blocked"`); for a qualified path
/// only the second-to-last component is compared with `parent`.
pub(crate) const fn check_child(
    code: &'static str,
    parent: &'static str,
) -> Result<&'static str, CodePathError> {
    let bytes = code.as_bytes();
    let last = match last_separator(bytes, bytes.len()) {
        None if code.is_empty() => return Err(CodePathError::Empty { code }),
        None => return Ok(code),
        Some(last) => last,
    };

    let local = sub_str(code, last + 1, bytes.len());
    if local.is_empty() {
        return Err(CodePathError::Empty { code });
    }

    let found = match last_separator(bytes, last) {
        Some(start) => sub_str(code, start + 1, last),
        None => sub_str(code, 0, last),
    };
    if !str_eq(found, parent) {
        return Err(CodePathError::ParentMismatch { code, found, expected: parent });
    }
    Ok(local)
}

/// Index of the last separator in `bytes[..end]`.
const fn last_separator(bytes: &[u8], end: usize) -> Option<usize> {
    let mut i = end;
    while i > 0 {
        i -= 1;
        if bytes[i] == SEPARATOR_BYTE {
            return Some(i);
        }
    }
    None
}

const fn sub_str(s: &'static str, start: usize, end: usize) -> &'static str {
    let (head, _) = s.as_bytes().split_at(end);
    let (_, sub) = head.split_at(start);
    // Bounds always sit next to an ASCII separator, so they are char boundaries.
    match core::str::from_utf8(sub) {
        Ok(sub) => sub,
        Err(_) => panic!("error code segments must split on char boundaries"),
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
