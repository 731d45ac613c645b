//! Hierarchical error codes.
//!
//! A [`Code`] is a segment plus an optional parent. Codes are meant to be declared once as
//! `static` items and never changed after release; clients branch on the full dot-separated
//! path ([`CodeStr`]), never on the message.
//!
//! # Examples
//!
//! ```
//! use error_code_rail::{Code, STATE_CODE};
//!
//! static PATH_BLOCKED: Code = STATE_CODE.child("state.blocked");
//!
//! assert_eq!(PATH_BLOCKED.code_str(), "state.blocked");
//! assert_eq!(PATH_BLOCKED.segment(), "blocked");
//! assert!(PATH_BLOCKED.is_descendant_of(&STATE_CODE));
//! ```

use crate::types::alloc_type::String;
use crate::types::http_status::{HttpStatusBuilder, HttpStatusRegistry};
use crate::types::meta_data::{MetaData, MetaDataBuilder};
use core::borrow::Borrow;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;

mod path;

pub use path::{CodePathError, SEPARATOR};

/// An immutable node in the error code hierarchy.
///
/// Only the local segment is stored; the full path is rebuilt from the parent chain. Equality
/// and hashing use the full path, so two codes built independently with the same path are equal.
#[derive(Clone, Copy)]
pub struct Code {
    segment: &'static str,
    parent: Option<&'static Code>,
}

impl Code {
    /// Creates a top-level code.
    ///
    /// # Panics
    ///
    /// Panics if `segment` is empty or contains the `.` separator. For a `static` code this is a
    /// compile error.
    #[track_caller]
    pub const fn new(segment: &'static str) -> Self {
        match Self::try_new(segment) {
            Ok(code) => code,
            Err(err) => err.fail(),
        }
    }

    /// Creates a top-level code, returning an error for an invalid segment.
    pub const fn try_new(segment: &'static str) -> Result<Self, CodePathError> {
        match path::check_root(segment) {
            Ok(segment) => Ok(Self { segment, parent: None }),
            Err(err) => Err(err),
        }
    }

    /// Creates a child code.
    ///
    /// For documentation purposes `segment` may be qualified with its parent
    /// (`STATE_CODE.child("state.blocked")`); only the last component is stored.
    ///
    /// # Panics
    ///
    /// Panics if the qualified form does not name this code as the second-to-last segment, or
    /// if the local segment is empty.
    #[track_caller]
    pub const fn child(&'static self, segment: &'static str) -> Self {
        match self.try_child(segment) {
            Ok(code) => code,
            Err(err) => err.fail(),
        }
    }

    /// Creates a child code, returning an error instead of panicking.
    pub const fn try_child(&'static self, segment: &'static str) -> Result<Self, CodePathError> {
        match path::check_child(segment, self.segment) {
            Ok(segment) => Ok(Self { segment, parent: Some(self) }),
            Err(err) => Err(err),
        }
    }

    /// The local segment, without parent paths.
    #[inline]
    pub const fn segment(&self) -> &'static str {
        self.segment
    }

    /// The code this one was created from, `None` for a top-level code.
    #[inline]
    pub const fn parent(&self) -> Option<&'static Code> {
        self.parent
    }

    /// Whether this is a top-level code.
    #[inline]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The top-level code of this hierarchy.
    pub fn root(&self) -> &Code {
        self.ancestors().last().unwrap_or(self)
    }

    /// Iterates from this code up to its root, this code included.
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// The full dot-separated path. This is what clients see and what should be compared.
    pub fn code_str(&self) -> CodeStr {
        let mut segments: SmallVec<[&'static str; 4]> =
            self.ancestors().map(Code::segment).collect();
        segments.reverse();
        CodeStr(segments.join(SEPARATOR))
    }

    /// Whether `ancestor` is this code or one of its parents.
    pub fn is_descendant_of(&self, ancestor: &Code) -> bool {
        self.ancestors().any(|code| code == ancestor)
    }

    /// Whether this code is `descendant` or one of its parents.
    #[inline]
    pub fn is_ancestor_of(&self, descendant: &Code) -> bool {
        descendant.is_descendant_of(self)
    }

    /// Attaches `value` to this code in `builder`.
    ///
    /// # Panics
    ///
    /// Panics if the builder already holds a value for this code.
    #[track_caller]
    pub fn attach_meta_data<V>(&self, builder: &mut MetaDataBuilder<V>, value: V) -> Self {
        builder.attach(self, value);
        *self
    }

    /// Looks up meta data for this code, falling back to the nearest ancestor that has some.
    #[inline]
    pub fn meta_data_from_ancestors<'m, V>(&self, meta_data: &'m MetaData<V>) -> Option<&'m V> {
        meta_data.from_ancestors(self)
    }

    /// Registers an HTTP status for this code and everything below it.
    ///
    /// # Panics
    ///
    /// Panics if a status is already registered for this code.
    #[track_caller]
    pub fn set_http(&self, builder: &mut HttpStatusBuilder, status: u16) -> Self {
        builder.set(self, status);
        *self
    }

    /// The HTTP status of this code or of its nearest ancestor with one.
    #[inline]
    pub fn http_status(&self, registry: &HttpStatusRegistry) -> u16 {
        registry.status_of(self)
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        self.ancestors().map(Code::segment).eq(other.ancestors().map(Code::segment))
    }
}

impl Eq for Code {}

impl Hash for Code {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for code in self.ancestors() {
            code.segment.hash(state);
        }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            Display::fmt(parent, f)?;
            f.write_str(SEPARATOR)?;
        }
        f.write_str(self.segment)
    }
}

impl Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Code").field(&format_args!("{self}")).finish()
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Iterator over a code and its parents, created by [`Code::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a Code>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Code;

    fn next(&mut self) -> Option<Self::Item> {
        let code = self.next?;
        self.next = code.parent;
        Some(code)
    }
}

impl core::iter::FusedIterator for Ancestors<'_> {}

/// The full dot-separated representation of a [`Code`].
///
/// A string rather than an integer: new codes never collide across teams and clients can read
/// them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeStr(String);

impl CodeStr {
    /// The full path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps the full path.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// The path segments from the root down.
    pub fn segments(&self) -> core::str::Split<'_, &'static str> {
        self.0.split(SEPARATOR)
    }
}

impl Display for CodeStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CodeStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CodeStr {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CodeStr {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CodeStr {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&Code> for CodeStr {
    fn from(code: &Code) -> Self {
        code.code_str()
    }
}

impl From<Code> for CodeStr {
    fn from(code: Code) -> Self {
        code.code_str()
    }
}

impl From<CodeStr> for String {
    fn from(code: CodeStr) -> Self {
        code.0
    }
}
