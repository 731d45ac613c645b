//! Meta data attached to codes and inherited by their descendants.
//!
//! Registration happens in a [`MetaDataBuilder`] during startup; [`MetaDataBuilder::seal`]
//! turns it into a read-only [`MetaData`] that is then shared with whoever needs lookups.
//! Nothing here is global: an application owns its registries.
//!
//! # Examples
//!
//! ```
//! use error_code_rail::{Code, MetaDataBuilder, INTERNAL_CODE};
//!
//! static DB_DOWN: Code = INTERNAL_CODE.child("internal.db_down");
//!
//! let mut builder = MetaDataBuilder::new();
//! INTERNAL_CODE.attach_meta_data(&mut builder, "page the on-call");
//! let runbooks = builder.seal();
//!
//! assert_eq!(DB_DOWN.meta_data_from_ancestors(&runbooks), Some(&"page the on-call"));
//! ```

use crate::types::alloc_type::BTreeMap;
use crate::types::code::{Code, CodeStr, SEPARATOR};
use core::fmt::{self, Display};

/// Raised when a second value is attached to a code that already has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMetaData {
    pub code: CodeStr,
}

impl Display for DuplicateMetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "meta data already exists for error code {}", self.code)
    }
}

impl core::error::Error for DuplicateMetaData {}

/// Write phase of a meta data registry.
#[derive(Debug, Clone)]
pub struct MetaDataBuilder<V> {
    entries: BTreeMap<CodeStr, V>,
}

impl<V> Default for MetaDataBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MetaDataBuilder<V> {
    /// An empty builder.
    #[inline]
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Attaches `value` to `code`, keeping the existing value on conflict.
    pub fn try_attach(&mut self, code: &Code, value: V) -> Result<&mut Self, DuplicateMetaData> {
        let code = code.code_str();
        if self.entries.contains_key(&code) {
            return Err(DuplicateMetaData { code });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(code = %code, "attached error code meta data");

        self.entries.insert(code, value);
        Ok(self)
    }

    /// Attaches `value` to `code`.
    ///
    /// # Panics
    ///
    /// Panics if `code` already has a value. A duplicate is a startup mistake, not something to
    /// recover from.
    #[track_caller]
    pub fn attach(&mut self, code: &Code, value: V) -> &mut Self {
        if let Err(err) = self.try_attach(code, value) {
            panic!("{err}");
        }
        self
    }

    /// By-value form of [`attach`](Self::attach) for chained construction.
    #[track_caller]
    pub fn with(mut self, code: &Code, value: V) -> Self {
        self.attach(code, value);
        self
    }

    /// Ends the write phase.
    pub fn seal(self) -> MetaData<V> {
        #[cfg(feature = "tracing")]
        tracing::debug!(entries = self.entries.len(), "sealed error code meta data");

        MetaData { entries: self.entries }
    }
}

/// Read-only meta data keyed by full code path.
#[derive(Debug, Clone)]
pub struct MetaData<V> {
    entries: BTreeMap<CodeStr, V>,
}

impl<V> MetaData<V> {
    /// The value attached to exactly this code.
    pub fn get(&self, code: &Code) -> Option<&V> {
        self.entries.get(&code.code_str())
    }

    /// The value attached to `code`, or to its nearest ancestor that has one.
    pub fn from_ancestors(&self, code: &Code) -> Option<&V> {
        let path = code.code_str();
        let mut key = path.as_str();
        loop {
            if let Some(value) = self.entries.get(key) {
                return Some(value);
            }
            // Dropping the last segment of the path steps to the parent code.
            key = &key[..key.rfind(SEPARATOR)?];
        }
    }

    /// Number of codes with a value of their own.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no code has a value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered paths and their values, ordered by path.
    pub fn iter(&self) -> impl Iterator<Item = (&CodeStr, &V)> {
        self.entries.iter()
    }
}
