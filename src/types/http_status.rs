//! HTTP status inheritance for error codes.
//!
//! A status registered on a code applies to every descendant that does not register its own,
//! so a specific leaf code usually needs no status at all.

use crate::codes::{INTERNAL_CODE, INVALID_INPUT_CODE, NOT_FOUND_CODE, STATE_CODE};
use crate::traits::ErrorCode;
use crate::types::code::Code;
use crate::types::meta_data::{DuplicateMetaData, MetaData, MetaDataBuilder};

/// Status numbers used by the standard codes.
pub mod status {
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Status returned when neither a code nor any of its ancestors has one.
pub const DEFAULT_HTTP_STATUS: u16 = status::BAD_REQUEST;

/// Write phase of an [`HttpStatusRegistry`].
#[derive(Debug, Clone)]
pub struct HttpStatusBuilder {
    statuses: MetaDataBuilder<u16>,
    default_status: u16,
}

impl Default for HttpStatusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpStatusBuilder {
    /// An empty builder with a `400 Bad Request` fallback.
    #[inline]
    pub fn new() -> Self {
        Self { statuses: MetaDataBuilder::new(), default_status: DEFAULT_HTTP_STATUS }
    }

    /// Overrides the fallback status for codes without any registered ancestor.
    #[inline]
    pub fn default_status(mut self, status: u16) -> Self {
        self.default_status = status;
        self
    }

    /// Registers `status` for `code`.
    ///
    /// # Panics
    ///
    /// Panics if `code` already has a status.
    #[track_caller]
    pub fn set(&mut self, code: &Code, status: u16) -> &mut Self {
        self.statuses.attach(code, status);
        self
    }

    /// Registers `status` for `code`, keeping the existing status on conflict.
    pub fn try_set(&mut self, code: &Code, status: u16) -> Result<&mut Self, DuplicateMetaData> {
        self.statuses.try_attach(code, status)?;
        Ok(self)
    }

    /// By-value form of [`set`](Self::set) for chained construction.
    #[track_caller]
    pub fn with(mut self, code: &Code, status: u16) -> Self {
        self.set(code, status);
        self
    }

    /// Ends the write phase.
    pub fn build(self) -> HttpStatusRegistry {
        HttpStatusRegistry { statuses: self.statuses.seal(), default_status: self.default_status }
    }
}

/// Sealed mapping from codes to HTTP statuses.
///
/// # Examples
///
/// ```
/// use error_code_rail::{Code, HttpStatusRegistry, NOT_FOUND_CODE};
///
/// static USER_MISSING: Code = NOT_FOUND_CODE.child("missing.user");
/// static UNREGISTERED: Code = Code::new("teapot");
///
/// let statuses = HttpStatusRegistry::standard();
/// assert_eq!(USER_MISSING.http_status(&statuses), 404);
/// assert_eq!(UNREGISTERED.http_status(&statuses), 400);
/// ```
#[derive(Debug, Clone)]
pub struct HttpStatusRegistry {
    statuses: MetaData<u16>,
    default_status: u16,
}

impl HttpStatusRegistry {
    /// An empty builder.
    #[inline]
    pub fn builder() -> HttpStatusBuilder {
        HttpStatusBuilder::new()
    }

    /// A builder pre-loaded with the statuses of the standard root codes.
    pub fn standard_builder() -> HttpStatusBuilder {
        HttpStatusBuilder::new()
            .with(&INTERNAL_CODE, status::INTERNAL_SERVER_ERROR)
            .with(&INVALID_INPUT_CODE, status::BAD_REQUEST)
            .with(&NOT_FOUND_CODE, status::NOT_FOUND)
            .with(&STATE_CODE, status::BAD_REQUEST)
    }

    /// The standard root codes and nothing else.
    pub fn standard() -> Self {
        Self::standard_builder().build()
    }

    /// The status of `code` or its nearest ancestor with one, else the default status.
    pub fn status_of(&self, code: &Code) -> u16 {
        self.statuses.from_ancestors(code).copied().unwrap_or(self.default_status)
    }

    /// The status for an error's code.
    #[inline]
    pub fn status_for<E: ErrorCode + ?Sized>(&self, err: &E) -> u16 {
        self.status_of(&err.code())
    }

    /// The status registered for exactly this code, without inheritance.
    #[inline]
    pub fn registered(&self, code: &Code) -> Option<u16> {
        self.statuses.get(code).copied()
    }

    /// Status used when neither a code nor any of its ancestors has one.
    #[inline]
    pub fn default_status(&self) -> u16 {
        self.default_status
    }
}
