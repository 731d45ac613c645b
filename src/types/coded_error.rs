//! Attaching a code to an arbitrary error.

use crate::traits::{client_data, ClientData, ErrorCode, HasClientData, HasOperation};
use crate::types::alloc_type::{Box, String, ToString};
use crate::types::code::Code;
use core::fmt::{self, Debug, Display};
use serde_json::Value;

type BoxedError = Box<dyn core::error::Error + Send + Sync>;

/// A plain error that also provides its own client data.
trait DataError: core::error::Error + ClientData + Send + Sync + 'static {
    fn as_error(&self) -> &(dyn core::error::Error + Send + Sync + 'static);

    fn as_data(&self) -> &dyn ClientData;

    fn into_error(self: Box<Self>) -> BoxedError;
}

impl<E> DataError for E
where
    E: core::error::Error + ClientData + Send + Sync + 'static,
{
    fn as_error(&self) -> &(dyn core::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_data(&self) -> &dyn ClientData {
        self
    }

    fn into_error(self: Box<Self>) -> BoxedError {
        self
    }
}

enum Plain {
    Message(BoxedError),
    Data(Box<dyn DataError>),
}

/// An error that carries no code of its own.
///
/// As client data it is reported as its message, unless it was created with
/// [`with_data`](PlainError::with_data).
pub struct PlainError(Plain);

impl PlainError {
    /// Wraps an error that is reported by its message.
    #[inline]
    pub fn new<E>(err: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self(Plain::Message(Box::new(err)))
    }

    /// Wraps an error whose [`ClientData`] is sent to clients in place of its message.
    #[inline]
    pub fn with_data<E>(err: E) -> Self
    where
        E: core::error::Error + ClientData + Send + Sync + 'static,
    {
        Self(Plain::Data(Box::new(err)))
    }

    /// The wrapped error.
    #[inline]
    pub fn get_ref(&self) -> &(dyn core::error::Error + Send + Sync + 'static) {
        match &self.0 {
            Plain::Message(err) => &**err,
            Plain::Data(err) => err.as_error(),
        }
    }

    /// The payload for clients: the wrapped error's own data, or this error as its message.
    pub fn data(&self) -> &dyn ClientData {
        match &self.0 {
            Plain::Message(_) => self,
            Plain::Data(err) => err.as_data(),
        }
    }

    /// Unwraps the boxed error.
    pub fn into_inner(self) -> BoxedError {
        match self.0 {
            Plain::Message(err) => err,
            Plain::Data(err) => err.into_error(),
        }
    }
}

impl Debug for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.get_ref(), f)
    }
}

impl Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.get_ref(), f)
    }
}

impl ClientData for PlainError {
    fn to_json(&self) -> Value {
        match &self.0 {
            Plain::Message(err) => Value::String(err.to_string()),
            Plain::Data(err) => err.to_json(),
        }
    }

    fn as_has_operation(&self) -> Option<&dyn HasOperation> {
        match &self.0 {
            Plain::Message(_) => None,
            Plain::Data(err) => err.as_has_operation(),
        }
    }
}

impl<E> From<E> for PlainError
where
    E: core::error::Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::new(err)
    }
}

/// The error wrapped by a [`CodedError`].
///
/// The variant records whether the wrapped error already has a code, which decides whether the
/// default code passed to [`CodedError::new`] is used.
#[derive(Debug)]
pub enum Source {
    Coded(Box<dyn ErrorCode + Send + Sync>),
    Plain(PlainError),
}

impl Source {
    /// Wraps an error that has its own code.
    #[inline]
    pub fn coded<E>(err: E) -> Self
    where
        E: ErrorCode + Send + Sync + 'static,
    {
        Self::Coded(Box::new(err))
    }

    /// Wraps an error without a code.
    #[inline]
    pub fn plain<E>(err: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Plain(PlainError::new(err))
    }

    /// Wraps an error without a code whose [`ClientData`] is reported in place of its message.
    #[inline]
    pub fn plain_data<E>(err: E) -> Self
    where
        E: core::error::Error + ClientData + Send + Sync + 'static,
    {
        Self::Plain(PlainError::with_data(err))
    }

    /// The code of the wrapped error, if it has one.
    #[inline]
    pub fn code(&self) -> Option<Code> {
        match self {
            Self::Coded(err) => Some(err.code()),
            Self::Plain(_) => None,
        }
    }

    /// The wrapped error as an [`ErrorCode`], if it is one.
    #[inline]
    pub fn as_error_code(&self) -> Option<&(dyn ErrorCode + Send + Sync)> {
        match self {
            Self::Coded(err) => Some(&**err),
            Self::Plain(_) => None,
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coded(err) => Display::fmt(err, f),
            Self::Plain(err) => Display::fmt(err, f),
        }
    }
}

impl From<Box<dyn ErrorCode + Send + Sync>> for Source {
    fn from(err: Box<dyn ErrorCode + Send + Sync>) -> Self {
        Self::Coded(err)
    }
}

impl From<BoxedError> for Source {
    fn from(err: BoxedError) -> Self {
        Self::Plain(PlainError(Plain::Message(err)))
    }
}

impl From<PlainError> for Source {
    fn from(err: PlainError) -> Self {
        Self::Plain(err)
    }
}

impl From<&str> for Source {
    fn from(msg: &str) -> Self {
        Self::from(BoxedError::from(msg))
    }
}

impl From<String> for Source {
    fn from(msg: String) -> Self {
        Self::from(BoxedError::from(msg))
    }
}

impl From<CodedError> for Source {
    fn from(err: CodedError) -> Self {
        Self::coded(err)
    }
}

// Standard errors that never carry a code, so `ResultExt` can classify them directly.
macro_rules! plain_source {
    ($($err:ty),* $(,)?) => {
        $(
            impl From<$err> for Source {
                fn from(err: $err) -> Self {
                    Self::plain(err)
                }
            }
        )*
    };
}

plain_source!(
    core::fmt::Error,
    core::num::ParseIntError,
    core::num::ParseFloatError,
    core::num::TryFromIntError,
    core::str::ParseBoolError,
    core::str::Utf8Error,
    core::char::ParseCharError,
    crate::types::alloc_type::FromUtf8Error,
);

#[cfg(feature = "std")]
plain_source!(std::io::Error);

/// Attaches a code to an error so that it satisfies [`ErrorCode`].
///
/// Meant for broad error kinds (such as those mapping to an HTTP status) that many different
/// underlying errors fall into. The kinds in this crate ([`InvalidInputErr`](crate::InvalidInputErr),
/// [`InternalErr`](crate::InternalErr), [`NotFoundErr`](crate::NotFoundErr)) are thin wrappers
/// around it; wrap it the same way to give an error kind its own name.
///
/// # Examples
///
/// ```
/// use error_code_rail::{CodedError, ErrorCode, Source, INVALID_INPUT_CODE, NOT_FOUND_CODE};
///
/// let plain = CodedError::new("bad page size", INVALID_INPUT_CODE);
/// assert_eq!(plain.code(), INVALID_INPUT_CODE);
///
/// // An error that already has a code keeps it.
/// let coded = CodedError::new(Source::coded(plain), NOT_FOUND_CODE);
/// assert_eq!(coded.code(), INVALID_INPUT_CODE);
/// ```
#[derive(Debug)]
pub struct CodedError {
    code: Code,
    source: Source,
}

impl CodedError {
    /// Wraps `source` with `code`, unless `source` already has a code of its own.
    pub fn new(source: impl Into<Source>, code: Code) -> Self {
        let source = source.into();
        let code = source.code().unwrap_or(code);
        Self { code, source }
    }

    /// Wraps `source` with exactly `code`, whatever code `source` has.
    pub fn with_code(source: impl Into<Source>, code: Code) -> Self {
        Self { code, source: source.into() }
    }

    /// The wrapped error.
    #[inline]
    pub fn source_ref(&self) -> &Source {
        &self.source
    }

    /// Unwraps the wrapped error.
    #[inline]
    pub fn into_source(self) -> Source {
        self.source
    }
}

impl Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.source, f)
    }
}

impl ErrorCode for CodedError {
    #[inline]
    fn code(&self) -> Code {
        self.code
    }

    #[inline]
    fn as_has_client_data(&self) -> Option<&dyn HasClientData> {
        Some(self)
    }
}

impl HasClientData for CodedError {
    /// The client data of the wrapped error, never the `CodedError` itself.
    fn client_data(&self) -> &dyn ClientData {
        match &self.source {
            Source::Coded(err) => client_data(&**err),
            Source::Plain(err) => err.data(),
        }
    }
}

impl ClientData for CodedError {
    fn to_json(&self) -> Value {
        HasClientData::client_data(self).to_json()
    }
}

impl core::error::Error for CodedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.source {
            Source::Plain(err) => Some(err.get_ref()),
            Source::Coded(_) => None,
        }
    }
}
