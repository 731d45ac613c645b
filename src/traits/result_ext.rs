//! Extension traits for classifying errors inside `Result` without `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use error_code_rail::traits::ResultExt;
//! use error_code_rail::{ErrorCode, InvalidInputErr, INVALID_INPUT_CODE};
//!
//! fn page_size(raw: &str) -> Result<u32, InvalidInputErr> {
//!     raw.parse::<u32>().invalid_input()
//! }
//!
//! let err = page_size("ten").unwrap_err();
//! assert_eq!(err.code(), INVALID_INPUT_CODE);
//! ```

use crate::traits::ErrorCode;
use crate::types::alloc_type::Cow;
use crate::types::code::Code;
use crate::types::coded_error::{CodedError, Source};
use crate::types::kinds::{InternalErr, InvalidInputErr, NotFoundErr};
use crate::types::operation::OpErrCode;

/// Promotes the error of a `Result` to one of the coded error kinds.
///
/// Implemented for any `Result` whose error converts into a [`Source`]. Errors with a code (the
/// kinds of this crate, [`OpErrCode`], types using [`impl_error_code!`](crate::impl_error_code))
/// keep it, following the rules of each kind. Common standard errors convert as plain errors;
/// any other error can be passed through [`Source::plain`] or [`Source::plain_data`] first.
///
/// ```
/// use error_code_rail::traits::ResultExt;
/// use error_code_rail::{internal, ErrorCode, InternalErr, Source, INTERNAL_CODE};
///
/// #[derive(Debug)]
/// struct Offline;
///
/// impl std::fmt::Display for Offline {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("offline")
///     }
/// }
///
/// impl std::error::Error for Offline {}
///
/// let plain: Result<(), Offline> = Err(Offline);
/// assert_eq!(plain.map_err(Source::plain).not_found().unwrap_err().to_string(), "offline");
///
/// // An internal error stays internal.
/// let coded: Result<(), InternalErr> = Err(internal("db down"));
/// assert_eq!(coded.invalid_input().unwrap_err().code(), INTERNAL_CODE);
/// ```
pub trait ResultExt<T> {
    /// Classifies the error as invalid input (`input`, HTTP 400).
    fn invalid_input(self) -> Result<T, InvalidInputErr>;

    /// Classifies the error as internal (`internal`, HTTP 500).
    fn internal(self) -> Result<T, InternalErr>;

    /// Classifies the error as not found (`missing`, HTTP 404).
    fn not_found(self) -> Result<T, NotFoundErr>;

    /// Attaches `code` to the error, unless it already has one.
    fn with_code(self, code: Code) -> Result<T, CodedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Source>,
{
    #[inline]
    fn invalid_input(self) -> Result<T, InvalidInputErr> {
        self.map_err(InvalidInputErr::new)
    }

    #[inline]
    fn internal(self) -> Result<T, InternalErr> {
        self.map_err(InternalErr::new)
    }

    #[inline]
    fn not_found(self) -> Result<T, NotFoundErr> {
        self.map_err(NotFoundErr::new)
    }

    #[inline]
    fn with_code(self, code: Code) -> Result<T, CodedError> {
        self.map_err(|e| CodedError::new(e, code))
    }
}

/// Attaches an operation to the [`ErrorCode`] of a `Result`.
///
/// ```
/// use error_code_rail::traits::OpResultExt;
/// use error_code_rail::{invalid_input, HasOperation, InvalidInputErr};
///
/// let result: Result<(), InvalidInputErr> = Err(invalid_input("empty name"));
/// let err = result.op("user.rename").unwrap_err();
///
/// assert_eq!(err.operation(), "user.rename");
/// assert_eq!(err.to_string(), "user.rename: empty name");
/// ```
pub trait OpResultExt<T, E> {
    fn op(self, operation: impl Into<Cow<'static, str>>) -> Result<T, OpErrCode<E>>;

    /// Lazy form of [`op`](OpResultExt::op); `f` only runs on the error path.
    fn op_with<F, S>(self, f: F) -> Result<T, OpErrCode<E>>
    where
        F: FnOnce() -> S,
        S: Into<Cow<'static, str>>;
}

impl<T, E: ErrorCode> OpResultExt<T, E> for Result<T, E> {
    #[inline]
    fn op(self, operation: impl Into<Cow<'static, str>>) -> Result<T, OpErrCode<E>> {
        self.map_err(|e| OpErrCode::new(operation, e))
    }

    #[inline]
    fn op_with<F, S>(self, f: F) -> Result<T, OpErrCode<E>>
    where
        F: FnOnce() -> S,
        S: Into<Cow<'static, str>>,
    {
        self.map_err(|e| OpErrCode::new(f(), e))
    }
}
