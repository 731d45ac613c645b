//! Recording the operation that failed.
//!
//! The aim is a readable trace of what was being attempted across a system, independent of the
//! code. There are two ways to record it without implementing [`HasOperation`] by hand:
//! wrap an error with [`op`] / [`AddOp::add_to`], or embed an [`EmbedOp`] in a domain error.
//!
//! # Examples
//!
//! ```
//! use error_code_rail::{json_format, not_found, op, ErrorCode};
//!
//! let create = op("user.create");
//! let err = create.add_to(not_found("no such team"));
//!
//! assert_eq!(err.to_string(), "user.create: no such team");
//! assert_eq!(err.code().code_str(), "missing");
//! assert_eq!(json_format(&err).operation, "user.create");
//! ```

use crate::traits::{client_data, ClientData, ErrorCode, HasClientData, HasOperation};
use crate::types::alloc_type::Cow;
use crate::types::code::Code;
use crate::types::coded_error::Source;
use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An operation label meant to be embedded in domain error structs.
///
/// Return it from [`ClientData::as_has_operation`], or use
/// `impl_client_data!(Type, op = field)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmbedOp {
    pub op: Cow<'static, str>,
}

impl EmbedOp {
    /// An operation label to embed in a domain error.
    #[inline]
    pub fn new(op: impl Into<Cow<'static, str>>) -> Self {
        Self { op: op.into() }
    }
}

impl HasOperation for EmbedOp {
    #[inline]
    fn operation(&self) -> &str {
        &self.op
    }
}

/// An [`ErrorCode`] with an operation attached.
///
/// The message is prefixed with the operation; the code and client data are those of the
/// wrapped error.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpErrCode<E> {
    operation: Cow<'static, str>,
    inner: E,
}

impl<E> OpErrCode<E> {
    /// Attaches `operation` to `inner`; [`op`] is the usual entry point.
    #[inline]
    pub fn new(operation: impl Into<Cow<'static, str>>, inner: E) -> Self {
        Self { operation: operation.into(), inner }
    }

    /// The wrapped error.
    #[inline]
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwraps the error, dropping the operation.
    #[inline]
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Display> Display for OpErrCode<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.inner)
    }
}

impl<E: ErrorCode> ErrorCode for OpErrCode<E> {
    #[inline]
    fn code(&self) -> Code {
        self.inner.code()
    }

    #[inline]
    fn as_has_client_data(&self) -> Option<&dyn HasClientData> {
        Some(self)
    }
}

impl<E: ErrorCode> HasClientData for OpErrCode<E> {
    fn client_data(&self) -> &dyn ClientData {
        client_data(&self.inner)
    }
}

impl<E: ErrorCode> ClientData for OpErrCode<E> {
    fn to_json(&self) -> Value {
        client_data(&self.inner).to_json()
    }

    #[inline]
    fn as_has_operation(&self) -> Option<&dyn HasOperation> {
        Some(self)
    }
}

impl<E> HasOperation for OpErrCode<E> {
    #[inline]
    fn operation(&self) -> &str {
        &self.operation
    }
}

impl<E> core::error::Error for OpErrCode<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl<E> From<OpErrCode<E>> for Source
where
    E: ErrorCode + Send + Sync + 'static,
{
    fn from(err: OpErrCode<E>) -> Self {
        Source::coded(err)
    }
}

/// A reusable operation label, created by [`op`].
///
/// Build it once at the start of a logical action and decorate every error site with
/// [`add_to`](AddOp::add_to).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddOp {
    operation: Cow<'static, str>,
}

impl AddOp {
    /// Attaches this operation to `err`.
    #[inline]
    pub fn add_to<E: ErrorCode>(&self, err: E) -> OpErrCode<E> {
        OpErrCode { operation: self.operation.clone(), inner: err }
    }

    /// The operation label.
    #[inline]
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

/// Starts decorating errors with `operation`.
///
/// ```
/// # use error_code_rail::{op, invalid_input, OpErrCode, InvalidInputErr};
/// fn move_x(start: u64, end: u64, obstacle: u64) -> Result<(), OpErrCode<InvalidInputErr>> {
///     let op = op("path.move.x");
///     if start < obstacle && obstacle < end {
///         return Err(op.add_to(invalid_input("path blocked")));
///     }
///     Ok(())
/// }
/// # assert!(move_x(1, 9, 4).is_err());
/// ```
#[inline]
pub fn op(operation: impl Into<Cow<'static, str>>) -> AddOp {
    AddOp { operation: operation.into() }
}
