//! Standardized, hierarchical error codes for service APIs.
//!
//! Every error that reaches a client carries a [`Code`]: an immutable, dot-separated identifier
//! such as `state.blocked` that clients can switch on reliably, independent of the message.
//! A code should never change once released; create a new one instead.
//!
//! The crate has few opinions. The one requirement is the [`ErrorCode`] trait, which ties an
//! error to a code. On top of that:
//!
//! - codes form a hierarchy, and meta data such as an HTTP status is inherited from the nearest
//!   ancestor that has it ([`MetaData`], [`HttpStatusRegistry`])
//! - [`CodedError`] and the [`invalid_input`], [`internal`] and [`not_found`] kinds attach a code
//!   to errors that have none
//! - [`op`] and [`EmbedOp`] record the operation that failed
//! - [`JsonFormat`] is the envelope sent to clients
//!
//! # Examples
//!
//! ## Classifying and reporting
//!
//! ```
//! use error_code_rail::{json_format, not_found, op, HttpStatusRegistry};
//!
//! let statuses = HttpStatusRegistry::standard();
//!
//! let err = op("user.create").add_to(not_found("no such team"));
//! let report = json_format(&err);
//!
//! assert_eq!(statuses.status_for(&err), 404);
//! assert_eq!(report.msg, "user.create: no such team");
//! assert_eq!(report.code, "missing");
//! assert_eq!(report.operation, "user.create");
//! ```
//!
//! ## Application codes
//!
//! ```
//! use error_code_rail::{Code, HttpStatusRegistry, STATE_CODE};
//!
//! static ACCOUNT: Code = STATE_CODE.child("state.account");
//! static ACCOUNT_LOCKED: Code = ACCOUNT.child("account.locked");
//!
//! let statuses = HttpStatusRegistry::standard_builder().with(&ACCOUNT, 409).build();
//!
//! assert_eq!(ACCOUNT_LOCKED.code_str(), "state.account.locked");
//! assert_eq!(ACCOUNT_LOCKED.http_status(&statuses), 409);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Generic top-level codes
pub mod codes;
/// Macros for implementing the capability traits
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits and the reporting helpers built on them
pub mod traits;
/// Codes, registries, error wrappers and the JSON envelope
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use codes::*;
pub use traits::*;
pub use types::{
    internal, invalid_input, json_format, not_found, op, AddOp, Ancestors, Code, CodePathError,
    CodeStr, CodedError, DuplicateMetaData, EmbedOp, HttpStatusBuilder, HttpStatusRegistry,
    InternalErr, InvalidInputErr, JsonFormat, MetaData, MetaDataBuilder, NotFoundErr, OpErrCode,
    PlainError, Source, DEFAULT_HTTP_STATUS,
};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::Value;
}
