//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_code_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`impl_client_data!`], [`impl_error_code!`]
//! - **Types**: [`Code`], [`CodedError`], [`Source`], [`OpErrCode`], [`JsonFormat`],
//!   [`HttpStatusRegistry`], the error kinds and the standard codes
//! - **Traits**: [`ErrorCode`], [`ClientData`], [`HasClientData`], [`HasOperation`],
//!   [`ResultExt`], [`OpResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_code_rail::prelude::*;
//!
//! fn read_settings(path: &str) -> Result<String, OpErrCode<NotFoundErr>> {
//!     std::fs::read_to_string(path).map_err(Source::plain).not_found().op("settings.load")
//! }
//!
//! let err = read_settings("/nope/settings.toml").unwrap_err();
//! assert_eq!(err.code(), NOT_FOUND_CODE);
//! assert_eq!(json_format(&err).operation, "settings.load");
//! ```

// Macros
pub use crate::{impl_client_data, impl_error_code};

// Codes and registries
pub use crate::codes::{INTERNAL_CODE, INVALID_INPUT_CODE, NOT_FOUND_CODE, STATE_CODE};
pub use crate::types::{Code, CodeStr, HttpStatusRegistry, MetaData, MetaDataBuilder};

// Errors
pub use crate::types::{
    internal, invalid_input, json_format, not_found, op, CodedError, EmbedOp, InternalErr,
    InvalidInputErr, JsonFormat, NotFoundErr, OpErrCode, Source,
};

// Traits
pub use crate::traits::{
    ClientData, ErrorCode, HasClientData, HasOperation, OpResultExt, ResultExt,
};
