//! Value types: codes, registries, error wrappers and the JSON envelope.
//!
//! # Examples
//!
//! ```
//! use error_code_rail::{internal, json_format, Code, ErrorCode, HttpStatusRegistry, INTERNAL_CODE};
//!
//! static STORAGE: Code = INTERNAL_CODE.child("internal.storage");
//!
//! let statuses = HttpStatusRegistry::standard();
//! let err = internal("disk full");
//!
//! assert_eq!(err.code(), INTERNAL_CODE);
//! assert_eq!(statuses.status_for(&err), 500);
//! assert_eq!(STORAGE.http_status(&statuses), 500);
//! assert_eq!(json_format(&err).msg, "disk full");
//! ```

pub mod alloc_type;
pub mod code;
pub mod coded_error;
pub mod http_status;
pub mod json_format;
pub mod kinds;
pub mod meta_data;
pub mod operation;

pub use code::*;
pub use coded_error::*;
pub use http_status::{status, HttpStatusBuilder, HttpStatusRegistry, DEFAULT_HTTP_STATUS};
pub use json_format::*;
pub use kinds::*;
pub use meta_data::*;
pub use operation::*;
