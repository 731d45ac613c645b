//! The [`ErrorCode`] contract that ties an error to a [`Code`].
//!
//! Any type can take part by implementing `Display`, [`ClientData`] and [`ErrorCode`]; it does
//! not have to go through [`CodedError`](crate::CodedError). For an application error with a
//! one-to-one mapping to a code, implementing the trait directly is usually the better fit:
//!
//! ```
//! use error_code_rail::{impl_client_data, json_format, Code, ErrorCode, STATE_CODE};
//! use serde::Serialize;
//! use std::fmt;
//!
//! static PATH_BLOCKED: Code = STATE_CODE.child("state.blocked");
//!
//! #[derive(Debug, Serialize)]
//! struct PathBlocked {
//!     start: u64,
//!     end: u64,
//!     obstacle: u64,
//! }
//!
//! impl fmt::Display for PathBlocked {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "The path {} -> {} has obstacle {}", self.start, self.end, self.obstacle)
//!     }
//! }
//!
//! impl_client_data!(PathBlocked);
//!
//! impl ErrorCode for PathBlocked {
//!     fn code(&self) -> Code {
//!         PATH_BLOCKED
//!     }
//! }
//!
//! let report = json_format(&PathBlocked { start: 1, end: 9, obstacle: 4 });
//! assert_eq!(report.code, "state.blocked");
//! assert_eq!(report.data["obstacle"], 4);
//! ```

use crate::traits::client_data::{ClientData, HasOperation};
use crate::types::alloc_type::Box;
use crate::types::code::Code;
use core::fmt::{Debug, Display};

/// An error with a message and a [`Code`].
///
/// The message comes from `Display`. Every `ErrorCode` is also [`ClientData`]: unless
/// [`as_has_client_data`](ErrorCode::as_has_client_data) says otherwise, the error itself is the
/// payload sent to clients.
pub trait ErrorCode: Display + Debug + AsClientData {
    fn code(&self) -> Code;

    /// The [`HasClientData`] capability, if this error provides a payload other than itself.
    #[inline]
    fn as_has_client_data(&self) -> Option<&dyn HasClientData> {
        None
    }
}

/// Provides the payload of an [`ErrorCode`] when it is not the error itself.
///
/// Prefer [`client_data`] over calling this directly.
pub trait HasClientData {
    fn client_data(&self) -> &dyn ClientData;
}

/// Views a value as `&dyn ClientData`. Implemented for every [`ClientData`] type.
pub trait AsClientData {
    fn as_client_data(&self) -> &dyn ClientData;
}

impl<T: ClientData> AsClientData for T {
    #[inline]
    fn as_client_data(&self) -> &dyn ClientData {
        self
    }
}

/// The payload of `err`: its [`HasClientData`] payload if it has one, otherwise `err` itself.
pub fn client_data<E: ErrorCode + ?Sized>(err: &E) -> &dyn ClientData {
    match err.as_has_client_data() {
        Some(has_data) => has_data.client_data(),
        None => err.as_client_data(),
    }
}

impl ErrorCode for Box<dyn ErrorCode + Send + Sync> {
    #[inline]
    fn code(&self) -> Code {
        (**self).code()
    }

    #[inline]
    fn as_has_client_data(&self) -> Option<&dyn HasClientData> {
        (**self).as_has_client_data()
    }
}

impl ClientData for Box<dyn ErrorCode + Send + Sync> {
    fn to_json(&self) -> serde_json::Value {
        (**self).as_client_data().to_json()
    }

    fn as_has_operation(&self) -> Option<&dyn HasOperation> {
        (**self).as_client_data().as_has_operation()
    }
}
