//! Macros that remove the boilerplate of making a domain error reportable.
//!
//! - [`macro@crate::impl_client_data`] - Implements [`ClientData`](crate::ClientData) for a
//!   `Serialize` type, optionally exposing an embedded [`EmbedOp`](crate::EmbedOp).
//! - [`macro@crate::impl_error_code`] - Implements [`ErrorCode`](crate::ErrorCode) and
//!   `ClientData` for a type with a single fixed code.
//!
//! # Examples
//!
//! ```
//! use error_code_rail::{impl_error_code, json_format, Code, EmbedOp, INVALID_INPUT_CODE};
//! use serde::Serialize;
//! use std::fmt;
//!
//! static NAME_TOO_LONG: Code = INVALID_INPUT_CODE.child("input.name_too_long");
//!
//! #[derive(Debug, Serialize)]
//! struct NameTooLong {
//!     max: usize,
//!     #[serde(skip)]
//!     op: EmbedOp,
//! }
//!
//! impl fmt::Display for NameTooLong {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "name is longer than {} characters", self.max)
//!     }
//! }
//!
//! impl_error_code!(NameTooLong, NAME_TOO_LONG, op = op);
//!
//! let report = json_format(&NameTooLong { max: 32, op: EmbedOp::new("user.rename") });
//! assert_eq!(report.code, "input.name_too_long");
//! assert_eq!(report.operation, "user.rename");
//! assert_eq!(report.data["max"], 32);
//! ```

/// Implements [`ClientData`](crate::ClientData) for a type that implements `serde::Serialize`.
///
/// The value is serialized as-is. With `op = field`, the named field (an
/// [`EmbedOp`](crate::EmbedOp) or any other [`HasOperation`](crate::HasOperation)) is exposed as
/// the value's operation.
///
/// # Examples
///
/// ```
/// use error_code_rail::{impl_client_data, ClientData};
/// use serde::Serialize;
///
/// #[derive(Debug, Serialize)]
/// struct Quota {
///     limit: u32,
/// }
///
/// impl_client_data!(Quota);
///
/// assert_eq!(Quota { limit: 3 }.to_json()["limit"], 3);
/// ```
#[macro_export]
macro_rules! impl_client_data {
    ($type:ty) => {
        impl $crate::ClientData for $type {
            fn to_json(&self) -> $crate::__private::Value {
                $crate::to_json_value(self)
            }
        }
    };
    ($type:ty, op = $field:ident) => {
        impl $crate::ClientData for $type {
            fn to_json(&self) -> $crate::__private::Value {
                $crate::to_json_value(self)
            }

            fn as_has_operation(&self) -> ::core::option::Option<&dyn $crate::HasOperation> {
                ::core::option::Option::Some(&self.$field)
            }
        }
    };
}

/// Implements [`ErrorCode`](crate::ErrorCode) with a fixed code, plus
/// [`ClientData`](crate::ClientData) through [`impl_client_data!`](crate::impl_client_data).
///
/// The type must implement `Debug`, `Display` and `serde::Serialize`, and be
/// `Send + Sync + 'static`: it also converts into a coded [`Source`](crate::Source), so the
/// [`ResultExt`](crate::ResultExt) classifiers keep its code.
#[macro_export]
macro_rules! impl_error_code {
    ($type:ty, $code:expr $(, op = $field:ident)? $(,)?) => {
        $crate::impl_client_data!($type $(, op = $field)?);

        impl $crate::ErrorCode for $type {
            fn code(&self) -> $crate::Code {
                $code
            }
        }

        impl ::core::convert::From<$type> for $crate::Source {
            fn from(err: $type) -> Self {
                $crate::Source::coded(err)
            }
        }
    };
}
