//! The JSON error envelope sent to clients.

use crate::traits::{operation_client_data, ErrorCode};
use crate::types::alloc_type::{String, ToString};
use crate::types::code::CodeStr;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opinion on how to serialize an [`ErrorCode`] for clients.
///
/// `msg` is the error's message, `code` its full code path, and `data` the client data (the
/// error itself unless it provides [`HasClientData`](crate::HasClientData)). `operation` is left
/// out of the serialized form when empty.
///
/// # Examples
///
/// ```
/// use error_code_rail::{invalid_input, json_format};
///
/// let report = json_format(&invalid_input("page size must be positive"));
/// let body = serde_json::to_string(&report).unwrap();
///
/// assert_eq!(
///     body,
///     r#"{"data":"page size must be positive","msg":"page size must be positive","code":"input"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonFormat {
    pub data: Value,
    pub msg: String,
    pub code: CodeStr,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operation: String,
}

impl JsonFormat {
    pub fn new<E: ErrorCode + ?Sized>(err: &E) -> Self {
        let (operation, data) = operation_client_data(err);
        Self {
            data: data.to_json(),
            msg: err.to_string(),
            code: err.code().code_str(),
            operation: operation.map(ToString::to_string).unwrap_or_default(),
        }
    }
}

impl<E: ErrorCode + ?Sized> From<&E> for JsonFormat {
    fn from(err: &E) -> Self {
        Self::new(err)
    }
}

/// Shorthand for [`JsonFormat::new`].
#[inline]
pub fn json_format<E: ErrorCode + ?Sized>(err: &E) -> JsonFormat {
    JsonFormat::new(err)
}
