//! Client-facing payloads and the optional operation capability.

use crate::traits::error_code::{client_data, ErrorCode};
use crate::types::alloc_type::{String, ToString};
use core::fmt::Debug;
use serde::Serialize;
use serde_json::Value;

/// A value that can be sent to an API client as the `data` of an error report.
///
/// Serializable domain types usually get this through [`impl_client_data!`](crate::impl_client_data).
pub trait ClientData: Debug {
    fn to_json(&self) -> Value;

    /// The [`HasOperation`] capability, if this value records an operation.
    #[inline]
    fn as_has_operation(&self) -> Option<&dyn HasOperation> {
        None
    }
}

/// Records the operation that was being performed when an error occurred.
///
/// Operations and codes are independent: one code can come out of many operations and one
/// operation can fail with many codes. Rather than implementing this by hand, wrap the error
/// with [`op`](crate::op) or embed an [`EmbedOp`](crate::EmbedOp).
pub trait HasOperation {
    fn operation(&self) -> &str;
}

/// Serializes `value` for a report. Values that fail to serialize become `null`.
pub fn to_json_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// The operation recorded on `value`, if it has the [`HasOperation`] capability and the
/// operation is not empty.
pub fn operation<C: ClientData + ?Sized>(value: &C) -> Option<&str> {
    value.as_has_operation().map(|has_op| has_op.operation()).filter(|op| !op.is_empty())
}

/// The operation and payload of `err`.
///
/// The operation is looked up on the error first; if it has none, the payload is checked, which
/// covers an [`EmbedOp`](crate::EmbedOp) inside a domain struct that is handed out as data.
pub fn operation_client_data<E: ErrorCode + ?Sized>(err: &E) -> (Option<&str>, &dyn ClientData) {
    let data = client_data(err);
    let op = operation(err.as_client_data()).or_else(|| operation(data));
    (op, data)
}

impl ClientData for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }
}

impl ClientData for str {
    fn to_json(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ClientData for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}
