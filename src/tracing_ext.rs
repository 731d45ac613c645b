//! Tracing integration.
//!
//! Emits one structured event per reported error, carrying the code, the resolved HTTP status
//! and the operation as fields so that logs can be filtered on the same code clients see.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-code-rail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::traits::{operation_client_data, ErrorCode};
use crate::types::http_status::HttpStatusRegistry;

/// Records `err` as a tracing event.
///
/// Server errors (5xx) are logged at `ERROR`, everything else at `WARN`.
pub fn record_error<E: ErrorCode + ?Sized>(err: &E, statuses: &HttpStatusRegistry) {
    let code = err.code();
    let status = statuses.status_of(&code);
    let (operation, _) = operation_client_data(err);
    let operation = operation.unwrap_or_default();

    if status >= 500 {
        tracing::error!(code = %code, status, operation, error = %err, "request failed");
    } else {
        tracing::warn!(code = %code, status, operation, error = %err, "request rejected");
    }
}

/// Method form of [`record_error`] for any [`ErrorCode`].
pub trait ErrorCodeTraceExt: ErrorCode {
    fn trace_with(&self, statuses: &HttpStatusRegistry) -> &Self {
        record_error(self, statuses);
        self
    }
}

impl<E: ErrorCode + ?Sized> ErrorCodeTraceExt for E {}

/// Records the error of a `Result` as it passes by.
///
/// # Example
///
/// ```
/// use error_code_rail::tracing_ext::ResultTraceExt;
/// use error_code_rail::{not_found, HttpStatusRegistry, NotFoundErr};
///
/// fn find_user(id: u64) -> Result<String, NotFoundErr> {
///     Err(not_found(format!("no user {id}")))
/// }
///
/// fn handle(statuses: &HttpStatusRegistry, id: u64) -> Result<String, NotFoundErr> {
///     find_user(id).trace_err(statuses)
/// }
///
/// let statuses = HttpStatusRegistry::standard();
/// assert_eq!(handle(&statuses, 7).unwrap_err().to_string(), "no user 7");
/// ```
pub trait ResultTraceExt<T, E> {
    fn trace_err(self, statuses: &HttpStatusRegistry) -> Result<T, E>;
}

impl<T, E: ErrorCode> ResultTraceExt<T, E> for Result<T, E> {
    fn trace_err(self, statuses: &HttpStatusRegistry) -> Result<T, E> {
        if let Err(err) = &self {
            record_error(err, statuses);
        }
        self
    }
}
