//! Generic top-level codes.
//!
//! These cover the broad categories every service needs. Applications should hang their own,
//! more specific codes below them with [`Code::child`] rather than using them directly.

use crate::types::code::Code;

/// Something went wrong on the server side. Maps to HTTP 500 in
/// [`HttpStatusRegistry::standard`](crate::HttpStatusRegistry::standard).
pub static INTERNAL_CODE: Code = Code::new("internal");

/// The request was malformed or failed validation. Maps to HTTP 400.
pub static INVALID_INPUT_CODE: Code = Code::new("input");

/// The requested resource does not exist. Maps to HTTP 404.
pub static NOT_FOUND_CODE: Code = Code::new("missing");

/// The request is invalid for the current state of the object. Maps to HTTP 400.
pub static STATE_CODE: Code = Code::new("state");
