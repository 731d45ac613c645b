//! Broad error kinds with a default code.
//!
//! Use these to promote an error that has no code (or whose code does not fit) before it
//! crosses the API boundary.

use crate::codes::{INTERNAL_CODE, INVALID_INPUT_CODE, NOT_FOUND_CODE};
use crate::traits::{ClientData, ErrorCode, HasClientData};
use crate::types::code::Code;
use crate::types::coded_error::{CodedError, Source};
use core::fmt::{self, Display};
use serde_json::Value;

macro_rules! coded_kind {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(CodedError);

        impl $name {
            /// The underlying [`CodedError`].
            #[inline]
            pub fn coded_error(&self) -> &CodedError {
                &self.0
            }

            /// Unwraps the underlying [`CodedError`].
            #[inline]
            pub fn into_coded_error(self) -> CodedError {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl ErrorCode for $name {
            #[inline]
            fn code(&self) -> Code {
                self.0.code()
            }

            #[inline]
            fn as_has_client_data(&self) -> Option<&dyn HasClientData> {
                Some(self)
            }
        }

        impl HasClientData for $name {
            #[inline]
            fn client_data(&self) -> &dyn ClientData {
                HasClientData::client_data(&self.0)
            }
        }

        impl ClientData for $name {
            fn to_json(&self) -> Value {
                self.0.to_json()
            }
        }

        impl core::error::Error for $name {
            fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
                core::error::Error::source(&self.0)
            }
        }

        impl From<$name> for CodedError {
            fn from(err: $name) -> Self {
                err.0
            }
        }

        impl From<$name> for Source {
            fn from(err: $name) -> Self {
                Source::coded(err)
            }
        }
    };
}

coded_kind! {
    /// Invalid input, `input` (HTTP 400) unless the wrapped error has its own code.
    InvalidInputErr
}

coded_kind! {
    /// A server-side failure, always reported under `internal` (HTTP 500).
    InternalErr
}

coded_kind! {
    /// A missing resource, `missing` (HTTP 404) unless the wrapped error has its own code.
    NotFoundErr
}

impl InvalidInputErr {
    /// Uses the wrapped error's code if it has one, otherwise [`INVALID_INPUT_CODE`].
    pub fn new(source: impl Into<Source>) -> Self {
        Self(CodedError::new(source, INVALID_INPUT_CODE))
    }
}

impl InternalErr {
    /// Keeps the wrapped error's code only if it is [`INTERNAL_CODE`] or one of its descendants.
    ///
    /// Any other code is replaced with [`INTERNAL_CODE`], so an internal failure is never
    /// reported with a client-error status, and unrelated codes do not leak through it.
    pub fn new(source: impl Into<Source>) -> Self {
        let source = source.into();
        let code = source
            .code()
            .filter(|code| code.is_descendant_of(&INTERNAL_CODE))
            .unwrap_or(INTERNAL_CODE);
        Self(CodedError::with_code(source, code))
    }
}

impl NotFoundErr {
    /// Uses the wrapped error's code if it has one, otherwise [`NOT_FOUND_CODE`].
    pub fn new(source: impl Into<Source>) -> Self {
        Self(CodedError::new(source, NOT_FOUND_CODE))
    }
}

/// Shorthand for [`InvalidInputErr::new`].
#[inline]
pub fn invalid_input(source: impl Into<Source>) -> InvalidInputErr {
    InvalidInputErr::new(source)
}

/// Shorthand for [`InternalErr::new`].
#[inline]
pub fn internal(source: impl Into<Source>) -> InternalErr {
    InternalErr::new(source)
}

/// Shorthand for [`NotFoundErr::new`].
#[inline]
pub fn not_found(source: impl Into<Source>) -> NotFoundErr {
    NotFoundErr::new(source)
}
