//! Capabilities an error can have.
//!
//! - [`ErrorCode`]: a message plus a [`Code`](crate::Code); the only required capability
//! - [`ClientData`]: a value that can be sent to clients as the `data` of a report
//! - [`HasClientData`]: an error whose client data is something other than itself
//! - [`HasOperation`]: a value that records the operation in progress
//! - [`ResultExt`] / [`OpResultExt`]: classification and operation helpers on `Result`
//!
//! Optional capabilities are checked through `as_has_*` hooks that return `None` unless a type
//! opts in, and the free functions [`client_data`], [`operation`] and
//! [`operation_client_data`] apply the fallbacks.
//!
//! # Examples
//!
//! ```
//! use error_code_rail::traits::{client_data, operation_client_data};
//! use error_code_rail::{not_found, op};
//!
//! let err = op("team.load").add_to(not_found("no such team"));
//! let (operation, data) = operation_client_data(&err);
//!
//! assert_eq!(operation, Some("team.load"));
//! assert_eq!(data.to_json(), "no such team");
//! assert_eq!(client_data(&err).to_json(), "no such team");
//! ```

pub mod client_data;
pub mod error_code;
pub mod result_ext;

pub use client_data::{operation, operation_client_data, to_json_value, ClientData, HasOperation};
pub use error_code::{client_data, AsClientData, ErrorCode, HasClientData};
pub use result_ext::{OpResultExt, ResultExt};
