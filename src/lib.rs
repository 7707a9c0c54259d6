//! Statelink - checksummed text framing for device/host serial links
//!
//! Messages are single lines of comma-delimited tokens. The application
//! state record travels as nine tokens: eight field values followed by an
//! additive checksum. Other messages carry a one-character type tag in front
//! of their content.
//!
//! # Quick Start
//!
//! ```rust
//! use statelink::{AppState, Message, MessageType};
//!
//! // Encode the state record
//! let line = AppState::REFERENCE.encode();
//! assert_eq!(line, "1000,0.33519,0.21948,2,2,1,1,1,37357");
//!
//! // Decode and validate it
//! let state = AppState::decode(&line)?;
//! assert_eq!(state, AppState::REFERENCE);
//!
//! // Tag other messages
//! let button = Message::new(MessageType::Button, "1,0");
//! assert_eq!(button.encode(), "b,1,0");
//! # Ok::<(), statelink::Error>(())
//! ```
//!
//! # Features
//!
//! - **Positional framing** - no field names on the wire, no escaping
//! - **Additive checksum** - wrapping `u32` sum over every field
//! - **In-place decoding** - [`decode_state_into`] fills a caller-owned record
//!
//! Transport (opening the port, line terminators) is left to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;
mod self_test;

pub use protocol::{
    AppId, AppState, DELIMITER, Error, ExplMode, FLOAT_CHECKSUM_SCALING, Message, MessageType,
    NnMode, Result, STATE_TOKEN_COUNT, decode_state, decode_state_into, encode_state,
};
pub use self_test::self_test;

/// Statelink wire format version
pub const VERSION: &str = "1.0.0";
