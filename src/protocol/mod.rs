//! Statelink protocol core implementation
//!
//! This module provides the comma-delimited framing, message tags, and the
//! checksummed state codec.

mod codec;
mod error;
pub mod framing;
mod message;
mod state;
mod types;

pub use codec::{checksum, decode_state, decode_state_into, decode_tokens_into, encode_state};
pub use error::{Error, Result};
pub use framing::{join, split, tag_message, untag_message};
pub use message::Message;
pub use state::AppState;
pub use types::{AppId, ExplMode, MessageType, NnMode};

/// Token delimiter
pub const DELIMITER: char = ',';

/// Number of value fields in a state record
pub const STATE_FIELD_COUNT: usize = 8;

/// Tokens in a state line (fields + checksum)
pub const STATE_TOKEN_COUNT: usize = STATE_FIELD_COUNT + 1;

/// Scale applied to float fields before they enter the checksum
pub const FLOAT_CHECKSUM_SCALING: f32 = 65536.0;
