//! Tagged message implementation

use super::framing::{tag_message, untag_message};
use super::{AppState, MessageType, Result};

/// Tagged message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message type
    msg_type: MessageType,
    /// Content after the tag, usually comma-delimited
    content: String,
}

impl Message {
    /// Create a new message
    pub fn new(msg_type: MessageType, content: impl Into<String>) -> Self {
        Self {
            msg_type,
            content: content.into(),
        }
    }

    /// Create a state request with no content
    #[must_use]
    pub fn state_request() -> Self {
        Self::new(MessageType::StateRequest, String::new())
    }

    /// Create a state dump carrying the encoded record
    #[must_use]
    pub fn state_dump(state: &AppState) -> Self {
        Self::new(MessageType::StateDump, state.encode())
    }

    /// Get message type
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        self.msg_type
    }

    /// Get content
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Decode the content as a state record
    ///
    /// The tag is not checked; any content holding a valid state line decodes.
    pub fn state(&self) -> Result<AppState> {
        AppState::decode(&self.content)
    }

    /// Encode message to a tagged line
    #[must_use]
    pub fn encode(&self) -> String {
        tag_message(self.msg_type, &self.content)
    }

    /// Decode message from a tagged line
    pub fn decode(line: &str) -> Result<Self> {
        let (msg_type, content) = untag_message(line)?;
        Ok(Self::new(msg_type, content))
    }
}
