//! Statelink error types

use thiserror::Error;

/// Statelink protocol errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Line did not split into the expected number of tokens
    #[error("wrong field count: expected {expected} tokens, got {found}")]
    FieldCount {
        /// Required token count
        expected: usize,
        /// Token count found on the line
        found: usize,
    },

    /// A token did not parse as its field's numeric kind
    #[error("invalid value {token:?} for field `{field}`: {reason}")]
    InvalidField {
        /// Name of the field being parsed
        field: &'static str,
        /// Offending token, after whitespace trimming
        token: String,
        /// Message from the underlying number parser
        reason: String,
    },

    /// All fields parsed but the transmitted checksum disagrees
    #[error("checksum mismatch: computed {expected}, transmitted {found}")]
    ChecksumMismatch {
        /// Checksum recomputed from the decoded fields
        expected: u32,
        /// Checksum carried in the last token
        found: u32,
    },

    /// Tagged line does not start with `<tag>,`
    #[error("missing message tag in {line:?}")]
    MissingTag {
        /// Line that failed to parse
        line: String,
    },

    /// Tag character is not a known message type
    #[error("unknown message type tag {tag:?}")]
    UnknownMessageType {
        /// Unrecognized tag character
        tag: char,
    },

    /// Self-test round trip produced a different record
    #[error("self-test failed: decoded state differs from reference")]
    SelfTestMismatch,
}

impl Error {
    /// True when the line was well formed but failed integrity validation
    ///
    /// Callers typically respond to this by requesting a retransmission.
    #[must_use]
    pub const fn is_checksum_mismatch(&self) -> bool {
        matches!(self, Self::ChecksumMismatch { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
