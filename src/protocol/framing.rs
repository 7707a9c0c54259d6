//! Comma-delimited token framing
//!
//! Tokens are joined with a single [`DELIMITER`] and split back positionally.
//! There is no escaping: a token that itself contains a comma will not
//! survive the round trip.

use super::{DELIMITER, Error, MessageType, Result};

/// Join tokens into one delimited line
///
/// An empty sequence produces an empty string.
pub fn join<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(token.as_ref());
    }
    line
}

/// Split a delimited line into tokens
///
/// Always yields at least one token, and `n` delimiters yield `n + 1`
/// tokens. Adjacent delimiters produce empty tokens.
#[must_use]
pub fn split(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

/// Prefix content with the message type's tag character
#[must_use]
pub fn tag_message(msg_type: MessageType, content: &str) -> String {
    let mut line = String::with_capacity(content.len() + 2);
    line.push(msg_type.as_char());
    line.push(DELIMITER);
    line.push_str(content);
    line
}

/// Strip the tag from a tagged line
///
/// Returns the message type and the untouched content after the first
/// delimiter.
pub fn untag_message(line: &str) -> Result<(MessageType, &str)> {
    let mut chars = line.chars();
    let (Some(tag), Some(DELIMITER)) = (chars.next(), chars.next()) else {
        return Err(Error::MissingTag {
            line: line.to_owned(),
        });
    };
    let msg_type = MessageType::from_char(tag).ok_or(Error::UnknownMessageType { tag })?;
    Ok((msg_type, chars.as_str()))
}
