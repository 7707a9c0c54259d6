//! Built-in regression check for the state codec

use tracing::info;

use crate::protocol::{AppState, Error, Result, decode_state_into, encode_state};

/// Encode the reference record, decode it back, and compare
///
/// Returns the decoded record on success. A checksum failure is returned as
/// the decode error; a record that decodes but differs is reported as
/// [`Error::SelfTestMismatch`].
pub fn self_test() -> Result<AppState> {
    let reference = AppState::REFERENCE;

    let serialised = encode_state(&reference);
    info!(line = %serialised, "self-test: state serialised");

    let mut decoded = AppState::default();
    if let Err(err) = decode_state_into(&serialised, &mut decoded) {
        info!(error = %err, "self-test: checksum FAILED");
        return Err(err);
    }
    info!("self-test: checksum passed");

    if !decoded.bit_eq(&reference) {
        info!(?decoded, "self-test: FAILED");
        return Err(Error::SelfTestMismatch);
    }
    info!("self-test: passed");

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_passes() {
        let decoded = self_test().unwrap();
        assert!(decoded.bit_eq(&AppState::REFERENCE));
    }
}
