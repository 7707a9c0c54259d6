//! State line codec (encode/decode)
//!
//! # Format
//!
//! ```text
//! n_iterations,last_error,exploration_range,app_id,dataset,model,nn_mode,expl_mode,checksum
//! ```
//!
//! The checksum is a wrapping `u32` sum of every field. Float fields enter
//! the sum scaled by [`FLOAT_CHECKSUM_SCALING`] and truncated.

use std::str::FromStr;

use tracing::{debug, trace};

use super::framing::{join, split};
use super::{AppState, Error, FLOAT_CHECKSUM_SCALING, Result, STATE_TOKEN_COUNT};

/// Compute the additive checksum of a state record
#[must_use]
pub fn checksum(state: &AppState) -> u32 {
    state
        .n_iterations
        .wrapping_add(scaled(state.last_error))
        .wrapping_add(scaled(state.exploration_range))
        .wrapping_add(state.app_id.checksum_term())
        .wrapping_add(u32::from(state.current_dataset))
        .wrapping_add(u32::from(state.current_model))
        .wrapping_add(state.current_nn_mode.checksum_term())
        .wrapping_add(state.current_expl_mode.checksum_term())
}

// Truncates toward zero; negative and NaN saturate to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(value: f32) -> u32 {
    (value * FLOAT_CHECKSUM_SCALING) as u32
}

/// Encode a state record to a checksummed line
///
/// Floats use the shortest text that parses back to the same bits, so
/// decoding reproduces the record exactly.
#[must_use]
pub fn encode_state(state: &AppState) -> String {
    let checksum = checksum(state);
    let line = join([
        state.n_iterations.to_string(),
        state.last_error.to_string(),
        state.exploration_range.to_string(),
        state.app_id.to_string(),
        state.current_dataset.to_string(),
        state.current_model.to_string(),
        state.current_nn_mode.to_string(),
        state.current_expl_mode.to_string(),
        checksum.to_string(),
    ]);
    trace!(checksum, line = %line, "encoded state");
    line
}

/// Decode a checksummed line into a fresh record
///
/// Unlike [`decode_state_into`], nothing is observable on failure.
pub fn decode_state(line: &str) -> Result<AppState> {
    let mut state = AppState::default();
    decode_state_into(line, &mut state)?;
    Ok(state)
}

/// Decode a checksummed line into a caller-owned record
///
/// See [`decode_tokens_into`] for what `state` holds after a failure.
pub fn decode_state_into(line: &str, state: &mut AppState) -> Result<()> {
    decode_tokens_into(&split(line), state)
}

/// Decode pre-split tokens into a caller-owned record
///
/// Fields are written as they are parsed. On [`Error::FieldCount`] the
/// record is untouched. On [`Error::InvalidField`] the fields before the bad
/// token are already written. On [`Error::ChecksumMismatch`] every field is
/// written.
pub fn decode_tokens_into<S: AsRef<str>>(tokens: &[S], state: &mut AppState) -> Result<()> {
    if tokens.len() != STATE_TOKEN_COUNT {
        debug!(
            found = tokens.len(),
            expected = STATE_TOKEN_COUNT,
            "rejecting state line with wrong field count"
        );
        return Err(Error::FieldCount {
            expected: STATE_TOKEN_COUNT,
            found: tokens.len(),
        });
    }

    state.n_iterations = parse_field("n_iterations", tokens[0].as_ref())?;
    state.last_error = parse_field("last_error", tokens[1].as_ref())?;
    state.exploration_range = parse_field("exploration_range", tokens[2].as_ref())?;
    state.app_id = parse_field::<i32>("app_id", tokens[3].as_ref())?.into();
    state.current_dataset = parse_field("current_dataset", tokens[4].as_ref())?;
    state.current_model = parse_field("current_model", tokens[5].as_ref())?;
    state.current_nn_mode = parse_field::<i32>("current_nn_mode", tokens[6].as_ref())?.into();
    state.current_expl_mode =
        parse_field::<i32>("current_expl_mode", tokens[7].as_ref())?.into();

    let expected = checksum(state);
    let found: u32 = parse_field("checksum", tokens[8].as_ref())?;

    if expected != found {
        debug!(expected, found, "state checksum mismatch");
        return Err(Error::ChecksumMismatch { expected, found });
    }

    trace!(checksum = found, "decoded state");
    Ok(())
}

fn parse_field<T>(field: &'static str, token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let token = token.trim_ascii();
    token.parse().map_err(|err: T::Err| {
        debug!(field, token, error = %err, "unparsable state field");
        Error::InvalidField {
            field,
            token: token.to_owned(),
            reason: err.to_string(),
        }
    })
}
