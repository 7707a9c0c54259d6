//! Application state record exchanged with the device

use super::{AppId, ExplMode, NnMode, Result};

/// Application state record
///
/// Field order is the wire order. The record carries no field names on the
/// wire, so both ends must agree on this exact layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppState {
    /// Training iterations completed
    pub n_iterations: u32,
    /// Most recent training error
    pub last_error: f32,
    /// Current exploration range
    pub exploration_range: f32,
    /// Running application
    pub app_id: AppId,
    /// Selected dataset slot
    pub current_dataset: u8,
    /// Selected model slot
    pub current_model: u8,
    /// Neural network mode
    pub current_nn_mode: NnMode,
    /// Exploration mode
    pub current_expl_mode: ExplMode,
}

impl AppState {
    /// Reference record used by the self-test
    pub const REFERENCE: Self = Self {
        n_iterations: 1000,
        last_error: 0.33519,
        exploration_range: 0.21948,
        app_id: AppId::MACHINE_LISTEN,
        current_dataset: 2,
        current_model: 1,
        current_nn_mode: NnMode::TRAINING,
        current_expl_mode: ExplMode::PRETRAIN,
    };

    /// Encode to a checksummed state line
    #[must_use]
    pub fn encode(&self) -> String {
        super::encode_state(self)
    }

    /// Decode a checksummed state line
    pub fn decode(line: &str) -> Result<Self> {
        super::decode_state(line)
    }

    /// Additive checksum over all fields
    #[must_use]
    pub fn checksum(&self) -> u32 {
        super::checksum(self)
    }

    /// Bitwise equality, distinguishing float values that `==` conflates
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.n_iterations == other.n_iterations
            && self.last_error.to_bits() == other.last_error.to_bits()
            && self.exploration_range.to_bits() == other.exploration_range.to_bits()
            && self.app_id == other.app_id
            && self.current_dataset == other.current_dataset
            && self.current_model == other.current_model
            && self.current_nn_mode == other.current_nn_mode
            && self.current_expl_mode == other.current_expl_mode
    }
}
