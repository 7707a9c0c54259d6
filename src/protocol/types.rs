//! Message type tags and the integer-backed state enumerations

use std::fmt;

/// Message types, identified on the wire by a single ASCII character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MessageType {
    /// Joystick movement
    Joystick = b'j',
    /// Button press or release
    Button = b'b',
    /// Pulse period measurement
    PulsePeriod = b'p',
    /// Slider position
    Slider = b's',
    /// Host asks the device for its state
    StateRequest = b'q',
    /// Device reports its full state
    StateDump = b'd',
    /// UI information for display
    UiInfo = b'u',
    /// MIDI note event
    MidiNote = b'n',
}

impl MessageType {
    /// Every message type, in tag table order
    pub const ALL: [Self; 8] = [
        Self::Joystick,
        Self::Button,
        Self::PulsePeriod,
        Self::Slider,
        Self::StateRequest,
        Self::StateDump,
        Self::UiInfo,
        Self::MidiNote,
    ];

    /// Convert from tag character
    #[must_use]
    pub const fn from_char(tag: char) -> Option<Self> {
        match tag {
            'j' => Some(Self::Joystick),
            'b' => Some(Self::Button),
            'p' => Some(Self::PulsePeriod),
            's' => Some(Self::Slider),
            'q' => Some(Self::StateRequest),
            'd' => Some(Self::StateDump),
            'u' => Some(Self::UiInfo),
            'n' => Some(Self::MidiNote),
            _ => None,
        }
    }

    /// Convert to tag character
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Joystick => "Joystick",
            Self::Button => "Button",
            Self::PulsePeriod => "PulsePeriod",
            Self::Slider => "Slider",
            Self::StateRequest => "StateRequest",
            Self::StateDump => "StateDump",
            Self::UiInfo => "UiInfo",
            Self::MidiNote => "MidiNote",
        };
        write!(f, "{name}")
    }
}

macro_rules! state_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$cmeta:meta])* $konst:ident = $value:expr,)* }) => {
        $(#[$meta])*
        ///
        /// The device firmware owns this enumeration and casts any received
        /// integer into it, so every `i32` is representable here.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(i32);

        impl $name {
            $($(#[$cmeta])* pub const $konst: Self = Self($value);)*

            /// Create from raw value
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Raw integer value
            #[must_use]
            pub const fn value(self) -> i32 {
                self.0
            }

            /// Two's-complement reinterpretation used by the checksum
            #[must_use]
            #[allow(clippy::cast_sign_loss)]
            pub(crate) const fn checksum_term(self) -> u32 {
                self.0 as u32
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

state_enum! {
    /// Application running on the device
    AppId {
        /// Machine listening application
        MACHINE_LISTEN = 2,
    }
}

state_enum! {
    /// Neural network operating mode
    NnMode {
        /// Network is being trained
        TRAINING = 1,
    }
}

state_enum! {
    /// Parameter space exploration mode
    ExplMode {
        /// Exploring before training
        PRETRAIN = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_roundtrip() {
        for msg_type in MessageType::ALL {
            let tag = msg_type.as_char();
            let decoded = MessageType::from_char(tag).unwrap();
            assert_eq!(msg_type, decoded);
        }
    }

    #[test]
    fn test_message_type_codes() {
        let codes: String = MessageType::ALL.iter().map(|t| t.as_char()).collect();
        assert_eq!(codes, "jbpsqdun");
        assert_eq!(MessageType::from_char('x'), None);
        assert_eq!(MessageType::from_char('J'), None);
    }

    #[test]
    fn test_state_enum_checksum_term() {
        assert_eq!(AppId::MACHINE_LISTEN.checksum_term(), 2);
        assert_eq!(NnMode::new(-1).checksum_term(), u32::MAX);
        assert_eq!(ExplMode::default().value(), 0);
        assert_eq!(ExplMode::from(7).to_string(), "7");
    }
}
