//! Novation Launch Control control map
//!
//! The Launch Control has 8 pads, 16 knobs (two rows of 8), and 4 arrow
//! buttons. It ships with a "user" and a "factory" template; the factory
//! template shifts every status byte up by 8 (channel 9 instead of 1).
//!
//! Reference: Launch Control Programmer's Reference Guide.

/// Pad control IDs, left to right (pads 1-8)
pub const PADS: [u8; 8] = [0x09, 0x0A, 0x0B, 0x0C, 0x19, 0x1A, 0x1B, 0x1C];

/// Knob control IDs, top row then bottom row (knobs 1-16)
pub const KNOBS: [u8; 16] = [
    0x15, 0x16, 0x17, 0x18, 0x19, 0x1A, 0x1B, 0x1C, // top row
    0x29, 0x2A, 0x2B, 0x2C, 0x2D, 0x2E, 0x2F, 0x30, // bottom row
];

/// Arrow buttons (single red LED each)
pub const BUTTON_UP: u8 = 0x72;
pub const BUTTON_DOWN: u8 = 0x73;
pub const BUTTON_LEFT: u8 = 0x74;
pub const BUTTON_RIGHT: u8 = 0x75;

/// Message types per template
pub mod messages {
    /// User template (the power-on default)
    pub mod user {
        pub const KNOB: u8 = 0xB0;
        pub const PAD_ON: u8 = 0x90;
        pub const PAD_OFF: u8 = 0x80;
        pub const BUTTON: u8 = 0xB0;
    }

    /// Factory template
    pub mod factory {
        pub const KNOB: u8 = 0xB8;
        pub const PAD_ON: u8 = 0x98;
        pub const PAD_OFF: u8 = 0x88;
        pub const BUTTON: u8 = 0xB8;
    }
}

/// Sample extremes sent by the hardware
pub mod values {
    pub const KNOB_HIGH: u8 = 0x7F;
    pub const KNOB_LOW: u8 = 0x00;
    pub const BUTTON_DOWN: u8 = 0x7F;
    pub const BUTTON_UP: u8 = 0x00;
    pub const PAD_DOWN: u8 = 0x7F;
    pub const PAD_UP: u8 = 0x00;
}

/// Pad LED velocity values (red/green brightness packed into one byte)
pub mod lights {
    pub const OFF: u8 = 0x0C;
    pub const RED_LOW: u8 = 0x0D;
    pub const RED_FULL: u8 = 0x0F;
    pub const AMBER_LOW: u8 = 0x1D;
    pub const AMBER_FULL: u8 = 0x3F;
    pub const YELLOW: u8 = 0x3E;
    pub const GREEN_LOW: u8 = 0x1C;
    pub const GREEN_FULL: u8 = 0x3C;
}

/// Whole-surface control messages
pub mod special {
    /// Turn all LEDs off and reset templates
    pub const RESET: [u8; 3] = [0xB0, 0x00, 0x00];
    pub const LOW_BRIGHTNESS_TEST: [u8; 3] = [0xB0, 0x00, 0x7D];
    pub const MEDIUM_BRIGHTNESS_TEST: [u8; 3] = [0xB0, 0x00, 0x7E];
    pub const FULL_BRIGHTNESS_TEST: [u8; 3] = [0xB0, 0x00, 0x7F];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_template_shifts_status_by_eight() {
        assert_eq!(messages::factory::KNOB, messages::user::KNOB + 8);
        assert_eq!(messages::factory::PAD_ON, messages::user::PAD_ON + 8);
        assert_eq!(messages::factory::PAD_OFF, messages::user::PAD_OFF + 8);
        assert_eq!(messages::factory::BUTTON, messages::user::BUTTON + 8);
    }

    #[test]
    fn control_ids_are_valid_data_bytes() {
        for id in PADS.iter().chain(KNOBS.iter()) {
            assert!(*id < 0x80);
        }
        assert_eq!(PADS[0], 0x09);
        assert_eq!(KNOBS[8], 0x29);
        assert_eq!(BUTTON_RIGHT, 0x75);
    }
}
