//! Akai MIDImix control map
//!
//! The MIDImix is an 8-channel mixer surface: three knob rows and a fader
//! per channel, mute/solo/rec-arm buttons per strip, a master fader, and
//! bank arrows. Buttons carry a single LED driven by note on/off.

/// Per-channel strip buttons
#[derive(Debug, Clone, Copy)]
pub struct ChannelButtons {
    pub mute: u8,
    pub solo: u8,
    pub rec_arm: u8,
}

/// Strip buttons for channels 1-8
pub const BUTTONS: [ChannelButtons; 8] = [
    ChannelButtons { mute: 0x01, solo: 0x02, rec_arm: 0x03 },
    ChannelButtons { mute: 0x04, solo: 0x05, rec_arm: 0x06 },
    ChannelButtons { mute: 0x07, solo: 0x08, rec_arm: 0x09 },
    ChannelButtons { mute: 0x0A, solo: 0x0B, rec_arm: 0x0C },
    ChannelButtons { mute: 0x0D, solo: 0x0E, rec_arm: 0x0F },
    ChannelButtons { mute: 0x10, solo: 0x11, rec_arm: 0x12 },
    ChannelButtons { mute: 0x13, solo: 0x14, rec_arm: 0x15 },
    ChannelButtons { mute: 0x16, solo: 0x17, rec_arm: 0x18 },
];

/// Bank arrows and the global solo button
pub const BANK_LEFT: u8 = 0x19;
pub const BANK_RIGHT: u8 = 0x1A;
pub const SOLO: u8 = 0x1B;

/// Knob control IDs, indexed `[row][channel]` — row 0 is the top row
pub const KNOBS: [[u8; 8]; 3] = [
    [0x10, 0x14, 0x18, 0x1C, 0x2E, 0x32, 0x36, 0x3A],
    [0x11, 0x15, 0x19, 0x1D, 0x2F, 0x33, 0x37, 0x3B],
    [0x12, 0x16, 0x1A, 0x1E, 0x30, 0x34, 0x38, 0x3C],
];

/// Channel fader control IDs (channels 1-8)
pub const SLIDERS: [u8; 8] = [0x13, 0x17, 0x1B, 0x1F, 0x31, 0x35, 0x39, 0x3D];

/// Master fader control ID
pub const SLIDER_MASTER: u8 = 0x3E;

/// Message types sent by the hardware
pub mod messages {
    pub const KNOB: u8 = 0xB0;
    pub const SLIDER: u8 = 0xB0;
    pub const BUTTON_DOWN: u8 = 0x90;
    pub const BUTTON_UP: u8 = 0x80;
}

/// Sample extremes sent by the hardware
///
/// Note the MIDImix quirk: button release arrives as note off with
/// velocity 0x7F, not 0.
pub mod values {
    pub const KNOB_HIGH: u8 = 0x7F;
    pub const KNOB_LOW: u8 = 0x00;
    pub const SLIDER_HIGH: u8 = 0x7F;
    pub const SLIDER_LOW: u8 = 0x00;
    pub const BUTTON_DOWN: u8 = 0x7F;
    pub const BUTTON_UP: u8 = 0x7F;
}

/// Button LED values
pub mod lights {
    pub const OFF: u8 = 0x00;
    pub const ON: u8 = 0x01;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn note_ids_are_unique_among_buttons() {
        let mut seen = HashSet::new();
        for buttons in BUTTONS {
            assert!(seen.insert(buttons.mute));
            assert!(seen.insert(buttons.solo));
            assert!(seen.insert(buttons.rec_arm));
        }
        for id in [BANK_LEFT, BANK_RIGHT, SOLO] {
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn cc_ids_are_unique_among_knobs_and_faders() {
        let mut seen = HashSet::new();
        for row in KNOBS {
            for id in row {
                assert!(seen.insert(id));
            }
        }
        for id in SLIDERS {
            assert!(seen.insert(id));
        }
        assert!(seen.insert(SLIDER_MASTER));
    }

    #[test]
    fn faders_sit_below_the_knob_rows() {
        // each channel strip is knob rows 0-2 then the fader
        assert_eq!(SLIDERS[0], 0x13);
        assert_eq!(KNOBS[2][0] + 1, SLIDERS[0]);
        assert_eq!(SLIDER_MASTER, 0x3E);
    }
}
