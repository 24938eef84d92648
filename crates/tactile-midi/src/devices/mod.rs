//! Built-in control maps for known surfaces
//!
//! Each module holds the factory-documented control IDs, message types, and
//! LED values for one device, so callers can bind by name instead of
//! sniffing bytes with a MIDI monitor.

pub mod launch_control;
pub mod midi_mix;
