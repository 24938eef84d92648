//! MIDI output transport
//!
//! Wraps a midir output connection behind the engine's [`Transport`] trait
//! so the engine can drive LEDs without knowing about midir.

use midir::MidiOutputConnection;
use tactile_core::{RawEvent, Transport};

/// Transport backed by a real MIDI output port
pub struct MidiTransport {
    connection: MidiOutputConnection,
}

impl MidiTransport {
    pub fn new(connection: MidiOutputConnection) -> Self {
        Self { connection }
    }
}

impl Transport for MidiTransport {
    fn send(&mut self, payload: RawEvent) {
        // A failed send (device unplugged mid-session) should not take the
        // engine down with it.
        if let Err(e) = self.connection.send(&payload) {
            log::warn!("MIDI: Failed to send {:?}: {}", payload, e);
        }
    }
}
