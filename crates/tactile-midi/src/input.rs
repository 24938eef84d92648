//! MIDI input handling
//!
//! Receives raw MIDI bytes from the midir callback, validates them as
//! 3-byte channel voice messages, and forwards them over a flume channel
//! for the single-threaded engine to drain.

use crate::MidiConnectionError;
use flume::Sender;
use midir::MidiInputConnection;
use tactile_core::RawEvent;

/// Validate raw MIDI bytes as a 3-byte channel voice message
///
/// Dispatch only understands `[status, data1, data2]`. System messages
/// (0xF0 and above, including SysEx and clock) and short messages such as
/// program change are dropped here.
pub fn parse_event(data: &[u8]) -> Option<RawEvent> {
    if data.len() != 3 {
        return None;
    }
    let status = data[0];
    if !(0x80..0xF0).contains(&status) {
        return None;
    }
    Some([data[0], data[1], data[2]])
}

/// MIDI input handler
///
/// Owns the midir connection; events arrive on the paired receiver.
pub struct InputHandler {
    /// The midir connection (kept alive for the duration)
    _connection: MidiInputConnection<Sender<RawEvent>>,
}

impl InputHandler {
    /// Connect to the first input port matching `port_match`
    pub fn connect(
        port_match: &str,
        event_tx: Sender<RawEvent>,
    ) -> Result<Self, MidiConnectionError> {
        let (midi_in, port) = crate::connection::find_input_port(port_match)?;

        let connection = midi_in
            .connect(&port, "tactile-input", Self::midi_callback, event_tx)
            .map_err(|e| MidiConnectionError::ConnectionError(e.to_string()))?;

        log::info!("MIDI: Input handler connected");

        Ok(Self {
            _connection: connection,
        })
    }

    /// The midir callback function
    ///
    /// Called from the MIDI driver thread whenever a message is received.
    /// Must be fast and non-blocking.
    fn midi_callback(_timestamp: u64, data: &[u8], event_tx: &mut Sender<RawEvent>) {
        let event = match parse_event(data) {
            Some(e) => e,
            None => {
                log::trace!("MIDI: Ignoring non-voice message ({} bytes)", data.len());
                return;
            }
        };

        if event_tx.try_send(event).is_err() {
            log::warn!("MIDI: Event channel full, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_note_on() {
        assert_eq!(parse_event(&[0x90, 0x3C, 0x7F]), Some([0x90, 0x3C, 0x7F]));
    }

    #[test]
    fn parses_control_change() {
        assert_eq!(parse_event(&[0xB0, 0x15, 0x64]), Some([0xB0, 0x15, 0x64]));
    }

    #[test]
    fn rejects_system_messages() {
        // SysEx start and clock are not channel voice messages
        assert_eq!(parse_event(&[0xF0, 0x00, 0x00]), None);
        assert_eq!(parse_event(&[0xF8, 0x00, 0x00]), None);
    }

    #[test]
    fn rejects_short_and_long_messages() {
        assert_eq!(parse_event(&[0xC0, 0x05]), None);
        assert_eq!(parse_event(&[0x90, 0x3C, 0x7F, 0x00]), None);
        assert_eq!(parse_event(&[]), None);
    }

    #[test]
    fn rejects_data_bytes_without_status() {
        assert_eq!(parse_event(&[0x3C, 0x3C, 0x7F]), None);
    }
}
