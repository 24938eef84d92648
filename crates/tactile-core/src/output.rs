//! Outgoing hardware feedback
//!
//! Applications re-arm LEDs by sending (message type, control id,
//! value) triples back to the device, typically from `on_change`
//! callbacks. MIDI output is fire-and-forget: no batching, no
//! acknowledgment.

/// Raw 3-byte hardware payload: `[message_type, control_id, value]`.
pub type RawEvent = [u8; 3];

/// Transport capability for outgoing payloads.
///
/// Implementations log their own failures; a send that goes nowhere is
/// a degraded mode, not an error the engine can act on.
pub trait Transport {
    fn send(&mut self, payload: RawEvent);
}

/// Serializes outgoing triples to the transport, if one is attached.
#[derive(Default)]
pub struct OutputGateway {
    transport: Option<Box<dyn Transport>>,
    debug: bool,
}

impl OutputGateway {
    pub fn new(transport: Option<Box<dyn Transport>>) -> Self {
        Self {
            transport,
            debug: false,
        }
    }

    pub fn attach(&mut self, transport: Box<dyn Transport>) {
        self.transport = Some(transport);
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Forward one payload. Silently no-ops when no transport is
    /// attached (headless mode).
    pub fn send(&mut self, message_type: u8, control_id: u8, value: u8) {
        let Some(transport) = self.transport.as_mut() else {
            return;
        };

        if self.debug {
            log::debug!(
                "midi message sent: [message_type:{message_type} control_id:{control_id} value:{value}]"
            );
        }
        transport.send([message_type, control_id, value]);
    }
}
