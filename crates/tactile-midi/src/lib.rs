//! MIDI connector for tactile control surfaces
//!
//! This crate provides:
//! - Port discovery and connection via midir
//! - Raw event forwarding over a flume channel
//! - An output transport for LED feedback
//! - YAML surface profiles
//! - Built-in control maps for known devices
//!
//! # Architecture
//!
//! ```text
//! MIDI device → midir callback → flume channel → pump() → Surface
//! ```
//!
//! The midir callback runs on the driver thread; the engine itself is
//! single-threaded and drains the channel from its own loop. `connect`
//! never fails: a missing input or output port just leaves that half of
//! the [`Connector`] empty, so the same code runs fully headless.

mod config;
mod connection;
mod input;
mod output;

pub mod devices;

pub use config::{default_config_path, load_config, save_config, SurfaceConfig};
pub use connection::{
    connect_output, find_input_port, list_input_ports, list_output_ports, MidiConnectionError,
};
pub use input::{parse_event, InputHandler};
pub use output::MidiTransport;

use flume::Receiver;
use tactile_core::{RawEvent, Surface};

/// Events queued per connection before the driver thread starts dropping
const EVENT_QUEUE_DEPTH: usize = 256;

/// A connected (or partially connected) MIDI device
///
/// Produced by [`connect`]. Either half may be absent: `events` is `None`
/// when no input port matched, `transport` is `None` when no output port
/// matched. Dropping the connector closes both ports.
pub struct Connector {
    /// Raw hardware events, if an input port was found
    pub events: Option<Receiver<RawEvent>>,
    /// Output transport, if an output port was found
    pub transport: Option<MidiTransport>,
    /// Keeps the input connection alive
    _input: Option<InputHandler>,
}

impl Connector {
    /// Move the output transport out, for handing to `Surface::with_transport`
    pub fn take_transport(&mut self) -> Option<MidiTransport> {
        self.transport.take()
    }
}

/// Connect to the first device matching `port_match`
///
/// Never fails. Each half that cannot be connected is logged and left
/// empty, degrading to input-only, output-only, or fully headless.
pub fn connect(port_match: &str) -> Connector {
    let (event_tx, event_rx) = flume::bounded(EVENT_QUEUE_DEPTH);

    let input = match InputHandler::connect(port_match, event_tx) {
        Ok(handler) => Some(handler),
        Err(e) => {
            log::warn!("MIDI: No input for '{}': {}", port_match, e);
            None
        }
    };

    let transport = connect_output(port_match).map(MidiTransport::new);
    if transport.is_none() {
        log::warn!("MIDI: No output for '{}', feedback disabled", port_match);
    }

    let events = input.as_ref().map(|_| event_rx);

    Connector {
        events,
        transport,
        _input: input,
    }
}

/// Drain all pending hardware events into the engine
///
/// Call this once per tick of the host loop. Returns the number of events
/// dispatched.
pub fn pump(events: &Receiver<RawEvent>, surface: &mut Surface) -> usize {
    let mut count = 0;
    for event in events.try_iter() {
        surface.on_hardware_event(event);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_core::{NumberConfig, TriggerSpec, CONTROL_CHANGE};

    #[test]
    fn pump_drains_queued_events() {
        let (tx, rx) = flume::bounded(EVENT_QUEUE_DEPTH);

        let mut surface = Surface::new();
        surface.create_binding("deck").unwrap();
        surface
            .add_number_value(
                "volume",
                NumberConfig::new(0.0).range(0.0, 127.0),
                TriggerSpec::key(0x15),
            )
            .unwrap();

        tx.send([CONTROL_CHANGE, 0x15, 64]).unwrap();
        tx.send([CONTROL_CHANGE, 0x15, 127]).unwrap();
        drop(tx);

        assert_eq!(pump(&rx, &mut surface), 2);
        assert_eq!(surface.number("volume").unwrap(), Some(127.0));
    }

    #[test]
    fn pump_on_empty_channel_is_a_no_op() {
        let (tx, rx) = flume::bounded::<RawEvent>(EVENT_QUEUE_DEPTH);
        let mut surface = Surface::new();
        assert_eq!(pump(&rx, &mut surface), 0);
        drop(tx);
    }
}
