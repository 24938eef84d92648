//! MIDI port discovery
//!
//! Uses midir for cross-platform MIDI I/O (ALSA on Linux, CoreMIDI on macOS, WinMM on Windows).
//! Port names are matched case-insensitively as substrings, so "launch" finds
//! "Launch Control MIDI 1".

use midir::{MidiInput, MidiInputPort, MidiOutput, MidiOutputConnection};

/// Error type for MIDI port operations
#[derive(Debug, thiserror::Error)]
pub enum MidiConnectionError {
    #[error("Failed to initialize MIDI input: {0}")]
    InputInitError(String),

    #[error("Failed to initialize MIDI output: {0}")]
    OutputInitError(String),

    #[error("No MIDI input ports available")]
    NoInputPorts,

    #[error("No MIDI port found matching pattern: {0}")]
    PortNotFound(String),

    #[error("Failed to connect to MIDI port: {0}")]
    ConnectionError(String),

    #[error("Failed to get port info: {0}")]
    PortInfoError(String),
}

/// Find an input port matching the given pattern
///
/// Returns the `MidiInput` handle alongside the port so the caller can
/// attach its own callback when connecting.
pub fn find_input_port(
    port_match: &str,
) -> Result<(MidiInput, MidiInputPort), MidiConnectionError> {
    let pattern = port_match.to_lowercase();

    let midi_in = MidiInput::new("tactile-in")
        .map_err(|e| MidiConnectionError::InputInitError(e.to_string()))?;

    let in_ports = midi_in.ports();
    if in_ports.is_empty() {
        return Err(MidiConnectionError::NoInputPorts);
    }

    let input_port = in_ports
        .into_iter()
        .find(|port| {
            midi_in
                .port_name(port)
                .map(|name| name.to_lowercase().contains(&pattern))
                .unwrap_or(false)
        })
        .ok_or_else(|| MidiConnectionError::PortNotFound(port_match.to_string()))?;

    let port_name = midi_in
        .port_name(&input_port)
        .map_err(|e| MidiConnectionError::PortInfoError(e.to_string()))?;

    log::info!("MIDI: Found input port: {}", port_name);

    Ok((midi_in, input_port))
}

/// Try to connect to a matching MIDI output port
///
/// Output is optional (a surface without feedback LEDs still works), so
/// every failure here is a warning rather than an error.
pub fn connect_output(port_match: &str) -> Option<MidiOutputConnection> {
    let pattern = port_match.to_lowercase();

    let midi_out = match MidiOutput::new("tactile-out") {
        Ok(out) => out,
        Err(e) => {
            log::warn!("MIDI: Failed to initialize output: {}", e);
            return None;
        }
    };

    let out_ports = midi_out.ports();

    let output_port = out_ports.iter().find(|port| {
        midi_out
            .port_name(port)
            .map(|name| name.to_lowercase().contains(&pattern))
            .unwrap_or(false)
    })?;

    let port_name = midi_out.port_name(output_port).ok()?;
    log::info!("MIDI: Found output port: {}", port_name);

    match midi_out.connect(output_port, "tactile-output") {
        Ok(conn) => {
            log::info!("MIDI: Connected to output port");
            Some(conn)
        }
        Err(e) => {
            log::warn!("MIDI: Failed to connect to output: {}", e);
            None
        }
    }
}

/// List all available MIDI input ports
pub fn list_input_ports() -> Result<Vec<String>, MidiConnectionError> {
    let midi_in = MidiInput::new("tactile-list")
        .map_err(|e| MidiConnectionError::InputInitError(e.to_string()))?;

    let ports: Vec<String> = midi_in
        .ports()
        .iter()
        .filter_map(|port| midi_in.port_name(port).ok())
        .collect();

    Ok(ports)
}

/// List all available MIDI output ports
pub fn list_output_ports() -> Result<Vec<String>, MidiConnectionError> {
    let midi_out = MidiOutput::new("tactile-list")
        .map_err(|e| MidiConnectionError::OutputInitError(e.to_string()))?;

    let ports: Vec<String> = midi_out
        .ports()
        .iter()
        .filter_map(|port| midi_out.port_name(port).ok())
        .collect();

    Ok(ports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_ports_does_not_crash() {
        // Port availability depends on the system; we only check that
        // enumeration itself works.
        let _ = list_input_ports();
        let _ = list_output_ports();
    }
}
