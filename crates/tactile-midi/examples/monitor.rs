//! Print every channel voice message a device sends
//!
//! Usage: `cargo run --example monitor -- <port substring>`
//!
//! With no argument, lists the available ports and exits.

use std::time::Duration;

fn main() {
    env_logger::init();

    let port_match = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            println!("Input ports:");
            for name in tactile_midi::list_input_ports().unwrap_or_default() {
                println!("  {}", name);
            }
            println!("Output ports:");
            for name in tactile_midi::list_output_ports().unwrap_or_default() {
                println!("  {}", name);
            }
            println!("\nUsage: monitor <port substring>");
            return;
        }
    };

    let connector = tactile_midi::connect(&port_match);
    let events = match connector.events {
        Some(rx) => rx,
        None => {
            eprintln!("No input port matched '{}'", port_match);
            return;
        }
    };

    println!("Monitoring '{}', Ctrl-C to stop", port_match);
    loop {
        match events.recv_timeout(Duration::from_secs(1)) {
            Ok([message_type, control_id, sample]) => {
                println!(
                    "type=0x{:02X} id=0x{:02X} ({:3}) sample={:3}",
                    message_type, control_id, control_id, sample
                );
            }
            Err(flume::RecvTimeoutError::Timeout) => continue,
            Err(flume::RecvTimeoutError::Disconnected) => break,
        }
    }
}
