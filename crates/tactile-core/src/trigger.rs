//! Hardware trigger routing
//!
//! Incoming events are routed by [`TriggerKey`] — the (control id,
//! message type) pair — to a [`TriggerAction`] record. Actions carry
//! their configuration as data rather than captured state, so a
//! binding's trigger table can be inspected and tested without
//! exercising dispatch.

/// Control-change status byte, the default message type for numbers.
pub const CONTROL_CHANGE: u8 = 0xB0;
/// Note-on status byte, the default message type for effects.
pub const NOTE_ON: u8 = 0x90;
/// Note-off status byte, the default message type for booleans.
pub const NOTE_OFF: u8 = 0x80;

/// Physical control identifier(s) a trigger listens on.
///
/// A single id drives absolute/toggle/effect semantics; a pair drives
/// the complementary decrement/increment and on/off modes. These are
/// the only two legal shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyId {
    /// One key or knob (0-127).
    Single(u8),
    /// Two complementary keys. Meaning is kind-specific:
    /// `(dec, inc)` for numbers, `(on, off)` for booleans.
    Pair(u8, u8),
}

/// Routing key for one trigger-table entry.
///
/// A knob and a button may share a raw control id as long as their
/// message types differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerKey {
    pub control_id: u8,
    pub message_type: u8,
}

impl TriggerKey {
    pub fn new(control_id: u8, message_type: u8) -> Self {
        Self {
            control_id,
            message_type,
        }
    }
}

/// Sample filter deciding which edge of a press/release pair fires.
///
/// Momentary buttons send a press sample (127) followed by a release
/// sample (0); only one edge may trigger or the action double-fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// Fire on the release sample (0). The default.
    #[default]
    Release,
    /// Fire on a specific sample value.
    At(u8),
    /// Fire on every sample.
    Any,
}

impl Edge {
    /// Does `sample` pass this filter?
    pub fn matches(&self, sample: u8) -> bool {
        match self {
            Edge::Release => sample == 0,
            Edge::At(v) => sample == *v,
            Edge::Any => true,
        }
    }
}

/// One installed trigger handler, stored as plain data.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerAction {
    /// Map the full 0-127 sample range onto `[min, max]` and write the
    /// result to `param`. No edge filter: every sample is a position.
    AbsoluteSet { param: String, min: f64, max: f64 },
    /// Add `delta` to `param`, clamped into `[min, max]`.
    IncrementBy {
        param: String,
        delta: f64,
        min: f64,
        max: f64,
        edge: Edge,
    },
    /// Flip the boolean at `param`.
    Toggle { param: String, edge: Edge },
    /// Unconditionally set the boolean at `param` to `value`.
    SetConstant {
        param: String,
        value: bool,
        edge: Edge,
    },
    /// Invoke the effect stored at `param`.
    InvokeEffect { param: String, edge: Edge },
}

impl TriggerAction {
    /// The parameter key this action targets.
    pub fn param(&self) -> &str {
        match self {
            TriggerAction::AbsoluteSet { param, .. }
            | TriggerAction::IncrementBy { param, .. }
            | TriggerAction::Toggle { param, .. }
            | TriggerAction::SetConstant { param, .. }
            | TriggerAction::InvokeEffect { param, .. } => param,
        }
    }
}
