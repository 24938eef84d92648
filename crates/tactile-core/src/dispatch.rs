//! Event dispatch
//!
//! The single synchronous hot path: one call per incoming hardware
//! event, run to completion before the next event is handled.

use crate::normalize::{clamp, sample_to_range};
use crate::output::RawEvent;
use crate::trigger::{TriggerAction, TriggerKey};
use crate::value::Value;
use crate::Surface;

impl Surface {
    /// Route one raw `[message_type, control_id, sample]` event.
    ///
    /// Unmapped events are expected noise: no active binding or no
    /// matching trigger key is a silent no-op, surfaced only at debug
    /// level.
    pub fn on_hardware_event(&mut self, event: RawEvent) {
        let [message_type, control_id, sample] = event;

        if self.debug {
            log::debug!(
                "midi message received: [message_type:{message_type} control_id:{control_id} value:{sample}]"
            );
        }

        let Some(name) = self.store.active_name().map(str::to_string) else {
            if self.debug {
                log::debug!("no active binding, event dropped");
            }
            return;
        };

        let key = TriggerKey::new(control_id, message_type);
        let action = self
            .store
            .get(&name)
            .and_then(|binding| binding.triggers.get(&key))
            .cloned();

        let Some(action) = action else {
            if self.debug {
                log::debug!("no trigger registered for {key:?}");
            }
            return;
        };

        if self.debug {
            log::debug!("firing {action:?} with sample {sample}");
        }
        self.apply(&name, &action, sample);
    }

    /// Apply one trigger record to the binding it was installed on.
    fn apply(&mut self, name: &str, action: &TriggerAction, sample: u8) {
        match action {
            TriggerAction::AbsoluteSet { param, min, max } => {
                let next = sample_to_range(sample, *min, *max);
                self.write_value(name, param, Value::Number(next));
            }

            TriggerAction::IncrementBy {
                param,
                delta,
                min,
                max,
                edge,
            } => {
                if !edge.matches(sample) {
                    return;
                }
                let Some(current) = self.read_number(name, param) else {
                    return;
                };
                let next = clamp(*min, *max, current + delta);
                self.write_value(name, param, Value::Number(next));
            }

            TriggerAction::Toggle { param, edge } => {
                if !edge.matches(sample) {
                    return;
                }
                let Some(current) = self.read_boolean(name, param) else {
                    return;
                };
                self.write_value(name, param, Value::Boolean(!current));
            }

            TriggerAction::SetConstant { param, value, edge } => {
                if !edge.matches(sample) {
                    return;
                }
                self.write_value(name, param, Value::Boolean(*value));
            }

            TriggerAction::InvokeEffect { param, edge } => {
                if !edge.matches(sample) {
                    return;
                }
                // Clone the Rc so the store borrow ends before the
                // callback runs.
                let effect = self
                    .store
                    .get(name)
                    .and_then(|binding| binding.param(param))
                    .and_then(|value| value.as_effect());
                if let Some(effect) = effect {
                    (*effect)();
                }
            }
        }
    }

    fn read_number(&self, name: &str, param: &str) -> Option<f64> {
        self.store
            .get(name)
            .and_then(|binding| binding.param(param))
            .and_then(|value| value.as_number())
    }

    fn read_boolean(&self, name: &str, param: &str) -> Option<bool> {
        self.store
            .get(name)
            .and_then(|binding| binding.param(param))
            .and_then(|value| value.as_boolean())
    }
}
