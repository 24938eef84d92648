//! Control builders
//!
//! Each `add_*` call targets whichever binding is active at call time:
//! it writes the initial parameter value (last-writer-wins), creates a
//! widget when a UI adapter is attached, fires `on_change` once
//! synchronously with the initial value, and installs the control's
//! trigger-table entries.

use crate::binding::ControlHooks;
use crate::trigger::{Edge, KeyId, TriggerAction, TriggerKey, CONTROL_CHANGE, NOTE_OFF, NOTE_ON};
use crate::ui::WidgetLayout;
use crate::value::{EffectFn, Value};
use crate::{ControlError, Surface};

/// Consumer change callback, invoked with the initial value at
/// registration and with every subsequent value change.
pub type ChangeCallback = Box<dyn FnMut(&Value)>;

/// Declarative config for a number control.
#[derive(Debug, Clone, Copy)]
pub struct NumberConfig {
    pub initial: f64,
    /// Defaults to 0.
    pub min: Option<f64>,
    /// Defaults to `initial`.
    pub max: Option<f64>,
    /// Relative-mode adjustment per qualifying event. Defaults to 1.
    pub step: Option<f64>,
}

impl NumberConfig {
    pub fn new(initial: f64) -> Self {
        Self {
            initial,
            min: None,
            max: None,
            step: None,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}

/// Declarative config for a boolean control.
#[derive(Debug, Clone, Copy)]
pub struct BoolConfig {
    pub initial: bool,
}

impl BoolConfig {
    pub fn new(initial: bool) -> Self {
        Self { initial }
    }
}

/// Declarative config for a color control.
#[derive(Debug, Clone)]
pub struct ColorConfig {
    /// Opaque color string, e.g. `"#ff00ffff"`.
    pub initial: String,
}

impl ColorConfig {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
        }
    }
}

/// Declarative config for an effect control.
pub struct EffectConfig {
    pub initial: EffectFn,
}

impl EffectConfig {
    pub fn new(effect: impl Fn() + 'static) -> Self {
        Self {
            initial: std::rc::Rc::new(effect),
        }
    }
}

/// Hardware trigger spec for a control.
///
/// `message_type` defaults per control kind (control-change for
/// numbers, note-off for booleans, note-on for effects); `edge`
/// defaults to the release sample so press+release pairs fire once.
pub struct TriggerSpec {
    pub key_id: KeyId,
    pub message_type: Option<u8>,
    pub edge: Edge,
    pub on_change: Option<ChangeCallback>,
}

impl TriggerSpec {
    /// Trigger on a single key/knob id.
    pub fn key(id: u8) -> Self {
        Self {
            key_id: KeyId::Single(id),
            message_type: None,
            edge: Edge::default(),
            on_change: None,
        }
    }

    /// Trigger on a complementary pair: `(dec, inc)` for numbers,
    /// `(on, off)` for booleans.
    pub fn pair(first: u8, second: u8) -> Self {
        Self {
            key_id: KeyId::Pair(first, second),
            ..Self::key(0)
        }
    }

    pub fn message_type(mut self, message_type: u8) -> Self {
        self.message_type = Some(message_type);
        self
    }

    pub fn edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&Value) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }
}

impl Surface {
    /// Add a number parameter to the active binding.
    ///
    /// A single key id selects absolute mode: each sample is mapped
    /// with `normalize(0, 127, v)` onto `[min, max]` and written
    /// directly — no quantization to `step` (display quantization is
    /// the widget's concern). A pair `(dec, inc)` selects relative
    /// mode: each qualifying event adjusts by exactly `step`, clamped
    /// into `[min, max]`.
    pub fn add_number_value(
        &mut self,
        key: &str,
        value: NumberConfig,
        trigger: TriggerSpec,
    ) -> Result<&mut Self, ControlError> {
        let initial = value.initial;
        let min = value.min.unwrap_or(0.0);
        let max = value.max.unwrap_or(initial);
        let step = value.step.unwrap_or(1.0);
        let message_type = trigger.message_type.unwrap_or(CONTROL_CHANGE);

        self.install_control(
            key,
            Value::Number(initial),
            WidgetLayout::Slider { min, max, step },
            trigger.on_change,
        )?;

        let binding = self.store.active_mut()?;
        match trigger.key_id {
            KeyId::Single(id) => {
                binding.triggers.insert(
                    TriggerKey::new(id, message_type),
                    TriggerAction::AbsoluteSet {
                        param: key.to_string(),
                        min,
                        max,
                    },
                );
            }
            KeyId::Pair(dec_id, inc_id) => {
                binding.triggers.insert(
                    TriggerKey::new(inc_id, message_type),
                    TriggerAction::IncrementBy {
                        param: key.to_string(),
                        delta: step,
                        min,
                        max,
                        edge: trigger.edge,
                    },
                );
                binding.triggers.insert(
                    TriggerKey::new(dec_id, message_type),
                    TriggerAction::IncrementBy {
                        param: key.to_string(),
                        delta: -step,
                        min,
                        max,
                        edge: trigger.edge,
                    },
                );
            }
        }

        Ok(self)
    }

    /// Add a boolean parameter to the active binding.
    ///
    /// A single key id toggles on each qualifying event; a pair
    /// `(on, off)` sets true/false unconditionally, gated by the same
    /// edge filter.
    pub fn add_boolean_value(
        &mut self,
        key: &str,
        value: BoolConfig,
        trigger: TriggerSpec,
    ) -> Result<&mut Self, ControlError> {
        let message_type = trigger.message_type.unwrap_or(NOTE_OFF);

        self.install_control(
            key,
            Value::Boolean(value.initial),
            WidgetLayout::Checkbox,
            trigger.on_change,
        )?;

        let binding = self.store.active_mut()?;
        match trigger.key_id {
            KeyId::Single(id) => {
                binding.triggers.insert(
                    TriggerKey::new(id, message_type),
                    TriggerAction::Toggle {
                        param: key.to_string(),
                        edge: trigger.edge,
                    },
                );
            }
            KeyId::Pair(on_id, off_id) => {
                binding.triggers.insert(
                    TriggerKey::new(on_id, message_type),
                    TriggerAction::SetConstant {
                        param: key.to_string(),
                        value: true,
                        edge: trigger.edge,
                    },
                );
                binding.triggers.insert(
                    TriggerKey::new(off_id, message_type),
                    TriggerAction::SetConstant {
                        param: key.to_string(),
                        value: false,
                        edge: trigger.edge,
                    },
                );
            }
        }

        Ok(self)
    }

    /// Add a color parameter to the active binding.
    ///
    /// Colors have no hardware trigger path — a handful of discrete
    /// buttons cannot usefully set one — so this only wires the widget
    /// and its change callback.
    pub fn add_color_value(
        &mut self,
        key: &str,
        value: ColorConfig,
        on_change: Option<ChangeCallback>,
    ) -> Result<&mut Self, ControlError> {
        self.install_control(
            key,
            Value::Color(value.initial),
            WidgetLayout::ColorPicker,
            on_change,
        )?;
        Ok(self)
    }

    /// Add an effect (zero-argument callback) to the active binding.
    ///
    /// The callback is stored as the parameter value so it can be read
    /// back with [`Surface::effect`], wired to a UI button, and
    /// installed as exactly one trigger entry. Only a single key id is
    /// supported.
    pub fn add_effect(
        &mut self,
        key: &str,
        value: EffectConfig,
        trigger: TriggerSpec,
    ) -> Result<&mut Self, ControlError> {
        let message_type = trigger.message_type.unwrap_or(NOTE_ON);
        let KeyId::Single(id) = trigger.key_id else {
            return Err(ControlError::UnsupportedTriggerShape("effect"));
        };

        self.install_control(
            key,
            Value::Effect(value.initial),
            WidgetLayout::Button,
            trigger.on_change,
        )?;

        let binding = self.store.active_mut()?;
        binding.triggers.insert(
            TriggerKey::new(id, message_type),
            TriggerAction::InvokeEffect {
                param: key.to_string(),
                edge: trigger.edge,
            },
        );

        Ok(self)
    }

    /// Shared builder tail: param write, widget creation, hook
    /// registration, and the synchronous initial `on_change`.
    fn install_control(
        &mut self,
        key: &str,
        initial: Value,
        layout: WidgetLayout,
        on_change: Option<ChangeCallback>,
    ) -> Result<(), ControlError> {
        let Self { store, ui, .. } = self;
        let binding = store.active_mut()?;

        binding.params.insert(key.to_string(), initial.clone());

        let widget = match (ui.as_mut(), binding.ui_group) {
            (Some(ui), Some(group)) => ui.create_widget(group, key, &initial, &layout),
            _ => None,
        };

        let mut hooks = ControlHooks { widget, on_change };
        if let Some(on_change) = hooks.on_change.as_mut() {
            on_change(&initial);
        }
        binding.hooks.insert(key.to_string(), hooks);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn builders_require_an_active_binding() {
        let mut surface = Surface::new();
        assert!(matches!(
            surface
                .add_number_value("n", NumberConfig::new(0.0), TriggerSpec::key(1))
                .unwrap_err(),
            ControlError::NoActiveBinding
        ));
        assert!(matches!(
            surface
                .add_boolean_value("b", BoolConfig::new(false), TriggerSpec::key(1))
                .unwrap_err(),
            ControlError::NoActiveBinding
        ));
        assert!(matches!(
            surface
                .add_color_value("c", ColorConfig::new("#ffffffff"), None)
                .unwrap_err(),
            ControlError::NoActiveBinding
        ));
        assert!(matches!(
            surface
                .add_effect("e", EffectConfig::new(|| {}), TriggerSpec::key(1))
                .unwrap_err(),
            ControlError::NoActiveBinding
        ));
    }

    #[test]
    fn builders_chain_against_the_active_binding() {
        let mut surface = Surface::new();
        surface.create_binding("main").unwrap();
        surface
            .add_number_value("n", NumberConfig::new(0.5), TriggerSpec::key(0x15))
            .unwrap()
            .add_boolean_value("b", BoolConfig::new(true), TriggerSpec::key(0x09))
            .unwrap()
            .add_color_value("c", ColorConfig::new("#ff00ffff"), None)
            .unwrap();

        let binding = surface.binding("main").unwrap();
        assert_eq!(binding.param("n").unwrap().as_number(), Some(0.5));
        assert_eq!(binding.param("b").unwrap().as_boolean(), Some(true));
        assert_eq!(binding.param("c").unwrap().as_color(), Some("#ff00ffff"));
    }

    #[test]
    fn default_message_types_per_kind() {
        let mut surface = Surface::new();
        surface.create_binding("main").unwrap();
        surface
            .add_number_value("n", NumberConfig::new(0.0), TriggerSpec::key(1))
            .unwrap()
            .add_boolean_value("b", BoolConfig::new(false), TriggerSpec::key(2))
            .unwrap()
            .add_effect("e", EffectConfig::new(|| {}), TriggerSpec::key(3))
            .unwrap();

        let triggers = surface.binding("main").unwrap().triggers();
        assert!(triggers.contains_key(&TriggerKey::new(1, CONTROL_CHANGE)));
        assert!(triggers.contains_key(&TriggerKey::new(2, NOTE_OFF)));
        assert!(triggers.contains_key(&TriggerKey::new(3, NOTE_ON)));
    }

    #[test]
    fn number_pair_installs_inc_and_dec_records() {
        let mut surface = Surface::new();
        surface.create_binding("main").unwrap();
        surface
            .add_number_value(
                "scale",
                NumberConfig::new(0.0).range(-2.0, 2.0),
                TriggerSpec::pair(0x74, 0x75).message_type(CONTROL_CHANGE),
            )
            .unwrap();

        let triggers = surface.binding("main").unwrap().triggers();
        assert_eq!(
            triggers[&TriggerKey::new(0x75, CONTROL_CHANGE)],
            TriggerAction::IncrementBy {
                param: "scale".into(),
                delta: 1.0,
                min: -2.0,
                max: 2.0,
                edge: Edge::Release,
            }
        );
        assert_eq!(
            triggers[&TriggerKey::new(0x74, CONTROL_CHANGE)],
            TriggerAction::IncrementBy {
                param: "scale".into(),
                delta: -1.0,
                min: -2.0,
                max: 2.0,
                edge: Edge::Release,
            }
        );
    }

    #[test]
    fn effect_rejects_pair_shape() {
        let mut surface = Surface::new();
        surface.create_binding("main").unwrap();
        let err = surface
            .add_effect("e", EffectConfig::new(|| {}), TriggerSpec::pair(1, 2))
            .unwrap_err();
        assert!(matches!(err, ControlError::UnsupportedTriggerShape("effect")));
        // fail-fast: nothing was written
        assert!(surface.binding("main").unwrap().param("e").is_none());
    }

    #[test]
    fn on_change_fires_once_with_initial_value() {
        let seen: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut surface = Surface::new();
        surface.create_binding("main").unwrap();
        surface
            .add_number_value(
                "n",
                NumberConfig::new(42.0).range(0.0, 100.0),
                TriggerSpec::key(1).on_change(move |v| {
                    sink.borrow_mut().push(v.as_number().unwrap());
                }),
            )
            .unwrap();

        assert_eq!(*seen.borrow(), vec![42.0]);
    }

    #[test]
    fn duplicate_param_key_is_last_writer_wins() {
        let mut surface = Surface::new();
        surface.create_binding("main").unwrap();
        surface
            .add_number_value("n", NumberConfig::new(1.0), TriggerSpec::key(1))
            .unwrap()
            .add_number_value("n", NumberConfig::new(2.0), TriggerSpec::key(2))
            .unwrap();

        assert_eq!(surface.number("n").unwrap(), Some(2.0));
    }
}
