//! Binding-and-dispatch engine for MIDI control surfaces
//!
//! This crate provides:
//! - Named bindings: switchable collections of typed parameters
//! - A trigger table routing raw 3-byte hardware events to parameter updates
//! - Four control kinds: Number, Boolean, Color, Effect
//! - An optional UI adapter capability for mirroring bindings as widgets
//! - A fire-and-forget output gateway for LED feedback
//!
//! # Architecture
//!
//! ```text
//! device → Transport/channel → Surface::on_hardware_event → param update
//!                                                             ├─ widget refresh
//!                                                             └─ on_change → Surface::send → device LEDs
//! ```
//!
//! Everything runs on one logical thread: events are processed strictly
//! one at a time to completion, and `on_change` callbacks execute
//! synchronously inside the dispatch call, so they must not block.
//! Hardware I/O lives behind the [`Transport`] capability and an event
//! source the application drains (see the `tactile-midi` crate); the
//! engine itself never touches ports and is fully usable headless.

mod binding;
mod controls;
mod dispatch;
mod normalize;
mod output;
mod trigger;
mod ui;
mod value;

pub use binding::{Binding, BindingStore};
pub use controls::{
    BoolConfig, ChangeCallback, ColorConfig, EffectConfig, NumberConfig, TriggerSpec,
};
pub use normalize::{clamp, normalize, sample_to_range};
pub use output::{OutputGateway, RawEvent, Transport};
pub use trigger::{Edge, KeyId, TriggerAction, TriggerKey, CONTROL_CHANGE, NOTE_OFF, NOTE_ON};
pub use ui::{GroupHandle, UiAdapter, WidgetHandle, WidgetLayout};
pub use value::{EffectFn, Value};

/// Error type for binding and control operations.
///
/// All of these are programming/configuration errors raised fail-fast
/// at the violating call; none are retried. Transport-level trouble
/// (device missing, disconnected) is not represented here — it
/// degrades the engine to a reduced-capability mode instead.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("binding {0:?} already exists, remove before recreating")]
    DuplicateBinding(String),

    #[error("cannot operate on unknown binding {0:?}")]
    UnknownBinding(String),

    #[error("no active binding")]
    NoActiveBinding,

    #[error("unsupported trigger shape for {0} control")]
    UnsupportedTriggerShape(&'static str),
}

/// The binding engine.
///
/// Owns the binding store, the optional UI adapter, and the output
/// gateway. Constructed headless; capabilities are injected at
/// construction time rather than discovered from the environment.
///
/// ```
/// use tactile_core::{NumberConfig, Surface, TriggerSpec};
///
/// let mut surface = Surface::new();
/// surface.create_binding("main")?;
/// surface.add_number_value(
///     "speed",
///     NumberConfig::new(0.0).range(-100.0, 100.0),
///     TriggerSpec::key(0x15),
/// )?;
///
/// surface.on_hardware_event([176, 0x15, 127]);
/// assert_eq!(surface.number("speed")?, Some(100.0));
/// # Ok::<(), tactile_core::ControlError>(())
/// ```
#[derive(Default)]
pub struct Surface {
    pub(crate) store: BindingStore,
    pub(crate) ui: Option<Box<dyn UiAdapter>>,
    pub(crate) output: OutputGateway,
    pub(crate) debug: bool,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Create a headless engine: no UI, no transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject an output transport.
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.output.attach(transport);
        self
    }

    /// Inject a UI adapter.
    pub fn with_ui(mut self, ui: Box<dyn UiAdapter>) -> Self {
        self.ui = Some(ui);
        self
    }

    /// Log every received/sent payload and trigger decision at debug
    /// level.
    pub fn enable_debug(&mut self) {
        self.debug = true;
        self.output.set_debug(true);
    }

    /// Create an empty binding and make it active. Subsequent `add_*`
    /// calls populate it.
    pub fn create_binding(&mut self, name: &str) -> Result<(), ControlError> {
        if self.store.get(name).is_some() {
            return Err(ControlError::DuplicateBinding(name.to_string()));
        }

        let ui_group = self.ui.as_mut().and_then(|ui| ui.create_group(name));
        self.store.create(name, ui_group)
    }

    /// Destroy a binding as a whole unit, releasing its UI group.
    pub fn remove_binding(&mut self, name: &str) -> Result<(), ControlError> {
        let binding = self.store.remove(name)?;
        if let (Some(ui), Some(group)) = (self.ui.as_mut(), binding.ui_group) {
            ui.remove_group(group);
        }
        Ok(())
    }

    /// Point dispatch at `name`. Never mutates binding contents.
    pub fn activate_binding(&mut self, name: &str) -> Result<(), ControlError> {
        self.store.activate(name)
    }

    /// Clear the active pointer if `name` is active. Defensive no-op
    /// otherwise.
    pub fn deactivate_binding(&mut self, name: &str) {
        self.store.deactivate(name);
    }

    /// Name of the active binding, if any.
    pub fn active_binding(&self) -> Option<&str> {
        self.store.active_name()
    }

    /// Inspect a binding (parameters and trigger table).
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.store.get(name)
    }

    /// Read a parameter of the active binding.
    pub fn value(&self, key: &str) -> Result<Option<Value>, ControlError> {
        Ok(self.store.active()?.param(key).cloned())
    }

    /// Typed read: Number parameter.
    pub fn number(&self, key: &str) -> Result<Option<f64>, ControlError> {
        Ok(self.value(key)?.and_then(|v| v.as_number()))
    }

    /// Typed read: Boolean parameter.
    pub fn boolean(&self, key: &str) -> Result<Option<bool>, ControlError> {
        Ok(self.value(key)?.and_then(|v| v.as_boolean()))
    }

    /// Typed read: Color parameter.
    pub fn color(&self, key: &str) -> Result<Option<String>, ControlError> {
        Ok(self
            .store
            .active()?
            .param(key)
            .and_then(|v| v.as_color().map(str::to_string)))
    }

    /// Typed read: Effect parameter.
    pub fn effect(&self, key: &str) -> Result<Option<EffectFn>, ControlError> {
        Ok(self.store.active()?.param(key).and_then(|v| v.as_effect()))
    }

    /// Write a parameter of the active binding programmatically (or
    /// from a UI widget edit), refreshing the widget and firing the
    /// control's `on_change`.
    pub fn set_value(&mut self, key: &str, value: Value) -> Result<(), ControlError> {
        let name = self
            .store
            .active_name()
            .ok_or(ControlError::NoActiveBinding)?
            .to_string();
        self.write_value(&name, key, value);
        Ok(())
    }

    /// Invoke the effect stored at `key` on the active binding (the UI
    /// button-press analog of a hardware trigger). No-op if the key
    /// does not hold an effect.
    pub fn invoke_effect(&self, key: &str) -> Result<(), ControlError> {
        if let Some(effect) = self.store.active()?.param(key).and_then(|v| v.as_effect()) {
            (*effect)();
        }
        Ok(())
    }

    /// Send a feedback triple to the device. Silently no-ops when no
    /// transport is attached.
    pub fn send(&mut self, message_type: u8, control_id: u8, value: u8) {
        self.output.send(message_type, control_id, value);
    }

    /// Write a param on `name` and run the widget-refresh/on_change
    /// glue. Missing bindings are skipped (caller resolved the name
    /// moments ago; a miss means it was removed mid-call, which the
    /// single-threaded model rules out).
    pub(crate) fn write_value(&mut self, name: &str, key: &str, value: Value) {
        let Self { store, ui, .. } = self;
        let Some(binding) = store.get_mut(name) else {
            return;
        };
        binding.params.insert(key.to_string(), value.clone());
        Self::notify(ui, binding, key, &value);
    }

    /// Refresh the widget and fire `on_change` for one control.
    pub(crate) fn notify(
        ui: &mut Option<Box<dyn UiAdapter>>,
        binding: &mut Binding,
        key: &str,
        value: &Value,
    ) {
        let Some(hooks) = binding.hooks.get_mut(key) else {
            return;
        };
        if let (Some(ui), Some(widget)) = (ui.as_mut(), hooks.widget) {
            ui.refresh_widget(widget, value);
        }
        if let Some(on_change) = hooks.on_change.as_mut() {
            on_change(value);
        }
    }
}
