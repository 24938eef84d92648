//! UI adapter capability
//!
//! The engine is fully usable with no UI attached; when an adapter is
//! injected it mirrors each binding as a widget group. Handles are
//! opaque ids minted by the adapter — the engine only stores and
//! returns them.
//!
//! User edits flow back into the engine through [`Surface::set_value`]
//! and [`Surface::invoke_effect`] rather than adapter-held callbacks,
//! keeping the adapter a pure create/refresh/remove capability.
//!
//! [`Surface::set_value`]: crate::Surface::set_value
//! [`Surface::invoke_effect`]: crate::Surface::invoke_effect

use crate::value::Value;

/// Opaque handle for a binding's widget group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupHandle(pub u64);

/// Opaque handle for a single control's widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetHandle(pub u64);

/// How a control's widget should present itself.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetLayout {
    /// Number control: bounded slider with step used for display
    /// quantization only.
    Slider { min: f64, max: f64, step: f64 },
    /// Boolean control.
    Checkbox,
    /// Color control (with alpha).
    ColorPicker,
    /// Effect control: a push button.
    Button,
}

/// Panel renderer capability.
///
/// Every method may be a no-op; `create_group`/`create_widget` return
/// `None` when the adapter chooses not to render (the engine then
/// skips refreshes for that control).
pub trait UiAdapter {
    /// Create a widget group for a newly created binding.
    fn create_group(&mut self, title: &str) -> Option<GroupHandle>;

    /// Create a widget for one control inside a group.
    fn create_widget(
        &mut self,
        group: GroupHandle,
        key: &str,
        initial: &Value,
        layout: &WidgetLayout,
    ) -> Option<WidgetHandle>;

    /// Re-sync a widget's display after a programmatic value change.
    fn refresh_widget(&mut self, widget: WidgetHandle, value: &Value);

    /// Remove a group and all its widgets (binding removal).
    fn remove_group(&mut self, group: GroupHandle);
}
