//! Named bindings and the store that owns them
//!
//! A binding is a switchable collection of parameters plus their
//! hardware trigger table. The store enforces name uniqueness and
//! tracks the single active binding; only the active binding's trigger
//! table is ever consulted by dispatch.

use std::collections::HashMap;

use crate::trigger::{TriggerAction, TriggerKey};
use crate::ui::{GroupHandle, WidgetHandle};
use crate::value::Value;
use crate::ControlError;

/// Per-control glue: the optional widget and the consumer's change
/// callback, keyed by parameter name.
pub(crate) struct ControlHooks {
    pub widget: Option<WidgetHandle>,
    pub on_change: Option<Box<dyn FnMut(&Value)>>,
}

/// One named collection of parameters and trigger mappings.
///
/// Created empty, populated exclusively through the `add_*` builders,
/// destroyed as a whole unit.
#[derive(Default)]
pub struct Binding {
    pub(crate) params: HashMap<String, Value>,
    pub(crate) triggers: HashMap<TriggerKey, TriggerAction>,
    pub(crate) hooks: HashMap<String, ControlHooks>,
    pub(crate) ui_group: Option<GroupHandle>,
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("params", &self.params)
            .field("triggers", &self.triggers)
            .finish_non_exhaustive()
    }
}

impl Binding {
    /// Read-only view of the trigger table (for inspection and tests).
    pub fn triggers(&self) -> &HashMap<TriggerKey, TriggerAction> {
        &self.triggers
    }

    /// Look up a parameter value.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }
}

/// Owns all bindings plus the active pointer.
///
/// Invariant: `active`, when set, always names an existing entry.
#[derive(Default)]
pub struct BindingStore {
    bindings: HashMap<String, Binding>,
    active: Option<String>,
}

impl BindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an empty binding and make it active.
    pub fn create(&mut self, name: &str, ui_group: Option<GroupHandle>) -> Result<(), ControlError> {
        if self.bindings.contains_key(name) {
            return Err(ControlError::DuplicateBinding(name.to_string()));
        }

        self.bindings.insert(
            name.to_string(),
            Binding {
                ui_group,
                ..Binding::default()
            },
        );
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Remove a binding, clearing the active pointer if it was the
    /// target. Returns the removed binding so the caller can release
    /// its UI group.
    pub fn remove(&mut self, name: &str) -> Result<Binding, ControlError> {
        if !self.bindings.contains_key(name) {
            return Err(ControlError::UnknownBinding(name.to_string()));
        }

        if self.active.as_deref() == Some(name) {
            self.active = None;
            log::debug!("removing active binding {name:?}, active binding is now none");
        }

        // Unwrap is fine: presence checked above.
        Ok(self.bindings.remove(name).unwrap())
    }

    /// Point dispatch at `name`. Idempotent when already active.
    pub fn activate(&mut self, name: &str) -> Result<(), ControlError> {
        if !self.bindings.contains_key(name) {
            return Err(ControlError::UnknownBinding(name.to_string()));
        }

        if self.active.as_deref() == Some(name) {
            return Ok(());
        }

        log::debug!("setting {name:?} as active binding");
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Clear the active pointer if `name` is the active binding.
    ///
    /// Deactivation is defensive: unknown or non-active names are a
    /// no-op, never an error.
    pub fn deactivate(&mut self, name: &str) {
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.bindings.get_mut(name)
    }

    pub fn active(&self) -> Result<&Binding, ControlError> {
        let name = self.active.as_deref().ok_or(ControlError::NoActiveBinding)?;
        Ok(&self.bindings[name])
    }

    pub fn active_mut(&mut self) -> Result<&mut Binding, ControlError> {
        let name = self
            .active
            .clone()
            .ok_or(ControlError::NoActiveBinding)?;
        Ok(self.bindings.get_mut(&name).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_activates() {
        let mut store = BindingStore::new();
        store.create("main", None).unwrap();
        assert_eq!(store.active_name(), Some("main"));
    }

    #[test]
    fn duplicate_create_fails_without_mutation() {
        let mut store = BindingStore::new();
        store.create("main", None).unwrap();
        store.create("other", None).unwrap();

        let err = store.create("main", None).unwrap_err();
        assert!(matches!(err, ControlError::DuplicateBinding(ref n) if n == "main"));
        // active pointer untouched by the failed call
        assert_eq!(store.active_name(), Some("other"));
    }

    #[test]
    fn remove_unknown_fails() {
        let mut store = BindingStore::new();
        let err = store.remove("ghost").unwrap_err();
        assert!(matches!(err, ControlError::UnknownBinding(_)));
    }

    #[test]
    fn remove_active_clears_pointer() {
        let mut store = BindingStore::new();
        store.create("main", None).unwrap();
        store.remove("main").unwrap();

        assert_eq!(store.active_name(), None);
        assert!(matches!(
            store.active().unwrap_err(),
            ControlError::NoActiveBinding
        ));
    }

    #[test]
    fn remove_inactive_keeps_active() {
        let mut store = BindingStore::new();
        store.create("a", None).unwrap();
        store.create("b", None).unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.active_name(), Some("b"));
    }

    #[test]
    fn activate_switches_and_is_idempotent() {
        let mut store = BindingStore::new();
        store.create("a", None).unwrap();
        store.create("b", None).unwrap();
        assert_eq!(store.active_name(), Some("b"));

        store.activate("a").unwrap();
        assert_eq!(store.active_name(), Some("a"));
        store.activate("a").unwrap();
        assert_eq!(store.active_name(), Some("a"));

        assert!(matches!(
            store.activate("ghost").unwrap_err(),
            ControlError::UnknownBinding(_)
        ));
        assert_eq!(store.active_name(), Some("a"));
    }

    #[test]
    fn deactivate_is_defensive() {
        let mut store = BindingStore::new();
        store.create("a", None).unwrap();

        // unknown and non-active names are no-ops
        store.deactivate("ghost");
        assert_eq!(store.active_name(), Some("a"));

        store.deactivate("a");
        assert_eq!(store.active_name(), None);
        store.deactivate("a");
        assert_eq!(store.active_name(), None);
    }
}
