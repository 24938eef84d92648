//! Typed parameter values
//!
//! A binding's parameter map stores one [`Value`] per key. Number,
//! Boolean and Color are read back by consumers; Effect holds a
//! zero-argument callback that is invoked rather than read.

use std::fmt;
use std::rc::Rc;

/// Zero-argument side-effecting callback stored as a parameter.
///
/// `Rc` because the engine is single-threaded and the same effect is
/// reachable from both the trigger table and the parameter map.
pub type EffectFn = Rc<dyn Fn()>;

/// A bound parameter value.
#[derive(Clone)]
pub enum Value {
    /// Continuous value with an associated range on its control.
    Number(f64),
    /// On/off state.
    Boolean(bool),
    /// Opaque color string, e.g. `"#ff00ffff"`.
    Color(String),
    /// Callback fired by a hardware trigger or UI button.
    Effect(EffectFn),
}

impl Value {
    /// Wrap a callback as an effect value.
    pub fn effect(f: impl Fn() + 'static) -> Self {
        Value::Effect(Rc::new(f))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&str> {
        match self {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_effect(&self) -> Option<EffectFn> {
        match self {
            Value::Effect(f) => Some(f.clone()),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => f.debug_tuple("Number").field(v).finish(),
            Value::Boolean(v) => f.debug_tuple("Boolean").field(v).finish(),
            Value::Color(c) => f.debug_tuple("Color").field(c).finish(),
            Value::Effect(_) => f.write_str("Effect(..)"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn typed_accessors() {
        assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
        assert_eq!(Value::Number(1.5).as_boolean(), None);
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(
            Value::Color("#11223344".into()).as_color(),
            Some("#11223344")
        );
    }

    #[test]
    fn effect_is_invocable_through_clone() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let v = Value::effect(move || counter.set(counter.get() + 1));

        let f = v.as_effect().unwrap();
        (*f)();
        (*f)();
        assert_eq!(hits.get(), 2);
    }
}
