//! Names bound by the arm that fired.

use std::sync::Arc;

use smallvec::SmallVec;
use sumi_value::{Value, VariantValue};

use crate::MatchError;

/// The bindings an arm body sees.
///
/// Lookups are by binding name. Typed getters return an error instead of
/// panicking when the name is unbound or holds a different kind of value.
#[derive(Clone, Debug)]
pub struct Bindings {
    variant: &'static str,
    slots: SmallVec<[(Arc<str>, Value); 4]>,
}

impl Bindings {
    pub(crate) fn new(variant: &'static str) -> Self {
        Bindings {
            variant,
            slots: SmallVec::new(),
        }
    }

    pub(crate) fn push(&mut self, name: Arc<str>, value: Value) {
        self.slots.push((name, value));
    }

    /// Name of the variant whose arm fired.
    ///
    /// For a wildcard arm this is the variant the value actually holds.
    #[inline]
    pub fn matched_variant(&self) -> &'static str {
        self.variant
    }

    /// Number of bound names.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if nothing is bound.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Bound names, in binder order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(|(name, _)| &**name)
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slots
            .iter()
            .find(|(bound, _)| &**bound == name)
            .map(|(_, value)| value)
    }

    /// Look up a binding, or fail with `UnboundName`.
    pub fn value(&self, name: &str) -> Result<&Value, MatchError> {
        self.get(name).ok_or_else(|| unbound(name))
    }

    /// Move a binding out.
    pub fn take(&mut self, name: &str) -> Result<Value, MatchError> {
        let pos = self
            .slots
            .iter()
            .position(|(bound, _)| &**bound == name)
            .ok_or_else(|| unbound(name))?;
        Ok(self.slots.swap_remove(pos).1)
    }

    pub fn int(&self, name: &str) -> Result<i64, MatchError> {
        self.typed(name, "int", Value::as_int)
    }

    pub fn byte(&self, name: &str) -> Result<u8, MatchError> {
        self.typed(name, "byte", Value::as_byte)
    }

    pub fn float(&self, name: &str) -> Result<f64, MatchError> {
        self.typed(name, "float", Value::as_float)
    }

    pub fn bool(&self, name: &str) -> Result<bool, MatchError> {
        self.typed(name, "bool", Value::as_bool)
    }

    pub fn text(&self, name: &str) -> Result<&str, MatchError> {
        self.typed(name, "text", Value::as_text)
    }

    pub fn variant(&self, name: &str) -> Result<&VariantValue, MatchError> {
        self.typed(name, "variant", Value::as_variant)
    }

    fn typed<'s, T>(
        &'s self,
        name: &str,
        expected: &'static str,
        get: impl FnOnce(&'s Value) -> Option<T>,
    ) -> Result<T, MatchError> {
        let value = self.value(name)?;
        get(value).ok_or_else(|| MatchError::BindingType {
            name: name.to_string(),
            expected,
            found: value.type_name(),
        })
    }
}

fn unbound(name: &str) -> MatchError {
    MatchError::UnboundName {
        name: name.to_string(),
    }
}
