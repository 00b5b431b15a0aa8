//! Payload data supplied to `construct` and returned by `extract`.

use crate::Value;

/// The data carried by one variant instance.
///
/// `Named` fields may be supplied in any order. Equality on named payloads
/// ignores order: each side's fields must be found, with equal values, in
/// the other.
#[derive(Clone, Debug)]
pub enum Payload {
    /// No data.
    Unit,
    /// Fields by position.
    Positional(Vec<Value>),
    /// Fields by name.
    Named(Vec<(String, Value)>),
}

impl Payload {
    /// Build a positional payload.
    pub fn positional<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Payload::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Build a named payload from `(field, value)` pairs.
    pub fn named<N: Into<String>, V: Into<Value>>(fields: impl IntoIterator<Item = (N, V)>) -> Self {
        Payload::Named(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Short name of the payload kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Payload::Unit => "unit",
            Payload::Positional(_) => "positional",
            Payload::Named(_) => "named",
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        match self {
            Payload::Unit => 0,
            Payload::Positional(values) => values.len(),
            Payload::Named(fields) => fields.len(),
        }
    }

    /// Check if the payload carries no fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positional field by index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Payload::Positional(values) => values.get(index),
            _ => None,
        }
    }

    /// Named field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Payload::Named(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Consume the payload, yielding field values in stored order.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Payload::Unit => Vec::new(),
            Payload::Positional(values) => values,
            Payload::Named(fields) => fields.into_iter().map(|(_, v)| v).collect(),
        }
    }
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Payload::Unit, Payload::Unit) => true,
            (Payload::Positional(a), Payload::Positional(b)) => a == b,
            (Payload::Named(a), Payload::Named(b)) => {
                a.len() == b.len() && named_subset(a, other) && named_subset(b, self)
            }
            _ => false,
        }
    }
}

fn named_subset(fields: &[(String, Value)], other: &Payload) -> bool {
    fields
        .iter()
        .all(|(name, value)| other.field(name).is_some_and(|v| v == value))
}
