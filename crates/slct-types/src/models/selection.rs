//! Current selection as owned by the host application.

use serde::{Deserialize, Serialize};

use super::value::{OptionValue, ValueEq};

/// The value of a select widget.
///
/// The host owns the selection; the widget only reads it and proposes a new
/// one through its change notification.
///
/// Serialized untagged: `null`, a single value, or an array of values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Selection<V> {
    /// Nothing selected
    Empty,
    /// Ordered list of values (multi mode, or a normalized non-singleton change)
    Many(Vec<V>),
    /// Exactly one value
    One(V),
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<V> From<Option<V>> for Selection<V> {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Empty, Self::One)
    }
}

impl<V> From<Vec<V>> for Selection<V> {
    fn from(values: Vec<V>) -> Self {
        Self::Many(values)
    }
}

impl<V> Selection<V> {
    /// Normalize a list of values the way change notifications report them:
    /// exactly one value unwraps to [`Selection::One`], any other count stays a list.
    pub fn from_values(mut values: Vec<V>) -> Self {
        if values.len() == 1 {
            if let Some(v) = values.pop() {
                return Self::One(v);
            }
        }
        Self::Many(values)
    }

    /// All selected values regardless of variant.
    pub fn values(&self) -> Vec<&V> {
        match self {
            Self::Empty => Vec::new(),
            Self::One(v) => vec![v],
            Self::Many(vs) => vs.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Many(vs) => vs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First selected value, used by single-mode lookups.
    pub fn first(&self) -> Option<&V> {
        match self {
            Self::Empty => None,
            Self::One(v) => Some(v),
            Self::Many(vs) => vs.first(),
        }
    }
}

impl<V: OptionValue> Selection<V> {
    pub fn contains(&self, value: &V, eq: &ValueEq<V>) -> bool {
        self.values().into_iter().any(|v| eq.same(v, value))
    }

    /// Values with `value` appended, unless it is already selected.
    pub fn appended(&self, value: V, eq: &ValueEq<V>) -> Vec<V> {
        let mut values: Vec<V> = self.values().into_iter().cloned().collect();
        if !values.iter().any(|v| eq.same(v, &value)) {
            values.push(value);
        }
        values
    }

    /// Values with every occurrence of `value` removed.
    pub fn without(&self, value: &V, eq: &ValueEq<V>) -> Vec<V> {
        self.values()
            .into_iter()
            .filter(|v| !eq.same(v, value))
            .cloned()
            .collect()
    }

    /// Keys of all selected values, in order.
    pub fn keys(&self) -> Vec<String> {
        self.values().into_iter().map(OptionValue::key).collect()
    }
}
