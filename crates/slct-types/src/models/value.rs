//! Value identity for option values.

use std::fmt;
use std::sync::Arc;

/// Opaque value carried by a [`SelectOption`](super::SelectOption).
///
/// `key` is the stable string identity of a value. It is what the widget
/// compares by default, what it uses as the DOM key of rendered entries, and
/// what it writes into the `value` attribute of the hidden native `<select>`.
pub trait OptionValue: Clone + fmt::Debug {
    /// Stable string identity of this value.
    fn key(&self) -> String;
}

impl OptionValue for String {
    fn key(&self) -> String {
        self.clone()
    }
}

impl OptionValue for &'static str {
    fn key(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! impl_option_value_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OptionValue for $ty {
                fn key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_option_value_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char);

/// JSON values use their raw contents for strings and compact JSON otherwise.
/// `"red"` keys as `red`, and `"1"` and `1` both key as `1`, so they compare
/// equal under [`ValueEq::Key`].
impl OptionValue for serde_json::Value {
    fn key(&self) -> String {
        match self {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Equality used to match selected values against options.
///
/// Defaults to comparing [`OptionValue::key`]. Hosts whose values carry a
/// natural identity field can pass a custom comparator instead.
pub enum ValueEq<V> {
    /// Compare by [`OptionValue::key`]
    Key,
    /// Caller-supplied comparator
    Custom(Arc<dyn Fn(&V, &V) -> bool + Send + Sync>),
}

impl<V: OptionValue> ValueEq<V> {
    /// Build a comparator from a closure.
    pub fn custom(f: impl Fn(&V, &V) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Whether `a` and `b` identify the same option.
    pub fn same(&self, a: &V, b: &V) -> bool {
        match self {
            Self::Key => a.key() == b.key(),
            Self::Custom(f) => f(a, b),
        }
    }
}

impl<V> Clone for ValueEq<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Key => Self::Key,
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
        }
    }
}

impl<V> Default for ValueEq<V> {
    fn default() -> Self {
        Self::Key
    }
}

impl<V> fmt::Debug for ValueEq<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "ValueEq::Key"),
            Self::Custom(_) => write!(f, "ValueEq::Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_keys() {
        assert_eq!(json!("red").key(), "red");
        assert_eq!(json!(1).key(), "1");
        assert_eq!(json!({"id": 3}).key(), r#"{"id":3}"#);
        assert_eq!(json!(null).key(), "null");
    }

    #[test]
    fn test_json_string_and_number_collide() {
        assert_eq!(json!("1").key(), json!(1).key());
        assert!(ValueEq::Key.same(&json!("1"), &json!(1)));
        let strict = ValueEq::custom(|a: &serde_json::Value, b: &serde_json::Value| a == b);
        assert!(!strict.same(&json!("1"), &json!(1)));
    }

    #[test]
    fn test_key_comparator() {
        let eq = ValueEq::<i32>::Key;
        assert!(eq.same(&4, &4));
        assert!(!eq.same(&4, &5));
    }

    #[test]
    fn test_custom_comparator() {
        let eq = ValueEq::custom(|a: &serde_json::Value, b: &serde_json::Value| a["id"] == b["id"]);
        assert!(eq.same(&json!({"id": 1, "name": "a"}), &json!({"id": 1, "name": "b"})));
        assert!(!eq.same(&json!({"id": 1}), &json!({"id": 2})));
    }
}
