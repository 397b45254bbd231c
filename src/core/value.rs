// value.rs - Dynamic configuration values and groups

use std::collections::HashMap;
use std::fmt;

use crate::error::{BridgeError, ValueType};

/// Dynamically typed scalar supplied by an embedding host.
///
/// Only scalars exist at this level; nesting is expressed by the named
/// groups that carry these values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    Float(f32),
    Text(String),
}

impl ConfigValue {
    /// Truth value of the scalar. Every scalar carries one: numbers are
    /// true when non-zero, text when non-empty.
    pub fn truthy(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Int(i) => *i != 0,
            ConfigValue::Double(d) => *d != 0.0,
            ConfigValue::Float(x) => *x != 0.0,
            ConfigValue::Text(s) => !s.is_empty(),
        }
    }

    fn as_int(&self) -> Option<i32> {
        match self {
            ConfigValue::Int(i) => i32::try_from(*i).ok(),
            ConfigValue::Bool(b) => Some(i32::from(*b)),
            _ => None,
        }
    }

    fn as_double(&self) -> Option<f64> {
        match self {
            ConfigValue::Double(d) => Some(*d),
            ConfigValue::Float(x) => Some(f64::from(*x)),
            ConfigValue::Int(i) => Some(*i as f64),
            ConfigValue::Bool(b) => Some(f64::from(u8::from(*b))),
            ConfigValue::Text(_) => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    /// Host-side string form, used when raw arguments are appended to the
    /// synthesized command line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::Double(d) => write!(f, "{}", d),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Named bundle of options supplied by the caller.
///
/// Missing keys are not an error anywhere in the bridge: an absent option
/// leaves the corresponding engine default unchanged.
#[derive(Debug, Clone, Default)]
pub struct ConfigGroup {
    values: HashMap<String, ConfigValue>,
}

impl ConfigGroup {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Truth value of the key. Never a type mismatch for the scalar set,
    /// since every scalar carries a truth value.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, BridgeError> {
        Ok(self.values.get(key).map(ConfigValue::truthy))
    }

    /// Integer value of the key. Booleans coerce to 0/1; a value outside
    /// the i32 range is a mismatch, not a truncation.
    pub fn get_int(&self, key: &str) -> Result<Option<i32>, BridgeError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_int()
                .map(Some)
                .ok_or_else(|| BridgeError::TypeMismatch {
                    key: key.to_string(),
                    expected: ValueType::Int,
                }),
        }
    }

    /// Double-precision value of the key. Integers and booleans widen.
    pub fn get_double(&self, key: &str) -> Result<Option<f64>, BridgeError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_double()
                .map(Some)
                .ok_or_else(|| BridgeError::TypeMismatch {
                    key: key.to_string(),
                    expected: ValueType::Double,
                }),
        }
    }

    /// Single-precision value of the key, narrowed from the double rule.
    pub fn get_float(&self, key: &str) -> Result<Option<f32>, BridgeError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_double()
                .map(|d| Some(d as f32))
                .ok_or_else(|| BridgeError::TypeMismatch {
                    key: key.to_string(),
                    expected: ValueType::Float,
                }),
        }
    }

    /// Owned text value of the key. Only text coerces.
    pub fn get_text(&self, key: &str) -> Result<Option<String>, BridgeError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_text()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| BridgeError::TypeMismatch {
                    key: key.to_string(),
                    expected: ValueType::Text,
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BridgeError, ValueType};

    fn group() -> ConfigGroup {
        let mut g = ConfigGroup::new();
        g.insert("flag", ConfigValue::Bool(true));
        g.insert("count", ConfigValue::Int(20));
        g.insert("weight", ConfigValue::Double(0.8));
        g.insert("ratio", ConfigValue::Float(0.5));
        g.insert("name", ConfigValue::Text("wag".to_string()));
        g
    }

    #[test]
    fn test_matching_types_coerce_exactly() {
        let g = group();
        assert_eq!(g.get_bool("flag").unwrap(), Some(true));
        assert_eq!(g.get_int("count").unwrap(), Some(20));
        assert_eq!(g.get_double("weight").unwrap(), Some(0.8));
        assert_eq!(g.get_float("ratio").unwrap(), Some(0.5));
        assert_eq!(g.get_text("name").unwrap(), Some("wag".to_string()));
    }

    #[test]
    fn test_absent_keys_are_not_errors() {
        let g = group();
        assert_eq!(g.get_bool("missing").unwrap(), None);
        assert_eq!(g.get_int("missing").unwrap(), None);
        assert_eq!(g.get_text("missing").unwrap(), None);

        let empty = ConfigGroup::new();
        assert!(empty.is_empty());
        assert_eq!(empty.get_int("count").unwrap(), None);
    }

    #[test]
    fn test_mismatched_types_fail_with_key_and_type() {
        let g = group();
        assert_eq!(
            g.get_int("name"),
            Err(BridgeError::TypeMismatch {
                key: "name".to_string(),
                expected: ValueType::Int,
            })
        );
        assert_eq!(
            g.get_double("name"),
            Err(BridgeError::TypeMismatch {
                key: "name".to_string(),
                expected: ValueType::Double,
            })
        );
        assert_eq!(
            g.get_text("count"),
            Err(BridgeError::TypeMismatch {
                key: "count".to_string(),
                expected: ValueType::Text,
            })
        );
    }

    #[test]
    fn test_numeric_widening_and_narrowing() {
        let mut g = ConfigGroup::new();
        g.insert("n", ConfigValue::Int(4));
        g.insert("b", ConfigValue::Bool(true));
        assert_eq!(g.get_double("n").unwrap(), Some(4.0));
        assert_eq!(g.get_float("n").unwrap(), Some(4.0));
        assert_eq!(g.get_int("b").unwrap(), Some(1));
        assert_eq!(g.get_double("b").unwrap(), Some(1.0));
    }

    #[test]
    fn test_integer_overflow_is_a_mismatch() {
        let mut g = ConfigGroup::new();
        g.insert("big", ConfigValue::Int(i64::from(i32::MAX) + 1));
        assert_eq!(
            g.get_int("big"),
            Err(BridgeError::TypeMismatch {
                key: "big".to_string(),
                expected: ValueType::Int,
            })
        );
    }

    #[test]
    fn test_truthiness_spans_all_scalars() {
        let mut g = ConfigGroup::new();
        g.insert("zero", ConfigValue::Int(0));
        g.insert("one", ConfigValue::Int(1));
        g.insert("empty", ConfigValue::Text(String::new()));
        g.insert("word", ConfigValue::Text("x".to_string()));
        assert_eq!(g.get_bool("zero").unwrap(), Some(false));
        assert_eq!(g.get_bool("one").unwrap(), Some(true));
        assert_eq!(g.get_bool("empty").unwrap(), Some(false));
        assert_eq!(g.get_bool("word").unwrap(), Some(true));
    }

    #[test]
    fn test_display_is_the_host_string_form() {
        assert_eq!(ConfigValue::Int(1).to_string(), "1");
        assert_eq!(ConfigValue::Text("two".to_string()).to_string(), "two");
        assert_eq!(ConfigValue::Double(3.5).to_string(), "3.5");
        assert_eq!(ConfigValue::Bool(false).to_string(), "false");
    }
}
