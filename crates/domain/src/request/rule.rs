//! Field validation rules.

use serde_json::Value;

/// A single constraint applied to one payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present, not null, not blank, not an empty array or object.
    Required,
    /// `null` is accepted and skips the remaining rules.
    Nullable,
    String,
    /// Integral number, or a string holding one.
    Integer,
    /// `true`/`false`, `0`/`1`, or their string forms.
    Boolean,
    /// Upper bound on string length (chars), numeric value, or array length.
    Max(usize),
}

impl Rule {
    /// Check `value` against this rule, returning the failure message.
    ///
    /// `value` is `None` when the field is absent from the payload.
    #[must_use]
    pub fn check(self, field: &str, value: Option<&Value>) -> Option<String> {
        let message = match self {
            Self::Nullable => return None,
            Self::Required if value.is_some_and(is_filled) => return None,
            Self::Required => format!("The {field} field is required."),
            Self::String if value.is_some_and(Value::is_string) => return None,
            Self::String => format!("The {field} field must be a string."),
            Self::Integer if value.is_some_and(is_integer) => return None,
            Self::Integer => format!("The {field} field must be an integer."),
            Self::Boolean if value.is_some_and(is_boolean) => return None,
            Self::Boolean => format!("The {field} field must be true or false."),
            Self::Max(max) if value.is_some_and(|v| within_max(v, max)) => return None,
            Self::Max(max) => format!("The {field} field must not be greater than {max}."),
        };
        Some(message)
    }
}

fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => s.trim().parse::<i64>().is_ok(),
        _ => false,
    }
}

fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::Number(n) => matches!(n.as_u64(), Some(0 | 1)),
        Value::String(s) => matches!(s.as_str(), "0" | "1" | "true" | "false"),
        _ => false,
    }
}

#[allow(clippy::cast_precision_loss)]
fn within_max(value: &Value, max: usize) -> bool {
    match value {
        Value::String(s) => s.chars().count() <= max,
        Value::Number(n) => n.as_f64().is_some_and(|n| n <= max as f64),
        Value::Array(items) => items.len() <= max,
        _ => false,
    }
}
