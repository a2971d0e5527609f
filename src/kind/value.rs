//! Scalar values handed to kind detection

/// A dynamically typed scalar supplied by the caller
///
/// The variant reflects the caller's native type; text content is only
/// inspected when sniffing is requested. Values are borrowed and never
/// retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue<'a> {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'a str),
    /// Anything without a scalar kind (null, arrays, objects, unsigned
    /// integers beyond `i64`)
    Unsupported,
}

impl From<bool> for ScalarValue<'_> {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ScalarValue<'_> {
                fn from(value: $ty) -> Self {
                    ScalarValue::Int(i64::from(value))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);

impl From<isize> for ScalarValue<'_> {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        ScalarValue::Int(value as i64)
    }
}

impl From<f32> for ScalarValue<'_> {
    fn from(value: f32) -> Self {
        ScalarValue::Float(f64::from(value))
    }
}

impl From<f64> for ScalarValue<'_> {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl<'a> From<&'a str> for ScalarValue<'a> {
    fn from(value: &'a str) -> Self {
        ScalarValue::Text(value)
    }
}

impl<'a> From<&'a String> for ScalarValue<'a> {
    fn from(value: &'a String) -> Self {
        ScalarValue::Text(value.as_str())
    }
}

impl<'a> From<&'a serde_json::Value> for ScalarValue<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => ScalarValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ScalarValue::Int(i)
                } else if n.is_u64() {
                    ScalarValue::Unsupported
                } else {
                    n.as_f64()
                        .map(ScalarValue::Float)
                        .unwrap_or(ScalarValue::Unsupported)
                }
            }
            serde_json::Value::String(s) => ScalarValue::Text(s.as_str()),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => ScalarValue::Unsupported,
        }
    }
}
