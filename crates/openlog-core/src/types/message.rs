//! Log message values

use serde::Serialize;
use serde_json::Value;

use crate::error::LoggerResult;

/// A loggable value
///
/// Messages and positionals are rendered with [`Message::serialize`],
/// whose rules are fixed per variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Plain text, rendered unchanged
    Text(String),
    /// Structured data (objects, arrays), rendered as compact JSON
    Data(Value),
    /// Absent value, rendered as `undefined`
    Undefined,
    /// Explicit null, rendered as `null`
    Null,
    /// Any other scalar, already in its default string form
    Scalar(String),
}

impl Message {
    /// Build a message from any serializable value
    ///
    /// Fails only when `serde_json` cannot represent the value.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> LoggerResult<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Render this value as log text. Never fails.
    pub fn serialize(&self) -> String {
        match self {
            Message::Text(text) => text.clone(),
            Message::Data(value) => value.to_string(),
            Message::Undefined => "undefined".to_string(),
            Message::Null => "null".to_string(),
            Message::Scalar(text) => text.clone(),
        }
    }

    /// Numeric view used by `%d`/`%i`/`%f` directives
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            Message::Scalar(text) | Message::Text(text) => text.trim().parse().ok(),
            Message::Data(Value::Number(n)) => n.as_f64(),
            Message::Null => Some(0.0),
            _ => None,
        }
    }
}

/// Render any message-like value
pub fn serialize(value: impl Into<Message>) -> String {
    value.into().serialize()
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Message::Null,
            Value::String(text) => Message::Text(text),
            Value::Bool(b) => Message::Scalar(b.to_string()),
            Value::Number(n) => Message::Scalar(n.to_string()),
            data @ (Value::Array(_) | Value::Object(_)) => Message::Data(data),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<()> for Message {
    fn from(_: ()) -> Self {
        Message::Undefined
    }
}

impl<T: Into<Message>> From<Option<T>> for Message {
    fn from(value: Option<T>) -> Self {
        value.map_or(Message::Undefined, Into::into)
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Message {
                fn from(value: $ty) -> Self {
                    Message::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

impl From<f64> for Message {
    fn from(value: f64) -> Self {
        Message::Scalar(format_number(value))
    }
}

/// Number formatting that agrees with JavaScript for the common cases
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_rules() {
        assert_eq!(serialize(()), "undefined");
        assert_eq!(serialize(None::<&str>), "undefined");
        assert_eq!(serialize(Value::Null), "null");
        assert_eq!(serialize("x"), "x");
        assert_eq!(serialize(json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(serialize(json!([1, "two"])), r#"[1,"two"]"#);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(serialize(42), "42");
        assert_eq!(serialize(true), "true");
        assert_eq!(serialize(1.5), "1.5");
        assert_eq!(serialize(f64::NAN), "NaN");
        assert_eq!(serialize(json!(3)), "3");
    }

    #[test]
    fn test_json_string_is_text() {
        assert_eq!(Message::from(json!("quoted")), Message::Text("quoted".to_string()));
        assert_eq!(serialize(json!("quoted")), "quoted");
    }

    #[test]
    fn test_structured() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let message = Message::structured(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(message.serialize(), r#"{"x":1,"y":2}"#);

        let text = Message::structured("plain").unwrap();
        assert_eq!(text, Message::Text("plain".to_string()));
    }

    #[test]
    fn test_structured_failure_propagates() {
        use std::collections::HashMap;

        // Non-string map keys cannot be encoded as JSON object keys
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");
        assert!(Message::structured(&map).is_err());
    }
}
