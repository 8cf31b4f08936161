//! Request payload envelope
//!
//! Clients send `{ "data": { ... } }`. Handlers only ever look at the inner
//! `data` object; a missing body, a missing `data` key or a non-object `data`
//! all behave as an empty object.

use serde_json::{Map, Value};

/// The `data` object of a request body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    data: Map<String, Value>,
}

impl Payload {
    /// Build a payload from a full request body
    pub fn from_body(body: Value) -> Self {
        let data = match body {
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Object(data)) => data,
                _ => Map::new(),
            },
            _ => Map::new(),
        };
        Self { data }
    }

    /// An empty payload, as if no body had been sent
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a field of `data`
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// The inner `data` object
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

impl From<Value> for Payload {
    fn from(body: Value) -> Self {
        Self::from_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_extracts_data() {
        let payload = Payload::from_body(json!({ "data": { "name": "Soup" } }));
        assert_eq!(payload.get("name"), Some(&json!("Soup")));
    }

    #[test]
    fn test_missing_data_is_empty() {
        let payload = Payload::from_body(json!({ "name": "Soup" }));
        assert!(payload.data().is_empty());
    }

    #[test]
    fn test_non_object_data_is_empty() {
        assert!(Payload::from_body(json!({ "data": null })).data().is_empty());
        assert!(Payload::from_body(json!({ "data": "x" })).data().is_empty());
        assert!(Payload::from_body(json!({ "data": [1, 2] })).data().is_empty());
    }

    #[test]
    fn test_non_object_body_is_empty() {
        assert!(Payload::from_body(json!(42)).data().is_empty());
        assert_eq!(Payload::from_body(Value::Null), Payload::empty());
    }
}
