//! # Validation Error Tree
//!
//! A failed form submission comes back as a nested payload: a single
//! message, a list of messages, or a mapping from field name to more of
//! the same. [`Errors`] gives that payload a uniform shape and lets
//! nested view code address the sub-error for its own control by dotted
//! field path, e.g. `errors.field("members.0.name")`.
//!
//! A node's own direct message(s) live under the distinguished `"_"` key,
//! separate from its children. Scalar and list payloads are wrapped as
//! `{"_": value}` on construction so every node is a mapping.
//!
//! The tree is built once from a failed request and never mutated.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// One node's worth of error payload: a leaf message, a leaf message
/// list, or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorValue {
    /// A single message.
    Message(String),
    /// A list of messages for the same field.
    Messages(Vec<String>),
    /// Sub-errors keyed by field name.
    Nested(BTreeMap<String, ErrorValue>),
}

impl From<Value> for ErrorValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Message(text),
            Value::Array(items) => Self::Messages(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(text) => text,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            Value::Object(fields) => Self::Nested(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, value.into()))
                    .collect(),
            ),
            other => Self::Message(other.to_string()),
        }
    }
}

impl From<&str> for ErrorValue {
    fn from(text: &str) -> Self {
        Self::Message(text.to_string())
    }
}

impl From<String> for ErrorValue {
    fn from(text: String) -> Self {
        Self::Message(text)
    }
}

/// A nested validation/error payload, addressable by dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors {
    node: BTreeMap<String, ErrorValue>,
}

impl Errors {
    /// Build a tree from a raw payload, wrapping leaf payloads as
    /// `{"_": value}`.
    pub fn new(payload: impl Into<ErrorValue>) -> Self {
        match payload.into() {
            ErrorValue::Nested(node) => Self { node },
            leaf => Self {
                node: BTreeMap::from([("_".to_string(), leaf)]),
            },
        }
    }

    /// Descend to the sub-error addressed by a dotted `path`.
    ///
    /// Returns `None` as soon as a segment is absent. A scalar/list value
    /// stops the descent: the leaf is wrapped and returned and any
    /// remaining segments are ignored, since a leaf has no nested fields
    /// to resolve them against.
    pub fn field(&self, path: &str) -> Option<Errors> {
        let mut node = &self.node;
        for segment in path.split('.') {
            match node.get(segment)? {
                ErrorValue::Nested(child) => node = child,
                leaf => return Some(Errors::new(leaf.clone())),
            }
        }
        Some(Errors { node: node.clone() })
    }

    /// This node's own direct message(s), independent of its children.
    pub fn value(&self) -> Option<&ErrorValue> {
        self.node.get("_")
    }

    /// The direct message as a single string. Only scalar leaves yield a
    /// value; list leaves go through [`Errors::as_array`].
    pub fn as_string(&self) -> Option<&str> {
        match self.value()? {
            ErrorValue::Message(text) => Some(text),
            _ => None,
        }
    }

    /// The direct message(s) coerced to a list, wrapping a scalar as one
    /// element.
    pub fn as_array(&self) -> Option<Vec<String>> {
        match self.value()? {
            ErrorValue::Message(text) => Some(vec![text.clone()]),
            ErrorValue::Messages(texts) => Some(texts.clone()),
            ErrorValue::Nested(_) => None,
        }
    }

    /// Last-resort description: the direct message if there is a scalar
    /// one, otherwise a structural dump of the whole node.
    pub fn desc(&self) -> String {
        match self.as_string() {
            Some(text) => text.to_string(),
            None => serde_json::to_string(&self.node).unwrap_or_default(),
        }
    }
}

/// An HTTP-style failure as seen at the transport boundary.
///
/// `Display` renders the synthetic top-level message used for
/// non-validation failures, so a response can be bubbled as an error
/// directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP request failed ({code}): {message}")]
pub struct ErrorResponse {
    /// HTTP status code.
    pub code: u16,
    /// Status reason text.
    pub message: String,
    /// Structured body of a validation failure, if any.
    pub payload: Option<ErrorValue>,
}

impl ErrorResponse {
    /// A response with no structured payload.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            payload: None,
        }
    }

    /// Attach the structured body of a validation failure.
    pub fn with_payload(mut self, payload: impl Into<ErrorValue>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}

/// Convert a settled response into an error tree.
///
/// Successful-looking codes (`< 400`) produce no tree. Client-validation
/// codes (400, 422) produce a tree from the structured payload. Any other
/// failure produces a single synthetic message naming the code and reason
/// text; a 400/422 that arrived without a payload degrades to the same.
pub fn errors_from_response(response: &ErrorResponse) -> Option<Errors> {
    if response.code < 400 {
        return None;
    }

    match (response.code, &response.payload) {
        (400 | 422, Some(payload)) => Some(Errors::new(payload.clone())),
        _ => Some(Errors::new(response.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested(payload: Value) -> Errors {
        Errors::new(ErrorValue::from(payload))
    }

    #[test]
    fn scalar_field_round_trip() {
        let errors = nested(json!({"name": "required"}));
        assert_eq!(errors.field("name").unwrap().as_string(), Some("required"));
    }

    #[test]
    fn dotted_path_descends() {
        let errors = nested(json!({"name": {"first": ["too short"]}}));
        assert_eq!(
            errors.field("name.first").unwrap().as_array(),
            Some(vec!["too short".to_string()])
        );
    }

    #[test]
    fn absent_segment_is_none() {
        let errors = nested(json!({"name": "required"}));
        assert!(errors.field("email").is_none());
        assert!(errors.field("name.first.deeper").is_some()); // leaf stops the walk
    }

    #[test]
    fn leaf_stops_descent_and_wraps() {
        let errors = nested(json!({"name": "required"}));
        let leaf = errors.field("name.anything").unwrap();
        assert_eq!(leaf.as_string(), Some("required"));
    }

    #[test]
    fn scalar_payload_wraps_under_underscore() {
        let errors = Errors::new("bad request");
        assert!(errors.field("anything").is_none());
        assert_eq!(errors.desc(), "bad request");
        assert_eq!(errors.as_array(), Some(vec!["bad request".to_string()]));
    }

    #[test]
    fn own_message_is_distinct_from_children() {
        let errors = nested(json!({
            "_": "fix the member list",
            "members": {"0": {"name": "required"}}
        }));
        assert_eq!(errors.as_string(), Some("fix the member list"));
        assert_eq!(
            errors.field("members.0.name").unwrap().as_string(),
            Some("required")
        );
    }

    #[test]
    fn as_string_is_none_for_list_leaves() {
        let errors = nested(json!({"_": ["a", "b"]}));
        assert_eq!(errors.as_string(), None);
        assert_eq!(
            errors.as_array(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn desc_dumps_structure_when_no_scalar_message() {
        let errors = nested(json!({"name": "required"}));
        assert_eq!(errors.desc(), r#"{"name":"required"}"#);
    }

    #[test]
    fn successful_codes_produce_no_tree() {
        assert!(errors_from_response(&ErrorResponse::new(200, "OK")).is_none());
        assert!(errors_from_response(&ErrorResponse::new(302, "Found")).is_none());
    }

    #[test]
    fn server_failures_become_a_synthetic_message() {
        let errors = errors_from_response(&ErrorResponse::new(404, "Not Found")).unwrap();
        let desc = errors.desc();
        assert!(desc.contains("404"));
        assert!(desc.contains("Not Found"));
    }

    #[test]
    fn validation_failures_keep_their_structure() {
        let response = ErrorResponse::new(422, "Unprocessable Entity")
            .with_payload(ErrorValue::from(json!({"name": "required"})));
        let errors = errors_from_response(&response).unwrap();
        assert_eq!(errors.field("name").unwrap().as_string(), Some("required"));
    }

    #[test]
    fn payloadless_validation_failure_degrades_to_synthetic() {
        let errors = errors_from_response(&ErrorResponse::new(400, "Bad Request")).unwrap();
        assert!(errors.desc().contains("400"));
    }

    #[test]
    fn non_string_payload_scalars_are_stringified() {
        let value = ErrorValue::from(json!({"count": 3, "flags": [true, "x"]}));
        let errors = Errors::new(value);
        assert_eq!(errors.field("count").unwrap().as_string(), Some("3"));
        assert_eq!(
            errors.field("flags").unwrap().as_array(),
            Some(vec!["true".to_string(), "x".to_string()])
        );
    }
}
