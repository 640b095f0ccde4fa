use crate::{LambdaqlError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Request body as delivered by the invocation platform.
#[derive(Debug, Clone, PartialEq)]
pub enum EventBody {
    Absent,
    Raw(String),
    Parsed(Value),
}

/// The fields of an invocation payload the adapter cares about.
#[derive(Debug, Clone)]
pub struct InvocationEvent {
    pub body: EventBody,
    pub path: Option<String>,
    pub http_method: Option<String>,
    pub headers: HashMap<String, String>,
    /// The payload exactly as it arrived.
    pub raw: Value,
}

impl InvocationEvent {
    pub fn from_payload(payload: Value) -> Result<Self> {
        let fields = match &payload {
            Value::Null => return Err(LambdaqlError::MalformedInvocation),
            Value::Object(fields) => fields,
            _ => return Err(LambdaqlError::UnrecognizedInvocationShape),
        };

        let body = match fields.get("body") {
            None | Some(Value::Null) => EventBody::Absent,
            Some(Value::String(s)) => EventBody::Raw(s.clone()),
            Some(other) => EventBody::Parsed(other.clone()),
        };

        let path = optional_string(fields, "path")?;
        let http_method = optional_string(fields, "httpMethod")?;

        let headers = match fields.get("headers") {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect(),
            _ => HashMap::new(),
        };

        Ok(Self {
            body,
            path,
            http_method,
            headers,
            raw: payload,
        })
    }

    /// Header lookup ignoring ASCII case, since gateways disagree on casing.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn optional_string(fields: &serde_json::Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(LambdaqlError::InvalidEvent(format!(
            "`{key}` must be a string, got {other}"
        ))),
    }
}

/// Per-invocation metadata from the hosting platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationContext {
    pub function_name: String,
    pub request_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_payload_is_malformed() {
        let err = InvocationEvent::from_payload(Value::Null).unwrap_err();
        assert!(matches!(err, LambdaqlError::MalformedInvocation));
    }

    #[test]
    fn test_scalar_payload_is_unrecognized() {
        let err = InvocationEvent::from_payload(json!(42)).unwrap_err();
        assert!(matches!(err, LambdaqlError::UnrecognizedInvocationShape));
    }

    #[test]
    fn test_body_variants() {
        let absent = InvocationEvent::from_payload(json!({})).unwrap();
        assert_eq!(absent.body, EventBody::Absent);

        let null = InvocationEvent::from_payload(json!({"body": null})).unwrap();
        assert_eq!(null.body, EventBody::Absent);

        let raw = InvocationEvent::from_payload(json!({"body": "{\"query\":\"{ a }\"}"})).unwrap();
        assert_eq!(raw.body, EventBody::Raw("{\"query\":\"{ a }\"}".to_string()));

        let parsed = InvocationEvent::from_payload(json!({"body": {"query": "{ a }"}})).unwrap();
        assert_eq!(parsed.body, EventBody::Parsed(json!({"query": "{ a }"})));
    }

    #[test]
    fn test_routing_fields_and_headers() {
        let event = InvocationEvent::from_payload(json!({
            "path": "/graphql",
            "httpMethod": "GET",
            "headers": {"Content-Type": "application/json", "X-Count": 3}
        }))
        .unwrap();
        assert_eq!(event.path.as_deref(), Some("/graphql"));
        assert_eq!(event.http_method.as_deref(), Some("GET"));
        assert_eq!(event.headers.len(), 1);
        assert_eq!(event.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_non_string_path_is_invalid() {
        let err = InvocationEvent::from_payload(json!({"path": ["/graphiql"]})).unwrap_err();
        assert!(matches!(err, LambdaqlError::InvalidEvent(_)));
    }

    #[test]
    fn test_raw_payload_is_retained() {
        let payload = json!({"body": "x", "requestContext": {"stage": "dev"}});
        let event = InvocationEvent::from_payload(payload.clone()).unwrap();
        assert_eq!(event.raw, payload);
    }
}
