use crate::event::{EventBody, InvocationEvent};
use crate::{LambdaqlError, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// A GraphQL request extracted from an invocation body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuery {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl NormalizedQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    /// JSON body for a GraphQL-over-HTTP POST.
    pub fn to_body(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Extract the GraphQL request carried by an event's body.
pub fn query_from_event(event: &InvocationEvent) -> Result<NormalizedQuery> {
    match &event.body {
        EventBody::Raw(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::String(query)) => Ok(NormalizedQuery::new(query)),
            Ok(Value::Object(envelope)) => from_envelope(&envelope),
            Ok(_) => Err(LambdaqlError::MissingQuery),
            Err(e) => {
                debug!("Event body is not well-formed JSON: {}", e);
                Err(LambdaqlError::UnrecognizedInvocationShape)
            }
        },
        EventBody::Parsed(Value::Object(envelope)) => from_envelope(envelope),
        EventBody::Parsed(_) | EventBody::Absent => Err(LambdaqlError::UnrecognizedInvocationShape),
    }
}

fn from_envelope(envelope: &serde_json::Map<String, Value>) -> Result<NormalizedQuery> {
    let query = match envelope.get("query") {
        Some(Value::String(q)) if !q.is_empty() => q.clone(),
        _ => return Err(LambdaqlError::MissingQuery),
    };

    let variables = envelope.get("variables").filter(|v| !v.is_null()).cloned();
    let operation_name = envelope
        .get("operationName")
        .and_then(|v| v.as_str())
        .map(String::from);

    Ok(NormalizedQuery {
        query,
        variables,
        operation_name,
    })
}
