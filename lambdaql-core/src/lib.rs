pub mod config;
pub mod error;
pub mod event;
pub mod normalize;

pub use config::{AdapterConfig, AdapterConfigBuilder, DEFAULT_GRAPHIQL_PATH};
pub use error::{LambdaqlError, Result};
pub use event::{EventBody, InvocationContext, InvocationEvent};
pub use normalize::{query_from_event, NormalizedQuery};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// HTTP-shaped result handed back to the invocation platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl InvocationResponse {
    pub fn new(status_code: u16, content_type: &str, body: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), content_type.to_string());
        Self {
            status_code,
            headers,
            body: body.into(),
        }
    }

    pub fn json(status_code: u16, body: &Value) -> Self {
        Self::new(status_code, "application/json", body.to_string())
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self::new(200, "text/html", body)
    }

    /// A JSON body of the form `{"errors": [{"message": ...}]}`.
    pub fn errors(status_code: u16, message: impl Into<String>) -> Self {
        let body = serde_json::json!({ "errors": [{ "message": message.into() }] });
        Self::json(status_code, &body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Data made available to every resolver for one invocation.
#[derive(Debug, Clone)]
pub struct ResolverContext {
    pub event: Value,
    pub context: InvocationContext,
    pub headers: HashMap<String, String>,
    pub function_name: String,
    pub tracing: bool,
    pub cache_control: bool,
}

impl ResolverContext {
    pub fn new(event: &InvocationEvent, context: &InvocationContext, config: &AdapterConfig) -> Self {
        Self {
            event: event.raw.clone(),
            context: context.clone(),
            headers: event.headers.clone(),
            function_name: context.function_name.clone(),
            tracing: config.tracing,
            cache_control: config.cache_control,
        }
    }
}
