use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use lambdaql_core::{AdapterConfig, InvocationContext, InvocationResponse};
use lambdaql_lambda::Adapter;
use serde_json::{json, Map, Value};
use std::env;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

pub const LOCAL_FUNCTION_NAME: &str = "lambdaql-local";

pub struct ServerConfig {
    pub port: u16,
    pub adapter: AdapterConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("LAMBDAQL_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            adapter: AdapterConfig::from_env(),
        }
    }
}

/// Build the local router: every request becomes one invocation of the adapter.
pub fn build_app(config: AdapterConfig) -> Router {
    let adapter = Arc::new(Adapter::new(config));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .fallback(invoke_handler)
        .with_state(adapter)
        .layer(cors)
}

async fn invoke_handler(
    State(adapter): State<Arc<Adapter>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let payload = match to_event(&method, &uri, &headers, &body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Rejecting request body: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": [{ "message": format!("Request body is not valid UTF-8: {e}") }] })),
            )
                .into_response();
        }
    };
    let context = InvocationContext {
        function_name: LOCAL_FUNCTION_NAME.to_string(),
        request_id: Uuid::new_v4().to_string(),
    };

    match adapter.handle(payload, context).await {
        Ok(reply) => to_response(reply),
        Err(e) => {
            warn!("Invocation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "errors": [{ "message": e.to_string() }] })),
            )
                .into_response()
        }
    }
}

/// Shape an HTTP request the way an API Gateway proxy integration would.
fn to_event(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<Value, std::str::Utf8Error> {
    let headers: Map<String, Value> = headers
        .iter()
        .filter_map(|(k, v)| {
            v.to_str()
                .ok()
                .map(|s| (k.as_str().to_string(), Value::String(s.to_string())))
        })
        .collect();

    let body = if body.is_empty() {
        Value::Null
    } else {
        Value::String(std::str::from_utf8(body)?.to_string())
    };

    Ok(json!({
        "httpMethod": method.as_str(),
        "path": uri.path(),
        "headers": headers,
        "body": body,
    }))
}

fn to_response(reply: InvocationResponse) -> Response {
    let status = StatusCode::from_u16(reply.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, reply.body).into_response();
    for (name, value) in &reply.headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            response.headers_mut().insert(name, value);
        }
    }
    response
}

/// Start the server on the configured port.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let port = config.port;
    let app = build_app(config.adapter);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!("lambdaql listening on port {port}");
    axum::serve(listener, app).await?;
    Ok(())
}
