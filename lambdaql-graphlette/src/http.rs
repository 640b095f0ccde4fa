use crate::schema::GreetingSchema;
use async_graphql::http::GraphiQLSource;
use lambdaql_core::{EventBody, InvocationEvent, InvocationResponse, ResolverContext};

/// Execute a POST-shaped event against the schema, GraphQL-over-HTTP style.
pub async fn graphql_lambda(
    schema: &GreetingSchema,
    event: &InvocationEvent,
    options: ResolverContext,
) -> InvocationResponse {
    if !event
        .http_method
        .as_deref()
        .is_some_and(|m| m.eq_ignore_ascii_case("POST"))
    {
        return InvocationResponse::errors(405, "GraphQL queries must be sent with POST");
    }

    let body = match &event.body {
        EventBody::Raw(text) => text.as_str(),
        _ => return InvocationResponse::errors(400, "Missing GraphQL request body"),
    };

    let request: async_graphql::Request = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return InvocationResponse::errors(400, e.to_string()),
    };

    let tracing = options.tracing;
    let cache_control = options.cache_control;
    let mut response = schema.execute(request.data(options)).await;

    if !tracing {
        response.extensions.remove("tracing");
    }

    let status = if response.is_err() && response.data == async_graphql::Value::Null {
        400
    } else {
        200
    };

    let body = match serde_json::to_value(&response) {
        Ok(v) => v,
        Err(e) => return InvocationResponse::errors(500, e.to_string()),
    };
    let mut reply = InvocationResponse::json(status, &body);

    if cache_control {
        if let Some(value) = response.cache_control.value() {
            reply.headers.insert("Cache-Control".to_string(), value);
        }
    }

    reply
}

/// The GraphiQL explorer page, pointed at `endpoint_url`.
pub fn graphiql_lambda(endpoint_url: &str) -> InvocationResponse {
    InvocationResponse::html(GraphiQLSource::build().endpoint(endpoint_url).finish())
}
