use lambdaql_core::{AdapterConfig, InvocationEvent, InvocationResponse, LambdaqlError, Result};
use lambdaql_graphlette::graphiql_lambda;
use tracing::debug;
use url::Url;

pub const GRAPHQL_PATH: &str = "/graphql";

/// The endpoint the explorer page sends queries to.
///
/// Without a companion URL the page targets the relative `/graphql`.
pub fn endpoint_url(config: &AdapterConfig) -> Result<String> {
    let Some(base) = config.engine_proxy_url.as_deref() else {
        return Ok(GRAPHQL_PATH.to_string());
    };
    let url = Url::parse(base)
        .and_then(|url| url.join(GRAPHQL_PATH))
        .map_err(|e| LambdaqlError::Config(format!("ENGINE_PROXY_URL {base:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(LambdaqlError::Config(format!(
            "ENGINE_PROXY_URL {base:?} is not an http(s) URL"
        )));
    }
    Ok(url.into())
}

/// Serve the explorer page when enabled and the path matches, otherwise `None`.
pub fn redirect(config: &AdapterConfig, event: &InvocationEvent) -> Result<Option<InvocationResponse>> {
    if !config.graphiql {
        return Ok(None);
    }
    match event.path.as_deref() {
        Some(path) if path.starts_with(&config.graphiql_path) => {
            let endpoint = endpoint_url(config)?;
            debug!("Serving GraphiQL for {} against {}", path, endpoint);
            Ok(Some(graphiql_lambda(&endpoint)))
        }
        _ => Ok(None),
    }
}
