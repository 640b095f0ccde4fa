use crate::explorer;
use lambdaql_core::{
    query_from_event, AdapterConfig, EventBody, InvocationContext, InvocationEvent,
    InvocationResponse, ResolverContext, Result,
};
use lambdaql_graphlette::{build_schema, graphql_lambda, EngineHealth, GreetingSchema, HealthProbe};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Turns invocation payloads into GraphQL executions against the greeting schema.
///
/// Holds the schema for the life of the process; every invocation gets its own
/// `ResolverContext`.
pub struct Adapter {
    config: AdapterConfig,
    schema: GreetingSchema,
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Adapter {
    pub fn new(config: AdapterConfig) -> Self {
        let probe: Arc<dyn HealthProbe> =
            Arc::new(EngineHealth::new(config.engine_proxy_url.clone()));
        Self::with_probe(config, probe)
    }

    pub fn with_probe(config: AdapterConfig, probe: Arc<dyn HealthProbe>) -> Self {
        let schema = build_schema(probe, config.tracing);
        Self { config, schema }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Handle one invocation with the standard resolver context.
    pub async fn handle(
        &self,
        payload: Value,
        context: InvocationContext,
    ) -> Result<InvocationResponse> {
        let config = &self.config;
        self.execute(payload, context, |event, context| {
            ResolverContext::new(event, context, config)
        })
        .await
    }

    /// Handle one invocation, building the resolver context with `configure`.
    ///
    /// Event decoding, explorer resolution and normalization all happen before
    /// the schema is touched; their errors are returned as-is.
    pub async fn execute<F>(
        &self,
        payload: Value,
        context: InvocationContext,
        configure: F,
    ) -> Result<InvocationResponse>
    where
        F: FnOnce(&InvocationEvent, &InvocationContext) -> ResolverContext,
    {
        let mut event = InvocationEvent::from_payload(payload)?;
        debug!(path = ?event.path, method = ?event.http_method, "EVENT {:?}", event.body);
        debug!("CONTEXT {:?}", context);

        if let Some(page) = explorer::redirect(&self.config, &event)? {
            return Ok(page);
        }

        let query = query_from_event(&event)?;
        debug!("QUERY {:?}", query);

        // The GraphQL handler only speaks POST with a JSON body.
        event.http_method = Some("POST".to_string());
        event.body = EventBody::Raw(query.to_body()?);

        let options = configure(&event, &context);
        Ok(graphql_lambda(&self.schema, &event, options).await)
    }
}
