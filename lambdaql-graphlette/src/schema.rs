use crate::health::HealthProbe;
use async_graphql::extensions::ApolloTracing;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};
use std::sync::Arc;

pub type GreetingSchema = Schema<RootQuery, EmptyMutation, EmptySubscription>;

pub fn greeting_for(first_name: &str) -> String {
    format!("Hello, {first_name}.")
}

pub struct RootQuery;

#[Object(name = "RootQueryType")]
impl RootQuery {
    /// Greets the caller by first name.
    #[graphql(cache_control(max_age = 60))]
    async fn greeting(&self, first_name: String) -> Option<String> {
        Some(greeting_for(&first_name))
    }

    /// Whether the companion service answers its health check.
    async fn engine_health(&self, ctx: &Context<'_>) -> async_graphql::Result<bool> {
        let probe = ctx.data::<Arc<dyn HealthProbe>>()?;
        Ok(probe.healthy().await)
    }
}

/// Build the process-wide schema. Apollo tracing is registered when `tracing` is set.
pub fn build_schema(probe: Arc<dyn HealthProbe>, tracing: bool) -> GreetingSchema {
    let mut builder = Schema::build(RootQuery, EmptyMutation, EmptySubscription).data(probe);
    if tracing {
        builder = builder.extension(ApolloTracing);
    }
    builder.finish()
}
