pub mod health;
pub mod http;
pub mod schema;

pub use health::{EngineHealth, HealthProbe, ProbeError, ENGINE_HEALTH_PATH};
pub use http::{graphiql_lambda, graphql_lambda};
pub use schema::{build_schema, greeting_for, GreetingSchema, RootQuery};
