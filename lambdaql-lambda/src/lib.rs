pub mod adapter;
pub mod explorer;

pub use adapter::Adapter;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use lambdaql_core::{AdapterConfig, InvocationContext};
use serde_json::Value;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `RUST_LOG` when set, otherwise [`DEFAULT_LOG_LEVEL`].
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Run the adapter inside the AWS Lambda runtime.
///
/// Payloads are taken as raw JSON so that absent, string and object bodies all
/// reach the normalizer untouched. Adapter errors fail the invocation.
pub async fn run_lambda(config: AdapterConfig) -> Result<(), Error> {
    let adapter = Arc::new(Adapter::new(config));
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let adapter = Arc::clone(&adapter);
        async move {
            let (payload, context) = event.into_parts();
            adapter
                .handle(payload, invocation_context(&context))
                .await
                .map_err(Error::from)
        }
    }))
    .await
}

fn invocation_context(context: &lambda_runtime::Context) -> InvocationContext {
    InvocationContext {
        function_name: context.env_config.function_name.clone(),
        request_id: context.request_id.clone(),
    }
}
