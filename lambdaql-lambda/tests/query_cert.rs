use cucumber::World as _;
#[allow(unused_imports)]
use lambdaql_cert::steps::query;
use lambdaql_cert::{CertWorld, Invoker};
use lambdaql_core::{AdapterConfig, InvocationContext, InvocationResponse};
use lambdaql_lambda::Adapter;
use serde_json::Value;
use std::sync::Arc;

struct AdapterInvoker(Adapter);

#[async_trait::async_trait]
impl Invoker for AdapterInvoker {
    async fn invoke(&self, payload: Value) -> Result<InvocationResponse, String> {
        let context = InvocationContext {
            function_name: "query".to_string(),
            request_id: "cert".to_string(),
        };
        self.0
            .handle(payload, context)
            .await
            .map_err(|e| e.to_string())
    }
}

#[tokio::main]
async fn main() {
    CertWorld::cucumber()
        .before(move |_feature, _rule, _scenario, world| {
            Box::pin(async move {
                let config = AdapterConfig::builder().graphiql(true).build();
                world.set_invoker(Arc::new(AdapterInvoker(Adapter::new(config))));
                world.responses.clear();
            })
        })
        .run_and_exit("../lambdaql-cert/tests/features/query.feature")
        .await;
}
