use lambdaql_core::AdapterConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(lambdaql_lambda::log_filter())
        // CloudWatch stamps each line itself.
        .with_target(false)
        .without_time()
        .init();

    lambdaql_lambda::run_lambda(AdapterConfig::from_env()).await
}
