use lambdaql_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(lambdaql_lambda::log_filter())
        .init();

    lambdaql_server::run(ServerConfig::from_env()).await
}
