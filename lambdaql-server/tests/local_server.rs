use lambdaql_core::AdapterConfig;
use lambdaql_server::build_app;
use serde_json::{json, Value};

async fn start(config: AdapterConfig) -> String {
    let app = build_app(config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", addr.port())
}

#[tokio::test]
async fn test_post_query_is_executed() {
    let addr = start(AdapterConfig::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{addr}/graphql"))
        .json(&json!({ "query": r#"{ greeting(firstName: "Jill") }"# }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.headers()["content-type"], "application/json");
    assert_eq!(resp.headers()["cache-control"], "max-age=60");
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["greeting"], json!("Hello, Jill."));
}

#[tokio::test]
async fn test_query_errors_keep_their_status() {
    let addr = start(AdapterConfig::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{addr}/graphql"))
        .json(&json!({ "query": "{}" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["errors"].is_array());
}

#[tokio::test]
async fn test_graphiql_page_is_served() {
    let addr = start(AdapterConfig::builder().graphiql(true).build()).await;

    let resp = reqwest::get(format!("{addr}/graphiql")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.headers()["content-type"], "text/html");
    assert!(!resp.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_request_without_body_is_a_server_error() {
    let addr = start(AdapterConfig::default()).await;

    let resp = reqwest::get(format!("{addr}/graphql")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = resp.json().await.unwrap();
    assert!(body["errors"][0]["message"].is_string());
}

#[tokio::test]
async fn test_non_utf8_body_is_rejected() {
    let addr = start(AdapterConfig::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{addr}/graphql"))
        .header("content-type", "application/json")
        .body(vec![b'{', 0xff, 0xfe, b'}'])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("UTF-8"));
}
