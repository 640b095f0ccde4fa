use cucumber::{given, then, when};
use serde_json::{json, Value};

use crate::world::CertWorld;

async fn invoke(world: &mut CertWorld, payload: Value) {
    let invoker = world.invoker();
    match invoker.invoke(payload).await {
        Ok(response) => {
            world.last_error = None;
            world.responses.push(response);
        }
        Err(e) => world.last_error = Some(e),
    }
}

/// The event shape an API Gateway proxy integration delivers for a POST.
fn query_as_lambda_event(query: &str) -> Value {
    json!({ "body": json!({ "query": query }).to_string() })
}

/// Navigate a JSON value by dot-separated path (e.g., "data.greeting")
fn json_at_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    Some(current)
}

#[given("a query function is deployed")]
async fn function_deployed(world: &mut CertWorld) {
    // The invoker is injected by the test runner before hook
    assert!(world.has_invoker(), "invoker must be set before this step");
}

// ---- When ----

#[when(regex = r#"^I invoke the function with the query: (.+)$"#)]
async fn invoke_with_query(world: &mut CertWorld, query: String) {
    invoke(world, query_as_lambda_event(&query)).await;
}

#[when(regex = r#"^I greet "([^"]*)"$"#)]
async fn greet(world: &mut CertWorld, name: String) {
    let query = format!(r#"{{ greeting(firstName: "{name}") }}"#);
    invoke(world, query_as_lambda_event(&query)).await;
}

#[when(regex = r#"^I invoke the function at path "([^"]+)"$"#)]
async fn invoke_at_path(world: &mut CertWorld, path: String) {
    invoke(world, json!({ "path": path })).await;
}

#[when("I invoke the function with no event")]
async fn invoke_without_event(world: &mut CertWorld) {
    invoke(world, Value::Null).await;
}

#[when("I invoke the function without a body")]
async fn invoke_without_body(world: &mut CertWorld) {
    invoke(world, json!({ "headers": {} })).await;
}

// ---- Then ----

#[then(regex = r#"^the response status should be (\d+)$"#)]
async fn assert_status(world: &mut CertWorld, status: u16) {
    assert_eq!(world.last_response().status_code, status);
}

#[then("the response status should not be 2xx")]
async fn assert_not_success(world: &mut CertWorld) {
    let status = world.last_response().status_code;
    assert!(!(200..300).contains(&status), "unexpected success status {status}");
}

#[then(regex = r#"^the response header "([^"]+)" should be "([^"]+)"$"#)]
async fn assert_header(world: &mut CertWorld, name: String, expected: String) {
    let headers = &world.last_response().headers;
    assert_eq!(
        headers.get(&name).map(String::as_str),
        Some(expected.as_str()),
        "header {name} in {headers:?}"
    );
}

#[then("the response body should not be empty")]
async fn assert_body_not_empty(world: &mut CertWorld) {
    assert!(!world.last_response().body.is_empty());
}

#[then(regex = r#"^the response body should have "([^"]+)"$"#)]
async fn assert_has_property(world: &mut CertWorld, property: String) {
    let body = world.last_body();
    assert!(body.get(&property).is_some(), "no {property} in {body}");
}

#[then(regex = r#"^the response body should not have "([^"]+)"$"#)]
async fn assert_lacks_property(world: &mut CertWorld, property: String) {
    let body = world.last_body();
    assert!(body.get(&property).is_none(), "unexpected {property} in {body}");
}

#[then(regex = r#"^the response at "([^"]+)" should be "([^"]*)"$"#)]
async fn assert_path_string(world: &mut CertWorld, path: String, expected: String) {
    let body = world.last_body();
    let value = json_at_path(&body, &path)
        .unwrap_or_else(|| panic!("path '{path}' not found in response: {body}"));
    assert_eq!(value.as_str(), Some(expected.as_str()), "mismatch at path '{path}'");
}

#[then(regex = r#"^the response at "([^"]+)" should be (true|false)$"#)]
async fn assert_path_bool(world: &mut CertWorld, path: String, expected: String) {
    let body = world.last_body();
    let value = json_at_path(&body, &path)
        .unwrap_or_else(|| panic!("path '{path}' not found in response: {body}"));
    assert_eq!(value, &json!(expected == "true"), "mismatch at path '{path}'");
}

#[then("the last two responses should carry the same data")]
async fn assert_same_data(world: &mut CertWorld) {
    let n = world.responses.len();
    assert!(n >= 2, "need two responses, have {n}");
    let data = |i: usize| -> Value {
        let body: Value = serde_json::from_str(&world.responses[i].body).unwrap();
        body["data"].clone()
    };
    assert_eq!(data(n - 2), data(n - 1));
}

#[then(regex = r#"^the invocation should fail with "([^"]+)"$"#)]
async fn assert_failure(world: &mut CertWorld, expected: String) {
    let err = world.last_error.as_deref().expect("invocation did not fail");
    assert!(err.contains(&expected), "error {err:?} does not mention {expected:?}");
}
