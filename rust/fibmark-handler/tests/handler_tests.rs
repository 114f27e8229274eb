//! Behavioral tests for the handler contract: any event, any context, the
//! same fixed response.

use fibmark_handler::{handle, Context, Response};
use serde_json::json;

fn default_ctx() -> Context {
    Context::default()
}

#[test]
fn null_event() {
    let resp = handle(&serde_json::Value::Null, &default_ctx());
    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.body, "fibonacci(35)=9227465");
}

#[test]
fn empty_object_event() {
    let resp = handle(&json!({}), &default_ctx());
    assert_eq!(resp.body, "fibonacci(35)=9227465");
}

#[test]
fn api_gateway_shaped_event() {
    let event = json!({
        "requestContext": {
            "requestId": "test-123",
            "accountId": "123456789012",
            "stage": "prod"
        },
        "body": "{\"name\":\"test\"}"
    });
    let ctx = Context {
        request_id: "test-123".into(),
        function_name: "fibmark".into(),
    };
    let resp = handle(&event, &ctx);
    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.body, "fibonacci(35)=9227465");
}

#[test]
fn deeply_nested_garbage_event() {
    let event = json!({"a": [{"b": {"c": [1, 2, 3, {"d": null}]}}]});
    let resp = handle(&event, &default_ctx());
    assert_eq!(resp.body, "fibonacci(35)=9227465");
}

#[test]
fn response_round_trips_through_json() {
    let resp = handle(&serde_json::Value::Null, &default_ctx());
    let wire = serde_json::to_string(&resp).unwrap();
    let back: Response = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, resp);
}

#[test]
fn wire_shape_matches_baseline() {
    let resp = handle(&serde_json::Value::Null, &default_ctx());
    let wire: serde_json::Value = serde_json::to_value(&resp).unwrap();
    assert_eq!(
        wire,
        json!({"statusCode": 200, "body": "fibonacci(35)=9227465"})
    );
}

#[test]
fn handler_is_deterministic_across_invocations() {
    let first = handle(&json!({}), &default_ctx());
    for _ in 0..3 {
        assert_eq!(handle(&json!({}), &default_ctx()), first);
    }
}
