use std::sync::Mutex;

use super::*;
use crate::net::types::MessagePayload;

fn client() -> ApiClient {
    ApiClient::new(&ClientConfig::new("http://127.0.0.1:9/api")).unwrap()
}

#[test]
fn url_joins_base_and_path() {
    let api = client();
    assert_eq!(api.url("department"), "http://127.0.0.1:9/api/department");
    assert_eq!(api.url("/department/"), "http://127.0.0.1:9/api/department/");
    assert_eq!(api.url("department/d1"), "http://127.0.0.1:9/api/department/d1");
    assert_eq!(api.url(""), "http://127.0.0.1:9/api");
}

#[test]
fn success_range_is_2xx() {
    assert!(response_is_success(200));
    assert!(response_is_success(201));
    assert!(response_is_success(204));
    assert!(!response_is_success(199));
    assert!(!response_is_success(301));
    assert!(!response_is_success(401));
}

#[test]
fn error_from_body_extracts_message() {
    let err = error_from_body(401, r#"{"message":"Invalid credentials"}"#);
    assert!(matches!(err, ApiError::Response { status: 401, .. }));
    assert_eq!(err.notification_message(), "Invalid credentials");
}

#[test]
fn error_from_body_without_message() {
    for body in ["", "<html>bad gateway</html>", r#"{"error":"x"}"#, r#"{"message":""}"#] {
        let err = error_from_body(502, body);
        assert!(matches!(err, ApiError::Response { status: 502, message: None }), "body {body:?}");
    }
}

#[test]
fn decode_body_maps_mismatch_to_decode_error() {
    let ok: MessagePayload = decode_body(r#"{"message":"done"}"#).unwrap();
    assert_eq!(ok.message, "done");

    let err = decode_body::<MessagePayload>("[1,2]").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_body_empty_is_null() {
    let value: Option<MessagePayload> = decode_body("").unwrap();
    assert!(value.is_none());
}

#[test]
fn hooks_run_in_registration_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&seen);
    let second = Arc::clone(&seen);
    let api = client()
        .with_interceptor(Arc::new(move |_req: &mut Request| -> Result<(), ApiError> {
            first.lock().unwrap().push("first");
            Ok(())
        }))
        .with_interceptor(Arc::new(move |_req: &mut Request| -> Result<(), ApiError> {
            second.lock().unwrap().push("second");
            Ok(())
        }));

    let mut request = reqwest::Client::new().get(api.url("department")).build().unwrap();
    api.apply_hooks(&mut request).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
}

#[tokio::test]
async fn failing_hook_aborts_dispatch() {
    let api = client().with_interceptor(Arc::new(|_req: &mut Request| Err(ApiError::Interceptor("rejected".to_owned()))));
    let err = api.get::<MessagePayload>("department").await.unwrap_err();
    assert!(matches!(err, ApiError::Interceptor(ref msg) if msg == "rejected"));
}
