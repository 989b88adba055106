//! Integration tests for the API client against canned local responses.
//!
//! A throwaway TCP listener plays the platform: each accepted connection
//! gets the next scripted response. This exercises the real request path
//! (reqwest, JSON decoding, error-body parsing) without a live service.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use capflow_core::types::page::PageRequest;
use capflow_core::{ApiClient, GENERIC_FAILURE_MESSAGE};

/// Serves the scripted responses one connection at a time, then stops.
fn serve_canned(responses: Vec<String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}")
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

#[tokio::test]
async fn list_fetch_retries_once_after_failure() {
    let page_body = r#"{"data":[],"meta":{"page":0,"per_page":10,"total":0,"total_pages":1}}"#;
    let base = serve_canned(vec![
        http_response("500 Internal Server Error", r#"{"detail":"boom"}"#),
        http_response("200 OK", page_body),
    ]);

    let client = ApiClient::new(base);
    let result = client.list_users(PageRequest::default(), None).await;
    assert!(result.is_ok(), "second attempt should succeed: {result:?}");
}

#[tokio::test]
async fn rejection_detail_is_surfaced_verbatim() {
    let base = serve_canned(vec![http_response(
        "404 Not Found",
        r#"{"detail":"user not found"}"#,
    )]);

    let client = ApiClient::new(base);
    let err = client.get_user("u-1").await.unwrap_err();
    assert_eq!(err.user_message(), "user not found");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn rejection_without_detail_falls_back() {
    let base = serve_canned(vec![http_response("500 Internal Server Error", "{}")]);

    let client = ApiClient::new(base);
    let err = client.setup_mfa().await.unwrap_err();
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn unreachable_server_yields_generic_fallback() {
    // Discard port; nothing listens here, so the connection is refused and
    // the single retry fails the same way.
    let client = ApiClient::new("http://127.0.0.1:9");
    let err = client.list_lenders().await.unwrap_err();
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn session_response_decodes_into_outcome() {
    let body = r#"{
        "token": "tok-1",
        "user": {
            "id": "u-1",
            "email": "ops@buyer.example",
            "display_name": "Dana Ops",
            "role": "operator",
            "created_at": "2026-03-01T09:30:00Z"
        }
    }"#;
    let base = serve_canned(vec![http_response("200 OK", body)]);

    let client = ApiClient::new(base);
    let form = capflow_core::forms::SignInForm {
        email: "ops@buyer.example".to_string(),
        password: "hunter22".to_string(),
    };
    let outcome = client.sign_in(&form).await.expect("sign-in decodes");
    match outcome {
        capflow_core::types::auth::SignInOutcome::Session(session) => {
            assert_eq!(session.token, "tok-1");
            assert_eq!(session.user.display_name, "Dana Ops");
        }
        other => panic!("expected session, got {other:?}"),
    }
}
