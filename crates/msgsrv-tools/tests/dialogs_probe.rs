//! Integration tests for the dialogs walk against a local mock admin panel.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use msgsrv_tools::probe_dialogs;

#[tokio::test]
async fn probe_fetches_messages_of_first_dialog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dialogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"telegram_id": 5093303797i64, "last_message": "hi"},
            {"telegram_id": 42, "last_message": "later"},
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dialogs/5093303797/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [{"content": "hi", "direction": "in"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let probe = probe_dialogs(&http, &server.uri()).await.unwrap();

    assert_eq!(probe.dialogs.as_array().unwrap().len(), 2);
    let (telegram_id, messages) = probe.first.unwrap();
    assert_eq!(telegram_id, 5093303797);
    assert_eq!(messages["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn probe_skips_messages_when_listing_is_empty() {
    let server = MockServer::start().await;
    // Only the listing endpoint is mounted; a messages fetch would 404 and
    // the assertion on `first` would not hold.
    Mock::given(method("GET"))
        .and(path("/api/dialogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let probe = probe_dialogs(&http, &server.uri()).await.unwrap();

    assert_eq!(probe.dialogs, json!([]));
    assert!(probe.first.is_none());
}

#[tokio::test]
async fn probe_propagates_listing_failure() {
    let http = reqwest::Client::new();
    let err = probe_dialogs(&http, "http://127.0.0.1:1").await;
    assert!(err.is_err());
}
