//! End-to-end client tests against a local stub server.

#![cfg(feature = "client")]

use std::time::Duration;

use invoicegen::client::Client;
use invoicegen::core::*;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "test-key";

fn valid() -> Request {
    RequestBuilder::new("INV-1001")
        .date("2024-05-01")
        .from(Address::new("ACME Inc.", "1 Main St", "Springfield", "CA", "12345"))
        .to(Address::new("Globex Corp", "42 Elm Ave", "Shelbyville", "CA", "54321"))
        .add_item(LineItem::new(dec!(1), "Widget", dec!(9.99)))
        .build()
        .unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::builder(KEY)
        .base_url(format!("{}/v1/invoicegenerator", server.uri()))
        .build()
        .unwrap()
}

fn ok_body() -> serde_json::Value {
    json!({
        "status": "ok",
        "error": null,
        "data": { "pdfName": "inv.pdf", "expires": 3600, "downloadURL": "https://x/y" }
    })
}

#[tokio::test]
async fn execute_returns_generated_document() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/invoicegenerator"))
        .and(header("x-api-key", KEY))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&server).execute(&valid()).await.unwrap();
    assert_eq!(resp.status, "ok");
    assert!(resp.is_success());
    assert_eq!(resp.error, None);
    assert_eq!(resp.data.pdf_name, "inv.pdf");
    assert_eq!(resp.data.expires, 3600);
    assert_eq!(resp.data.download_url, "https://x/y");
}

#[tokio::test]
async fn execute_sends_request_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "invoiceNumber": "INV-1001",
            "date": "2024-05-01",
            "from_name": "ACME Inc.",
            "from_street": "1 Main St",
            "from_city": "Springfield",
            "from_state": "CA",
            "from_zip": "12345",
            "to_name": "Globex Corp",
            "to_street": "42 Elm Ave",
            "to_city": "Shelbyville",
            "to_state": "CA",
            "to_zip": "54321",
            "items": [{ "qty": 1.0, "description": "Widget", "unit_price": 9.99 }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).execute(&valid()).await.unwrap();
}

#[tokio::test]
async fn unauthorized_surfaces_api_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "status": "error", "error": "invalid api key" })),
        )
        .mount(&server)
        .await;

    let err = client(&server).execute(&valid()).await.unwrap_err();
    match &err {
        InvoiceGenError::Api { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "invalid api key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.to_string().contains("invalid api key"));
}

#[tokio::test]
async fn non_json_error_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client(&server).execute(&valid()).await.unwrap_err();
    assert!(
        matches!(&err, InvoiceGenError::Api { status: 503, message } if message == "status 503"),
        "{err:?}"
    );
}

#[tokio::test]
async fn invalid_request_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mut req = valid();
    req.to_state = "CAL".into();
    req.items.clear();

    let err = client(&server).execute(&req).await.unwrap_err();
    match err {
        InvoiceGenError::Validation(v) => assert_eq!(
            v.errors,
            vec![
                "Parameter [to_state] must be at most 2 characters",
                "Required parameter [items] is missing",
            ]
        ),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_key_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::builder("")
        .base_url(server.uri())
        .build()
        .unwrap();
    let err = client.execute(&valid()).await.unwrap_err();
    assert!(matches!(err, InvoiceGenError::Configuration(_)));
    assert!(err.is_local());
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = client(&server).execute(&valid()).await.unwrap_err();
    assert!(matches!(err, InvoiceGenError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn wrong_field_type_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "data": { "pdfName": "inv.pdf", "expires": "soon", "downloadURL": "https://x/y" }
        })))
        .mount(&server)
        .await;

    let err = client(&server).execute(&valid()).await.unwrap_err();
    assert!(matches!(err, InvoiceGenError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut client = client(&server);
    client.set_timeout(Duration::from_millis(100));
    let err = client.execute(&valid()).await.unwrap_err();
    assert!(
        matches!(err, InvoiceGenError::Transport { timeout: true, .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    // Nothing listens on the discard port.
    let client = Client::builder(KEY)
        .base_url("http://127.0.0.1:9/v1/invoicegenerator")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let err = client.execute(&valid()).await.unwrap_err();
    match err {
        InvoiceGenError::Transport { message, .. } => assert!(!message.is_empty()),
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn execute_raw_skips_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("x-api-key", KEY))
        .and(body_json(json!({ "invoiceNumber": "RAW-1", "notes": "not in schema" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = serde_json::Map::new();
    params.insert("invoiceNumber".into(), json!("RAW-1"));
    params.insert("notes".into(), json!("not in schema"));

    let resp = client(&server).execute_raw(&params).await.unwrap();
    assert_eq!(resp.data.pdf_name, "inv.pdf");
}

#[tokio::test]
async fn execute_raw_surfaces_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "status": "error", "error": "items is required" })),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .execute_raw(&serde_json::Map::new())
        .await
        .unwrap_err();
    assert!(
        matches!(&err, InvoiceGenError::Api { status: 400, message } if message == "items is required"),
        "{err:?}"
    );
}
