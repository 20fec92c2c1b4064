//! Webhook delivery against a mockito server.
#![cfg(feature = "ssr")]

use alicerce::models::{ContactSubmission, OutboundPayload, LEAD_SOURCE};
use alicerce::services::webhook::{DeliveryError, Webhook};
use mockito::{Matcher, Server};
use serde_json::json;

fn payload() -> OutboundPayload {
    let submission = ContactSubmission {
        name: "Ana Souza".into(),
        email: "ana@ex.com".into(),
        phone: "(11) 98765-4321".into(),
        project_type: "residencial".into(),
        other_project_type: String::new(),
        message: "Preciso de um projeto residencial novo.".into(),
    };
    OutboundPayload::new(&submission, chrono::Utc::now())
}

#[tokio::test]
async fn posts_json_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook/lead")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "name": "Ana Souza",
            "email": "ana@ex.com",
            "phone": "(11) 98765-4321",
            "projectType": "residencial",
            "message": "Preciso de um projeto residencial novo.",
            "source": LEAD_SOURCE,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true}"#)
        .expect(1)
        .create_async()
        .await;

    let webhook = Webhook::new(Some(format!("{}/webhook/lead", server.url())));
    let body = webhook.deliver(&payload()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(body, Some(json!({ "ok": true })));
}

#[tokio::test]
async fn unparseable_success_body_is_still_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .with_status(200)
        .with_body("Workflow was started")
        .create_async()
        .await;

    let webhook = Webhook::new(Some(format!("{}/hook", server.url())));
    let body = webhook.deliver(&payload()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(body, None);
}

#[tokio::test]
async fn non_2xx_is_rejected() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .with_status(500)
        .with_body(r#"{"ok": true}"#)
        .expect(1)
        .create_async()
        .await;

    let webhook = Webhook::new(Some(format!("{}/hook", server.url())));
    let err = webhook.deliver(&payload()).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, DeliveryError::Rejected(500)));
}

#[tokio::test]
async fn missing_url_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;

    for url in [None, Some(String::new()), Some("   ".into())] {
        let webhook = Webhook::new(url);
        assert!(!webhook.is_configured());
        let err = webhook.deliver(&payload()).await.unwrap_err();
        assert!(matches!(err, DeliveryError::NotConfigured));
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let webhook = Webhook::new(Some("http://127.0.0.1:9/hook".into()));
    let err = webhook.deliver(&payload()).await.unwrap_err();
    assert!(matches!(err, DeliveryError::Transport(_)));
}
