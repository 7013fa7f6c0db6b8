use super::common;

use common::test_server::TestServer;
use contactgen::config::{GeneratorMode, Settings};
use contactgen::domain::{Contact, ContactBatch};

#[tokio::test]
async fn test_contact_round_trip_over_http() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/api/contact"))
        .query(&[
            ("includeEmail", "true"),
            ("includePhone", "false"),
            ("includeAddress", "true"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let contact: Contact = response.json().await.unwrap();
    assert!(contact.email.is_some());
    assert!(contact.phone.is_none());
    assert!(contact.address.is_some());
}

#[tokio::test]
async fn test_repeated_requests_vary() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let mut seen = std::collections::HashSet::new();
    for _ in 0..20 {
        let body = client
            .get(server.url("/api/contact?includeAddress=true"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        seen.insert(body);
    }
    assert!(seen.len() > 1);
}

#[tokio::test]
async fn test_invalid_flag_over_http() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/api/contact?includePhone=yes"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["details"]["includePhone"][0]
        .as_str()
        .unwrap()
        .contains("'yes'"));
}

#[tokio::test]
async fn test_faker_batch_over_http() {
    let mut settings = Settings::default();
    settings.generator.mode = GeneratorMode::Faker;
    let server = TestServer::with_settings(settings).await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/api/contact?count=5&locale=zh_CN"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let batch: ContactBatch = response.json().await.unwrap();
    assert_eq!(batch.contacts.len(), 5);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/api/contact"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
