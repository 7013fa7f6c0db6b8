use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use contactgen::adapters::health_handler::HealthHandler;
use contactgen::adapters::metrics_handler::MetricsCollector;
use contactgen::config::{GeneratorMode, RateLimitConfig, Settings};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::util::ServiceExt;

async fn app_with(settings: Settings) -> Router {
    let settings = Arc::new(RwLock::new(settings));
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    let metrics = Arc::new(MetricsCollector::new().unwrap());
    contactgen::create_app(settings, health_handler, metrics).await
}

async fn faker_app() -> Router {
    let mut settings = Settings::default();
    settings.generator.mode = GeneratorMode::Faker;
    app_with(settings).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

#[tokio::test]
async fn test_default_flags() {
    let app = app_with(Settings::default()).await;
    let (status, body) = get(&app, "/api/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(keys(&body), vec!["email", "name", "phone"]);
}

#[tokio::test]
async fn test_every_flag_combination() {
    let app = app_with(Settings::default()).await;
    for email in [false, true] {
        for phone in [false, true] {
            for address in [false, true] {
                let uri = format!(
                    "/api/contact?includeEmail={}&includePhone={}&includeAddress={}",
                    email, phone, address
                );
                let (status, body) = get(&app, &uri).await;
                assert_eq!(status, StatusCode::OK, "{}", uri);

                let mut expected = vec!["name".to_string()];
                if email {
                    expected.push("email".to_string());
                }
                if phone {
                    expected.push("phone".to_string());
                }
                if address {
                    expected.push("address".to_string());
                }
                expected.sort();
                assert_eq!(keys(&body), expected, "{}", uri);
                assert!(body["name"].as_str().is_some_and(|n| !n.is_empty()));
            }
        }
    }
}

#[tokio::test]
async fn test_name_only() {
    let app = app_with(Settings::default()).await;
    let (status, body) = get(
        &app,
        "/api/contact?includeEmail=false&includePhone=false&includeAddress=false",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(keys(&body), vec!["name"]);
}

#[tokio::test]
async fn test_address_shape() {
    let app = app_with(Settings::default()).await;
    let (_, body) = get(&app, "/api/contact?includeAddress=true").await;
    assert_eq!(
        keys(&body["address"]),
        vec!["city", "country", "state", "street", "zipCode"]
    );
}

#[tokio::test]
async fn test_invalid_flag_is_bad_request() {
    let app = app_with(Settings::default()).await;
    let (status, body) = get(&app, "/api/contact?includeEmail=maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request parameters");
    assert!(body["details"]["includeEmail"].is_array());
}

#[tokio::test]
async fn test_faker_batch_count() {
    let app = faker_app().await;

    let (status, body) = get(&app, "/api/contact?count=5").await;
    assert_eq!(status, StatusCode::OK);
    let contacts = body["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 5);
    for contact in contacts {
        assert_eq!(keys(contact), vec!["address", "email", "name", "phone"]);
    }

    let (status, body) = get(&app, "/api/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contacts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_faker_count_out_of_range() {
    let app = faker_app().await;
    for count in ["0", "201"] {
        let (status, body) = get(&app, &format!("/api/contact?count={}", count)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "count={}", count);
        assert!(body["details"]["count"].is_array());
    }
}

#[tokio::test]
async fn test_faker_locale() {
    let app = faker_app().await;

    let (status, body) = get(&app, "/api/contact?locale=zh_CN&count=2&includeAddress=false").await;
    assert_eq!(status, StatusCode::OK);
    let contacts = body["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 2);
    assert!(contacts.iter().all(|c| c.get("address").is_none()));

    let (_, body) = get(&app, "/api/contact?locale=zh_CN&count=3").await;
    for contact in body["contacts"].as_array().unwrap() {
        let name = contact["name"].as_str().unwrap();
        assert!(name.chars().all(|c| ('\u{4e00}'..='\u{9fff}').contains(&c)), "{}", name);
        assert_eq!(contact["address"]["country"], "中国");
        assert_eq!(contact["address"]["zipCode"].as_str().unwrap().len(), 6);
    }

    let (_, body) = get(&app, "/api/contact?count=3").await;
    for contact in body["contacts"].as_array().unwrap() {
        let zip = contact["address"]["zipCode"].as_str().unwrap();
        assert!(zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit()), "{}", zip);
    }

    let (status, _) = get(&app, "/api/contact?locale=fr").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_pool_is_internal_error() {
    // Bypasses validation the way a hand-built Settings can
    let mut settings = Settings::default();
    settings.pools.last_names.clear();
    let app = app_with(settings).await;

    let (status, body) = get(&app, "/api/contact").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
}

#[tokio::test]
async fn test_rate_limit() {
    let mut settings = Settings::default();
    settings.rate_limit = Some(RateLimitConfig {
        enabled: true,
        requests_per_second: 1,
        burst_size: 1,
    });
    let app = app_with(settings).await;

    let (first, _) = get(&app, "/api/contact").await;
    let (second, _) = get(&app, "/api/contact").await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);

    // Health is not limited
    let (health, _) = get(&app, "/health").await;
    assert_eq!(health, StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_follows_mode() {
    let (status, body) = get(&app_with(Settings::default()).await, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["paths"]["/api/contact"]["get"]["parameters"]
            .as_array()
            .unwrap()
            .len(),
        3
    );

    let (_, body) = get(&faker_app().await, "/openapi.json").await;
    assert_eq!(
        body["paths"]["/api/contact"]["get"]["parameters"]
            .as_array()
            .unwrap()
            .len(),
        5
    );
}

#[tokio::test]
async fn test_docs_page() {
    let app = app_with(Settings::default()).await;
    let request = Request::builder().uri("/docs").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<code>includeEmail</code>"));
}

#[tokio::test]
async fn test_metrics_count_generated_contacts() {
    let app = faker_app().await;
    let (status, _) = get(&app, "/api/contact?count=4").await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("contactgen_contacts_generated_total{mode=\"faker\"} 4"));
    assert!(text.contains("endpoint=\"/api/contact\""));
}

#[tokio::test]
async fn test_unknown_api_route_is_not_found() {
    let app = app_with(Settings::default()).await;
    let (status, body) = get(&app, "/api/contacts").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}
