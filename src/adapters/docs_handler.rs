//! OpenAPI document and a rendered HTML page for the active contact contract.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::{GeneratorMode, Settings};
use crate::domain::MAX_BATCH_SIZE;

const DOCS_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{{ title }} - API</title>
  <style>
    body { font-family: sans-serif; max-width: 52rem; margin: 2rem auto; color: #1f2937; }
    code, pre { background: #f3f4f6; padding: 0.1rem 0.3rem; border-radius: 4px; }
    table { border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }
    th, td { border: 1px solid #d1d5db; padding: 0.4rem 0.6rem; text-align: left; }
  </style>
</head>
<body>
  <h1>{{ title }} <small>v{{ version }}</small></h1>
  <p>Active mode: <code>{{ mode }}</code>. Raw document: <a href="/openapi.json">/openapi.json</a></p>
  <h2><code>GET /api/contact</code></h2>
  <p>{{ summary }}</p>
  <h3>Query parameters</h3>
  <table>
    <tr><th>Name</th><th>Type</th><th>Default</th><th>Description</th></tr>
    {% for p in parameters %}
    <tr><td><code>{{ p.name }}</code></td><td>{{ p.kind }}</td><td><code>{{ p.default }}</code></td><td>{{ p.description }}</td></tr>
    {% endfor %}
  </table>
  <h3>Responses</h3>
  <table>
    <tr><th>Status</th><th>Description</th></tr>
    {% for r in responses %}
    <tr><td>{{ r.status }}</td><td>{{ r.description }}</td></tr>
    {% endfor %}
  </table>
  <h3>Example</h3>
  <pre>{{ example }}</pre>
</body>
</html>
"#;

#[derive(Debug, Serialize)]
struct ParamDoc {
    name: &'static str,
    kind: &'static str,
    default: String,
    description: &'static str,
    schema: Value,
}

#[derive(Debug, Serialize)]
struct ResponseDoc {
    status: &'static str,
    description: &'static str,
}

fn flag(name: &'static str, description: &'static str, default: bool) -> ParamDoc {
    ParamDoc {
        name,
        kind: "boolean",
        default: default.to_string(),
        description,
        schema: json!({ "type": "string", "enum": ["true", "false"], "default": default.to_string() }),
    }
}

fn parameters(mode: GeneratorMode) -> Vec<ParamDoc> {
    let mut params = vec![
        flag("includeEmail", "Whether to include email in the contact", true),
        flag("includePhone", "Whether to include phone number in the contact", true),
        flag(
            "includeAddress",
            "Whether to include address in the contact",
            mode == GeneratorMode::Faker,
        ),
    ];
    if mode == GeneratorMode::Faker {
        params.push(ParamDoc {
            name: "count",
            kind: "integer",
            default: "1".to_string(),
            description: "Number of contacts to generate (1 to 200)",
            schema: json!({ "type": "integer", "minimum": 1, "maximum": MAX_BATCH_SIZE, "default": 1 }),
        });
        params.push(ParamDoc {
            name: "locale",
            kind: "string",
            default: "en".to_string(),
            description: "Locale to use for data generation",
            schema: json!({ "type": "string", "enum": ["en", "zh_CN"], "default": "en" }),
        });
    }
    params
}

fn responses() -> Vec<ResponseDoc> {
    vec![
        ResponseDoc {
            status: "200",
            description: "Contact generated successfully",
        },
        ResponseDoc {
            status: "400",
            description: "Invalid request parameters",
        },
        ResponseDoc {
            status: "500",
            description: "Internal Server Error",
        },
    ]
}

fn summary(mode: GeneratorMode) -> &'static str {
    match mode {
        GeneratorMode::Pools => "Generates a fake contact information entry with optional fields.",
        GeneratorMode::Faker => {
            "Generates one or more fake contact entries using optional locale and count."
        }
    }
}

fn contact_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": { "type": "string" },
            "email": { "type": "string" },
            "phone": { "type": "string" },
            "address": {
                "type": "object",
                "properties": {
                    "street": { "type": "string" },
                    "city": { "type": "string" },
                    "state": { "type": "string" },
                    "zipCode": { "type": "string" },
                    "country": { "type": "string" }
                }
            }
        }
    })
}

fn example(mode: GeneratorMode) -> Value {
    let contact = json!({
        "name": "Jane Smith",
        "email": "jane.smith@example.com",
        "phone": "(555) 123-4567"
    });
    match mode {
        GeneratorMode::Pools => contact,
        GeneratorMode::Faker => json!({ "contacts": [contact] }),
    }
}

/// OpenAPI 3.0 description of `GET /api/contact` for `mode`.
pub fn openapi_document(mode: GeneratorMode) -> Value {
    let body_schema = match mode {
        GeneratorMode::Pools => contact_schema(),
        GeneratorMode::Faker => json!({
            "type": "object",
            "properties": { "contacts": { "type": "array", "items": contact_schema() } }
        }),
    };

    let parameters: Vec<Value> = parameters(mode)
        .into_iter()
        .map(|p| {
            json!({
                "name": p.name,
                "in": "query",
                "required": false,
                "description": p.description,
                "schema": p.schema,
            })
        })
        .collect();

    let mut responses_doc = serde_json::Map::new();
    for r in responses() {
        let mut entry = json!({ "description": r.description });
        if r.status == "200" {
            entry["content"] = json!({ "application/json": { "schema": body_schema.clone() } });
        }
        responses_doc.insert(r.status.to_string(), entry);
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Contact Generator",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/api/contact": {
                "get": {
                    "tags": ["Contact"],
                    "summary": summary(mode),
                    "parameters": parameters,
                    "responses": responses_doc,
                }
            }
        }
    })
}

pub fn render_docs(mode: GeneratorMode) -> Result<String, anyhow::Error> {
    let mut context = tera::Context::new();
    context.insert("title", "Contact Generator");
    context.insert("version", env!("CARGO_PKG_VERSION"));
    context.insert("mode", mode.as_str());
    context.insert("summary", summary(mode));
    context.insert("parameters", &parameters(mode));
    context.insert("responses", &responses());
    context.insert("example", &serde_json::to_string_pretty(&example(mode))?);

    Ok(tera::Tera::one_off(DOCS_TEMPLATE, &context, true)?)
}

pub async fn openapi_json(State(settings): State<Arc<RwLock<Settings>>>) -> Json<Value> {
    let mode = settings.read().await.generator.mode;
    Json(openapi_document(mode))
}

pub async fn docs_page(State(settings): State<Arc<RwLock<Settings>>>) -> Response {
    let mode = settings.read().await.generator.mode;
    docs_response(render_docs(mode))
}

fn docs_response(rendered: Result<String, anyhow::Error>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render docs page: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_document_has_flags_only() {
        let doc = openapi_document(GeneratorMode::Pools);
        let params = doc["paths"]["/api/contact"]["get"]["parameters"]
            .as_array()
            .unwrap();
        let names: Vec<&str> = params.iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["includeEmail", "includePhone", "includeAddress"]);
        assert_eq!(params[2]["schema"]["default"], "false");
    }

    #[test]
    fn test_faker_document_has_count_and_locale() {
        let doc = openapi_document(GeneratorMode::Faker);
        let get = &doc["paths"]["/api/contact"]["get"];
        let params = get["parameters"].as_array().unwrap();
        assert_eq!(params.len(), 5);
        assert_eq!(params[3]["schema"]["maximum"], 200);
        let schema = &get["responses"]["200"]["content"]["application/json"]["schema"];
        assert_eq!(schema["properties"]["contacts"]["type"], "array");
    }

    #[test]
    fn test_render_docs() {
        let html = render_docs(GeneratorMode::Faker).unwrap();
        assert!(html.contains("GET /api/contact"));
        assert!(html.contains("<code>locale</code>"));
        assert!(html.contains("Invalid request parameters"));
    }

    #[test]
    fn test_render_failure_is_internal_error() {
        let response = docs_response(Err(anyhow::anyhow!("template exploded")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = docs_response(Ok("<p>ok</p>".to_string()));
        assert_eq!(response.status(), StatusCode::OK);
    }
}
