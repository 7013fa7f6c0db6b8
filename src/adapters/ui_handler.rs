use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use rust_embed::RustEmbed;

/// Output of `trunk build` for the `ui` crate.
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> Response {
        let path = uri.path().trim_start_matches('/');

        // Unknown API routes should not be answered with the frontend
        if path == "api" || path.starts_with("api/") {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Not Found" })),
            )
                .into_response();
        }

        let path = if path.is_empty() { "index.html" } else { path };

        match Asset::get(path) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
            }
            // SPA fallback
            None => match Asset::get("index.html") {
                Some(content) => (
                    [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                    content.data,
                )
                    .into_response(),
                None => (
                    StatusCode::NOT_FOUND,
                    "Frontend not built. Run `trunk build --release` in ui/.",
                )
                    .into_response(),
            },
        }
    }

    /// Whether the frontend bundle was embedded at build time.
    pub fn is_embedded() -> bool {
        Asset::get("index.html").is_some()
    }
}
