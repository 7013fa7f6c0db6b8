//! `GET /api/contact`: validate the query, run the active generator, serialize.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::adapters::faker_generator::FakerGenerator;
use crate::adapters::metrics_handler::MetricsCollector;
use crate::adapters::pool_generator::PoolGenerator;
use crate::config::{GeneratorMode, Settings};
use crate::domain::{
    Contact, ContactBatch, ContactGenerator, GenerateOptions, GeneratorError, Locale,
    MAX_BATCH_SIZE,
};

/// Shared state for the contact route
#[derive(Clone)]
pub struct ContactState {
    pub settings: Arc<RwLock<Settings>>,
    pub metrics: Arc<MetricsCollector>,
}

/// Raw query string; every value is kept as text so bad input can be reported per field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactQuery {
    pub include_email: Option<String>,
    pub include_phone: Option<String>,
    pub include_address: Option<String>,
    pub count: Option<String>,
    pub locale: Option<String>,
}

/// A query that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRequest {
    pub options: GenerateOptions,
    pub count: usize,
    pub locale: Locale,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ContactResponse {
    Batch(ContactBatch),
    Single(Contact),
}

impl ContactResponse {
    pub fn len(&self) -> usize {
        match self {
            ContactResponse::Batch(batch) => batch.contacts.len(),
            ContactResponse::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validation messages keyed by query parameter name.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request parameters")]
    Validation(FieldErrors),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<GeneratorError> for ApiError {
    fn from(e: GeneratorError) -> Self {
        ApiError::Internal(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(details) => {
                debug!("Rejected contact request: {:?}", details);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Invalid request parameters",
                        "details": details,
                    })),
                )
                    .into_response()
            }
            ApiError::Internal(e) => {
                error!("Error generating contact: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

impl ContactQuery {
    /// Apply defaults for `mode` and check every parameter, collecting all failures.
    pub fn validate(
        &self,
        mode: GeneratorMode,
        default_locale: Locale,
    ) -> Result<ContactRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        // The batch contract asks for every field unless told otherwise
        let address_default = mode == GeneratorMode::Faker;

        let include_email = parse_flag(&mut errors, "includeEmail", &self.include_email, true);
        let include_phone = parse_flag(&mut errors, "includePhone", &self.include_phone, true);
        let include_address = parse_flag(
            &mut errors,
            "includeAddress",
            &self.include_address,
            address_default,
        );

        let (count, locale) = match mode {
            GeneratorMode::Pools => (1, default_locale),
            GeneratorMode::Faker => (
                parse_count(&mut errors, &self.count),
                parse_locale(&mut errors, &self.locale, default_locale),
            ),
        };

        if errors.is_empty() {
            Ok(ContactRequest {
                options: GenerateOptions::new(include_email, include_phone, include_address),
                count,
                locale,
            })
        } else {
            Err(errors)
        }
    }
}

fn parse_flag(errors: &mut FieldErrors, field: &str, raw: &Option<String>, default: bool) -> bool {
    match raw.as_deref() {
        None => default,
        Some("true") => true,
        Some("false") => false,
        Some(other) => {
            errors.push(
                field,
                format!(
                    "Invalid enum value. Expected 'true' | 'false', received '{}'",
                    other
                ),
            );
            default
        }
    }
}

fn parse_count(errors: &mut FieldErrors, raw: &Option<String>) -> usize {
    let raw = match raw.as_deref() {
        None | Some("") => return 1,
        Some(raw) => raw,
    };
    match raw.parse::<usize>() {
        Ok(n) if (1..=MAX_BATCH_SIZE).contains(&n) => n,
        _ => {
            errors.push(
                "count",
                format!(
                    "Invalid \"count\" parameter. Must be an integer between 1 and {}.",
                    MAX_BATCH_SIZE
                ),
            );
            1
        }
    }
}

fn parse_locale(errors: &mut FieldErrors, raw: &Option<String>, default: Locale) -> Locale {
    match raw.as_deref() {
        None | Some("") => default,
        Some(raw) => raw.parse().unwrap_or_else(|e: crate::domain::UnknownLocale| {
            errors.push("locale", e.to_string());
            default
        }),
    }
}

/// Run the generator selected by `mode` for an already validated request.
pub fn generate_response(
    settings: &Settings,
    request: &ContactRequest,
) -> Result<ContactResponse, GeneratorError> {
    match settings.generator.mode {
        GeneratorMode::Pools => {
            let contact = PoolGenerator::new(&settings.pools).generate(request.options)?;
            Ok(ContactResponse::Single(contact))
        }
        GeneratorMode::Faker => {
            let contacts =
                FakerGenerator::new(request.locale).generate_batch(request.count, request.options)?;
            Ok(ContactResponse::Batch(ContactBatch { contacts }))
        }
    }
}

pub async fn get_contact(
    State(state): State<ContactState>,
    query: Result<Query<ContactQuery>, QueryRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Query(query) =
        query.map_err(|e| ApiError::Validation(FieldErrors::single("query", e.body_text())))?;

    let settings = state.settings.read().await;
    let mode = settings.generator.mode;
    let request = query
        .validate(mode, settings.generator.default_locale)
        .map_err(ApiError::Validation)?;

    let response = generate_response(&settings, &request)?;
    drop(settings);

    state
        .metrics
        .contacts_generated
        .with_label_values(&[mode.as_str()])
        .inc_by(response.len() as f64);

    Ok(Json(response))
}
