//! API client for the contactgen backend

use crate::types::ContactResponse;
use gloo_net::http::Request;

/// Empty means same origin; set at build time to target a separately hosted backend.
const API_BASE: &str = match option_env!("CONTACTGEN_BACKEND_URL") {
    Some(base) => base,
    None => "",
};

/// Which optional fields to ask the server for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub include_email: bool,
    pub include_phone: bool,
    pub include_address: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            include_email: true,
            include_phone: true,
            include_address: false,
        }
    }
}

impl Flags {
    pub fn query_string(&self) -> String {
        format!(
            "includeEmail={}&includePhone={}&includeAddress={}",
            self.include_email, self.include_phone, self.include_address
        )
    }
}

pub fn contact_url(flags: &Flags) -> String {
    format!("{}/api/contact?{}", base(), flags.query_string())
}

/// The docs page lives on the backend, wherever that is hosted.
pub fn docs_url() -> String {
    format!("{}/docs", base())
}

fn base() -> &'static str {
    API_BASE.trim_end_matches('/')
}

/// Fetch one generated contact (or a batch, in faker mode)
pub async fn fetch_contacts(flags: Flags) -> Result<ContactResponse, String> {
    let response = Request::get(&contact_url(&flags))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned {}", response.status()));
    }

    response
        .json::<ContactResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
