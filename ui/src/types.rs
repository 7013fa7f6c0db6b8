//! Types mirroring the `/api/contact` responses

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Address {
    /// Single-line postal form used for display and copying
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip_code, self.country
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Contact {
    /// Pretty JSON of the whole record, as placed on the clipboard
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// The server answers with a bare contact in pools mode and with
/// `{ "contacts": [...] }` in faker mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Batch { contacts: Vec<Contact> },
    Single(Contact),
}

impl ContactResponse {
    pub fn into_contacts(self) -> Vec<Contact> {
        match self {
            ContactResponse::Batch { contacts } => contacts,
            ContactResponse::Single(contact) => vec![contact],
        }
    }
}
