use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest batch a single request may ask for.
pub const MAX_BATCH_SIZE: usize = 200;

/// A synthetic contact record.
///
/// `name` is always present; the optional fields are serialized only when the
/// matching inclusion flag was set for the request that produced the record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Response body of the locale-aware contract.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContactBatch {
    pub contacts: Vec<Contact>,
}

/// Which optional fields a generator should fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub include_email: bool,
    pub include_phone: bool,
    pub include_address: bool,
}

impl GenerateOptions {
    pub fn new(include_email: bool, include_phone: bool, include_address: bool) -> Self {
        Self {
            include_email,
            include_phone,
            include_address,
        }
    }

    /// Every optional field requested.
    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    /// Name only.
    pub fn name_only() -> Self {
        Self::new(false, false, false)
    }
}

impl Contact {
    /// Checks that the optional fields line up with the flags they were generated for.
    pub fn matches(&self, options: &GenerateOptions) -> bool {
        !self.name.is_empty()
            && self.email.is_some() == options.include_email
            && self.phone.is_some() == options.include_phone
            && self.address.is_some() == options.include_address
    }
}

/// Locale profile for the faker-backed generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh_CN")]
    ZhCn,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::ZhCn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh_CN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}', expected one of: en, zh_CN")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "zh_CN" => Ok(Locale::ZhCn),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error("pool '{0}' has no values to draw from")]
    EmptyPool(&'static str),
}

/// Produces contact records.
///
/// Implementations only need `generate_with_rng`; the thread-RNG and batch
/// variants are derived from it.
pub trait ContactGenerator {
    fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        options: GenerateOptions,
    ) -> Result<Contact, GeneratorError>;

    fn generate(&self, options: GenerateOptions) -> Result<Contact, GeneratorError> {
        self.generate_with_rng(&mut rand::thread_rng(), options)
    }

    /// Generate `count` records, with `count` clamped to `1..=MAX_BATCH_SIZE`.
    fn generate_batch_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        options: GenerateOptions,
    ) -> Result<Vec<Contact>, GeneratorError> {
        (0..count.clamp(1, MAX_BATCH_SIZE))
            .map(|_| self.generate_with_rng(rng, options))
            .collect()
    }

    fn generate_batch(
        &self,
        count: usize,
        options: GenerateOptions,
    ) -> Result<Vec<Contact>, GeneratorError> {
        self.generate_batch_with_rng(&mut rand::thread_rng(), count, options)
    }
}
