//! Value pools for the list-based generator.
//!
//! The built-in lists can be replaced from the `[pools]` table of the main
//! config file or from override files under `config/pools/`.

use serde::{Deserialize, Serialize};
use std::path::Path;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Lisa", "James", "Mary",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];
const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "example.com",
];
const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Pine Rd", "Elm St", "Maple Dr", "Cedar Ln", "Park Ave", "First St",
];
const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
];
const STATES: &[&str] = &["NY", "CA", "IL", "TX", "AZ", "PA", "FL", "OH"];
const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Australia",
    "Germany",
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DataPools {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub email_domains: Vec<String>,
    pub streets: Vec<String>,
    pub cities: Vec<String>,
    pub states: Vec<String>,
    pub countries: Vec<String>,
}

impl Default for DataPools {
    fn default() -> Self {
        Self {
            first_names: owned(FIRST_NAMES),
            last_names: owned(LAST_NAMES),
            email_domains: owned(EMAIL_DOMAINS),
            streets: owned(STREETS),
            cities: owned(CITIES),
            states: owned(STATES),
            countries: owned(COUNTRIES),
        }
    }
}

impl DataPools {
    /// Pool names paired with their values, in a stable order.
    pub fn named(&self) -> [(&'static str, &[String]); 7] {
        [
            ("first_names", self.first_names.as_slice()),
            ("last_names", self.last_names.as_slice()),
            ("email_domains", self.email_domains.as_slice()),
            ("streets", self.streets.as_slice()),
            ("cities", self.cities.as_slice()),
            ("states", self.states.as_slice()),
            ("countries", self.countries.as_slice()),
        ]
    }

    /// Replace every list the override provides; lists it omits are kept.
    pub fn apply(&mut self, patch: PoolOverride) {
        if let Some(v) = patch.first_names {
            self.first_names = v;
        }
        if let Some(v) = patch.last_names {
            self.last_names = v;
        }
        if let Some(v) = patch.email_domains {
            self.email_domains = v;
        }
        if let Some(v) = patch.streets {
            self.streets = v;
        }
        if let Some(v) = patch.cities {
            self.cities = v;
        }
        if let Some(v) = patch.states {
            self.states = v;
        }
        if let Some(v) = patch.countries {
            self.countries = v;
        }
    }
}

/// Partial pool replacement read from a file in `config/pools/`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PoolOverride {
    pub first_names: Option<Vec<String>>,
    pub last_names: Option<Vec<String>>,
    pub email_domains: Option<Vec<String>>,
    pub streets: Option<Vec<String>>,
    pub cities: Option<Vec<String>>,
    pub states: Option<Vec<String>>,
    pub countries: Option<Vec<String>>,
}

/// Read every `*.json`, `*.yaml`, `*.yml` and `*.toml` file in `dir`, in file name order.
pub fn load_overrides_from_dir(dir: &Path) -> Result<Vec<PoolOverride>, anyhow::Error> {
    let pattern = format!("{}/*", dir.display());
    let mut paths = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
        }
    }
    paths.sort();

    let mut overrides = Vec::new();
    for path in paths {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !matches!(ext, "json" | "yaml" | "yml" | "toml") {
            continue;
        }
        let content = std::fs::read_to_string(&path)?;
        let patch: PoolOverride = match ext {
            "json" => serde_json::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        tracing::debug!("Loaded pool override from {}", path.display());
        overrides.push(patch);
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_pools_are_populated() {
        let pools = DataPools::default();
        for (name, values) in pools.named() {
            assert!(!values.is_empty(), "{} should not be empty", name);
        }
        assert_eq!(pools.first_names.len(), 10);
        assert_eq!(pools.states.len(), 8);
        assert_eq!(pools.countries.len(), 5);
    }

    #[test]
    fn test_apply_replaces_only_given_lists() {
        let mut pools = DataPools::default();
        pools.apply(PoolOverride {
            cities: Some(vec!["Springfield".to_string()]),
            ..Default::default()
        });
        assert_eq!(pools.cities, vec!["Springfield".to_string()]);
        assert_eq!(pools.first_names, DataPools::default().first_names);
    }

    #[test]
    fn test_load_overrides_in_file_name_order() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("a.json"), r#"{ "cities": ["Austin"] }"#)?;
        fs::write(dir.path().join("b.yaml"), "cities:\n  - Boston\nstates:\n  - MA\n")?;
        fs::write(dir.path().join("c.toml"), "countries = [\"Ireland\"]\n")?;
        fs::write(dir.path().join("notes.txt"), "ignored")?;

        let overrides = load_overrides_from_dir(dir.path())?;
        assert_eq!(overrides.len(), 3);

        let mut pools = DataPools::default();
        for patch in overrides {
            pools.apply(patch);
        }
        assert_eq!(pools.cities, vec!["Boston".to_string()]);
        assert_eq!(pools.states, vec!["MA".to_string()]);
        assert_eq!(pools.countries, vec!["Ireland".to_string()]);
        Ok(())
    }

    #[test]
    fn test_load_overrides_missing_dir_is_empty() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let overrides = load_overrides_from_dir(&dir.path().join("missing"))?;
        assert!(overrides.is_empty());
        Ok(())
    }
}
