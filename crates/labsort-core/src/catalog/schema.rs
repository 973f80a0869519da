use crate::model::Substance;
use serde::Deserialize;

/// One catalog record plus the extra names it answers to.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Alternative names: abbreviations, common misspellings, Korean names.
    #[serde(default)]
    pub aliases: Vec<String>,
    pub substance: Substance,
}

impl CatalogEntry {
    /// Whether `key` (already normalized) names this entry.
    pub fn answers_to(&self, key: &str) -> bool {
        normalize_query(&self.substance.name) == key
            || normalize_query(&self.substance.cas_number) == key
            || self.aliases.iter().any(|a| normalize_query(a) == key)
    }
}

/// Top-level substance catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub description: String,
    pub entries: Vec<CatalogEntry>,
}

/// Trim, collapse inner whitespace and uppercase a lookup key.
pub fn normalize_query(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
