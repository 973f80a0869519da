use super::schema::{normalize_query, Catalog, CatalogEntry};
use super::SubstanceSource;
use crate::model::Substance;
use std::sync::LazyLock;

const COMMON_CHEMICALS_JSON: &str = include_str!("../../../../data/common-chemicals.json");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    serde_json::from_str(COMMON_CHEMICALS_JSON).expect("embedded common-chemicals.json is valid")
});

/// Get the built-in catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Look up an entry by name, CAS number or alias (case-insensitive).
pub fn lookup_entry(query: &str) -> Option<&'static CatalogEntry> {
    let key = normalize_query(query);
    if key.is_empty() {
        return None;
    }
    CATALOG.entries.iter().find(|e| e.answers_to(&key))
}

/// [`SubstanceSource`] backed by the embedded catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl SubstanceSource for BuiltinCatalog {
    fn lookup(&self, query: &str) -> Option<Substance> {
        lookup_entry(query).map(|e| e.substance.clone())
    }

    fn source_name(&self) -> &str {
        "builtin"
    }
}
