pub mod database;
pub mod schema;

use crate::error::LabsortError;
use crate::model::Substance;

pub use database::BuiltinCatalog;

/// A provider of substance records, e.g. a local table or a remote database.
pub trait SubstanceSource: Send + Sync {
    /// Find a substance by name, CAS number or alias.
    fn lookup(&self, query: &str) -> Option<Substance>;

    /// Name of this source (for diagnostics).
    fn source_name(&self) -> &str;
}

/// Resolve every query, failing on the first one the source does not know.
pub fn resolve_all(
    source: &dyn SubstanceSource,
    queries: &[String],
) -> Result<Vec<Substance>, LabsortError> {
    queries
        .iter()
        .map(|q| {
            source.lookup(q).ok_or_else(|| {
                tracing::debug!(query = %q, source = source.source_name(), "lookup missed");
                LabsortError::UnknownSubstance(q.clone())
            })
        })
        .collect()
}
