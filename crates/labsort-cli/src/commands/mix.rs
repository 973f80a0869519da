use labsort_core::catalog::{resolve_all, BuiltinCatalog};
use labsort_core::error::LabsortError;
use std::path::PathBuf;

pub fn run(
    queries: &[String],
    policy_file: Option<PathBuf>,
    output_format: &str,
    trace: bool,
) -> Result<(), LabsortError> {
    let substances = resolve_all(&BuiltinCatalog, queries)?;
    super::assess_and_print(&substances, policy_file, output_format, trace)
}
