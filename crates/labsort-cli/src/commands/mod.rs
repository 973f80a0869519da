pub mod catalog;
pub mod classify;
pub mod lookup;
pub mod mix;
pub mod policy;

use labsort_core::error::LabsortError;
use labsort_core::policy::{load_policy, schema::DisposalPolicy};
use labsort_core::{assess_cart, Substance};
use std::path::PathBuf;

use crate::output;

/// Assess a cart under the chosen policy and print it.
pub(crate) fn assess_and_print(
    substances: &[Substance],
    policy_file: Option<PathBuf>,
    output_format: &str,
    trace: bool,
) -> Result<(), LabsortError> {
    let policy = match policy_file {
        Some(path) => load_policy(&path)?,
        None => DisposalPolicy::builtin().clone(),
    };

    let assessment = assess_cart(substances, &policy);

    match output_format {
        "json" => output::json::print_assessment(&assessment, trace)?,
        _ => output::table::print_assessment(&assessment, trace),
    }

    Ok(())
}
