use labsort_core::catalog::database::lookup_entry;
use labsort_core::classify_substance;
use labsort_core::error::LabsortError;

use crate::output;

pub fn run(query: &str, output_format: &str) -> Result<(), LabsortError> {
    let entry =
        lookup_entry(query).ok_or_else(|| LabsortError::UnknownSubstance(query.to_string()))?;
    let classification = classify_substance(&entry.substance);

    match output_format {
        "json" => output::json::print_lookup(&entry.aliases, &classification)?,
        _ => output::table::print_lookup(&entry.aliases, &classification),
    }

    Ok(())
}
