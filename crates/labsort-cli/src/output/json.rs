use labsort_core::error::LabsortError;
use labsort_core::trace::build_trace;
use labsort_core::{CartAssessment, Classification};

pub fn print_assessment(assessment: &CartAssessment, trace: bool) -> Result<(), LabsortError> {
    let json = if trace {
        serde_json::to_string_pretty(&serde_json::json!({
            "assessment": assessment,
            "trace": build_trace(assessment),
        }))?
    } else {
        serde_json::to_string_pretty(assessment)?
    };
    println!("{json}");
    Ok(())
}

pub fn print_lookup(aliases: &[String], classification: &Classification) -> Result<(), LabsortError> {
    let json = serde_json::to_string_pretty(&serde_json::json!({
        "aliases": aliases,
        "classification": classification,
    }))?;
    println!("{json}");
    Ok(())
}
