use labsort_core::error::LabsortError;
use labsort_core::Substance;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    policy_file: Option<PathBuf>,
    output_format: &str,
    trace: bool,
) -> Result<(), LabsortError> {
    let json_bytes = std::fs::read(&input_file)?;
    let substances: Vec<Substance> = serde_json::from_slice(&json_bytes)?;

    super::assess_and_print(&substances, policy_file, output_format, trace)
}
