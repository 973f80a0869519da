use labsort_core::error::LabsortError;
use labsort_core::policy::{load_policy, schema::DisposalPolicy};
use std::path::Path;

pub fn show() -> Result<(), LabsortError> {
    let json = serde_json::to_string_pretty(DisposalPolicy::builtin())?;
    println!("{json}");
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), LabsortError> {
    let policy = load_policy(file)?;

    println!("Policy '{}' (v{}) is valid.", policy.name, policy.version);
    println!(
        "  Solubility: soluble below logKow {}",
        policy.solubility.soluble_below_log_kow
    );
    let neu = &policy.neutralization;
    println!(
        "  Neutralization: prohibited below {} °C or at {} risk factors",
        neu.max_boiling_point_c, neu.risk_threshold
    );

    // Differences from the built-in policy are worth a second look, not an error
    let builtin = DisposalPolicy::builtin();
    let mut notes = Vec::new();
    if neu.max_boiling_point_c < builtin.neutralization.max_boiling_point_c {
        notes.push(format!(
            "boiling point limit {} °C is below the built-in {} °C",
            neu.max_boiling_point_c, builtin.neutralization.max_boiling_point_c
        ));
    }
    if neu.risk_threshold > builtin.neutralization.risk_threshold {
        notes.push(format!(
            "risk threshold {} is more permissive than the built-in {}",
            neu.risk_threshold, builtin.neutralization.risk_threshold
        ));
    }

    if !notes.is_empty() {
        println!("\nWarnings:");
        for n in &notes {
            println!("  - {n}");
        }
    }

    Ok(())
}
