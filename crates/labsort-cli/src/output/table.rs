use labsort_core::classify::MixtureResult;
use labsort_core::trace::build_trace;
use labsort_core::{CartAssessment, Classification, Severity};

pub fn print_assessment(assessment: &CartAssessment, trace: bool) {
    if assessment.classifications.is_empty() {
        println!("Cart is empty.\n");
    } else {
        println!("=== Substances ===\n");
        let max_name = assessment
            .classifications
            .iter()
            .map(|c| c.substance.name.len())
            .max()
            .unwrap_or(10);

        for c in &assessment.classifications {
            let unsafe_marker = if c.is_safe { "" } else { " (?)" };
            println!(
                "  {:<width$}  {:<19}  {:<10}  {}{}",
                c.substance.name,
                c.category.to_string(),
                c.bin_color.to_string(),
                reason_with_params(c),
                unsafe_marker,
                width = max_name
            );
        }
        println!();
    }

    println!("=== Mixture ===\n");
    print_mixture(&assessment.mixture);

    if !assessment.warnings.is_empty() {
        println!("=== Compatibility ===\n");
        for w in &assessment.warnings {
            let marker = match w.severity {
                Severity::Danger => "DANGER ",
                Severity::Warning => "WARNING",
            };
            println!(
                "  {}  {} + {}  ({})",
                marker, w.substance_a, w.substance_b, w.message_key
            );
        }
        println!();
    }

    if assessment.is_clear() {
        println!("  Result: clear to collect\n");
    } else {
        println!("  Result: needs review before collection\n");
    }

    if trace {
        print_trace(assessment);
    }
}

fn print_mixture(m: &MixtureResult) {
    let safety = if m.is_safe { "safe" } else { "UNSAFE" };
    println!(
        "  Overall: {} [{}] {} ({}, {})",
        m.category, m.bin_color, m.label_key, m.reason_key, safety
    );
    if let Some(ref d) = m.disposal_details {
        println!(
            "  Organic phase: {:?}, neutralization {:?}",
            d.solubility, d.neutralization
        );
    }
    println!();
}

fn reason_with_params(c: &Classification) -> String {
    if c.reason_params.is_empty() {
        return c.reason_key.clone();
    }
    let params: Vec<String> = c
        .reason_params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    format!("{} ({})", c.reason_key, params.join(", "))
}

fn print_trace(assessment: &CartAssessment) {
    let bundle = build_trace(assessment);
    println!("=== Trace (schema {}) ===\n", bundle.trace_schema_version);
    for d in &bundle.decisions {
        match d.subject {
            Some(ref subject) => println!("  [{}] {} -> {}", d.decision_id, subject, d.outcome),
            None => println!("  [{}] mixture -> {}", d.decision_id, d.outcome),
        }
        for step in &d.steps {
            println!("    {}", step.message);
        }
    }
    println!();
}

pub fn print_lookup(aliases: &[String], classification: &Classification) {
    let s = &classification.substance;
    println!("{} ({})\n", s.name, s.cas_number);
    println!("  Formula:     {}", s.formula);
    if let Some(mw) = s.molecular_weight {
        println!("  Mol. weight: {mw}");
    }
    if !aliases.is_empty() {
        println!("  Aliases:     {}", aliases.join(", "));
    }
    if let Some(ph) = s.ph() {
        println!("  pH:          {ph}");
    }
    if let Some(bp) = s.boiling_point() {
        println!("  Boiling pt:  {bp} °C");
    }
    if let Some(sol) = s.solubility() {
        println!("  Solubility:  {sol}");
    }
    for h in s.hazard_statements() {
        println!("  Hazard:      {h}");
    }
    println!();
    println!(
        "  Category: {} [{}] {} ({})",
        classification.category,
        classification.bin_color,
        classification.label_key,
        reason_with_params(classification)
    );
    println!();
}
