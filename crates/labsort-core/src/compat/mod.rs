pub mod patterns;
pub mod rules;

use crate::model::Substance;
use rules::{Screened, RULES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use rules::Severity;

/// One hazardous pairing found in a set of substances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityWarning {
    pub severity: Severity,
    pub rule_id: String,
    /// The substance whose hazard triggered the rule.
    pub substance_a: String,
    pub substance_b: String,
    pub message_key: String,
}

/// Check every pair of substances against the incompatibility rules.
///
/// Each rule is tried in both directions for every pair. A rule fires at most
/// once per unordered pair of names. The result lists all `Danger` warnings
/// before all `Warning` ones and is otherwise in first-seen order.
pub fn check_compatibility(substances: &[Substance]) -> Vec<CompatibilityWarning> {
    if substances.len() < 2 {
        return Vec::new();
    }

    let screened: Vec<Screened<'_>> = substances.iter().map(Screened::from_substance).collect();

    let mut warnings = Vec::new();
    let mut seen: HashSet<(&'static str, &str, &str)> = HashSet::new();

    for (i, a) in screened.iter().enumerate() {
        for (j, b) in screened.iter().enumerate() {
            if i == j {
                continue;
            }
            for rule in RULES {
                if !(rule.applies)(a, b) {
                    continue;
                }
                let (lo, hi) = if a.name <= b.name {
                    (a.name, b.name)
                } else {
                    (b.name, a.name)
                };
                if !seen.insert((rule.id, lo, hi)) {
                    continue;
                }
                tracing::debug!(
                    rule = rule.id,
                    severity = ?rule.severity,
                    a = a.name,
                    b = b.name,
                    "incompatibility found"
                );
                warnings.push(CompatibilityWarning {
                    severity: rule.severity,
                    rule_id: rule.id.to_string(),
                    substance_a: a.name.to_string(),
                    substance_b: b.name.to_string(),
                    message_key: rule.message_key.to_string(),
                });
            }
        }
    }

    // stable: keeps first-seen order within a severity
    warnings.sort_by_key(|w| w.severity);
    warnings
}
