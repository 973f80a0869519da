//! Classification and compatibility engine for laboratory chemical waste.
//!
//! Every engine function is a pure, total function of its input: missing or
//! malformed data degrades to `Unknown`, `Insoluble` or `Prohibited` rather
//! than an error. Only policy and catalog loading can fail.

pub mod catalog;
pub mod classify;
pub mod compat;
pub mod disposal;
pub mod error;
pub mod formula;
pub mod hazard;
pub mod model;
pub mod policy;
pub mod trace;

pub use classify::{
    analyze_mixture, analyze_mixture_with, classify_substance, Classification, MixtureResult,
};
pub use compat::{check_compatibility, CompatibilityWarning, Severity};
pub use disposal::{
    assess_neutralization, assess_solubility, determine_disposal, DisposalDecision,
    Neutralization, Solubility,
};
pub use formula::{parse_formula, ElementCounts};
pub use model::{DisposalCategory, Substance};

use policy::schema::DisposalPolicy;
use serde::{Deserialize, Serialize};

/// Everything the engine says about one cart of substances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartAssessment {
    pub classifications: Vec<Classification>,
    pub mixture: MixtureResult,
    pub warnings: Vec<CompatibilityWarning>,
}

impl CartAssessment {
    /// True when the mixture is safe and no pair raised a `Danger` warning.
    pub fn is_clear(&self) -> bool {
        self.mixture.is_safe && !self.warnings.iter().any(|w| w.severity == Severity::Danger)
    }
}

/// Classify each substance, the cart as a mixture, and every pair.
///
/// The compatibility check runs over the classified copies, so organic flags
/// reflect the formulas rather than whatever the input records claimed.
pub fn assess_cart(substances: &[Substance], policy: &DisposalPolicy) -> CartAssessment {
    let classifications: Vec<Classification> =
        substances.iter().map(classify_substance).collect();
    let mixture = analyze_mixture_with(&classifications, policy);

    let derived: Vec<Substance> = classifications.iter().map(|c| c.substance.clone()).collect();
    let warnings = check_compatibility(&derived);

    tracing::debug!(
        substances = substances.len(),
        mixture = %mixture.category,
        warnings = warnings.len(),
        "assessed cart"
    );

    CartAssessment {
        classifications,
        mixture,
        warnings,
    }
}
