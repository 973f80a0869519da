//! Solubility and neutralization assessment for the organic phase of an
//! alkali + organic mixture.
//!
//! Both assessments are ordered tier tables evaluated top to bottom; the first
//! tier that returns a verdict wins, otherwise a conservative default applies.

use crate::model::Substance;
use crate::policy::schema::{DisposalPolicy, NeutralizationPolicy, SolubilityPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Solubility {
    Soluble,
    Insoluble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Neutralization {
    Allowed,
    Prohibited,
}

/// The three disposal procedures for an alkali + organic mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisposalMethod {
    /// Dilute and neutralize to pH 6-8, dispose as aqueous waste.
    #[serde(rename = "disposal_method_case1")]
    DiluteAndNeutralize,
    /// Do not neutralize; dispose as reactive organic waste.
    #[serde(rename = "disposal_method_case2")]
    ReactiveOrganic,
    /// Do not neutralize; seal and label as mixed organic waste.
    #[serde(rename = "disposal_method_case3")]
    SealedMixedOrganic,
}

impl DisposalMethod {
    pub fn key(self) -> &'static str {
        match self {
            DisposalMethod::DiluteAndNeutralize => "disposal_method_case1",
            DisposalMethod::ReactiveOrganic => "disposal_method_case2",
            DisposalMethod::SealedMixedOrganic => "disposal_method_case3",
        }
    }
}

impl fmt::Display for DisposalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalDecision {
    pub solubility_status: Solubility,
    pub neutralization_status: Neutralization,
    pub disposal_method: DisposalMethod,
}

// ---------------------------------------------------------------------------
// Solubility
// ---------------------------------------------------------------------------

type SolubilityTier = fn(&Substance, &SolubilityPolicy) -> Option<Solubility>;

/// Evaluated in order: explicit text, name family, logKow.
const SOLUBILITY_TIERS: &[(&str, SolubilityTier)] = &[
    ("solubility_text", solubility_from_text),
    ("name_family", solubility_from_name),
    ("log_kow", solubility_from_log_kow),
];

const INSOLUBLE_NAME_FRAGMENTS: &[&str] = &["BENZENE", "TOLUENE", "HEXANE", "ETHER", "CHLORO"];
const SOLUBLE_NAME_FRAGMENTS: &[&str] = &["OL", "AMINE", "KETONE", "ACETONE"];

fn solubility_from_text(s: &Substance, _: &SolubilityPolicy) -> Option<Solubility> {
    let text = s.solubility()?.to_lowercase();
    if !(text.contains("miscible") || text.contains("soluble")) {
        return None;
    }
    // "insoluble" also covers "practically insoluble"
    if text.contains("insoluble") || text.contains("slightly soluble") {
        Some(Solubility::Insoluble)
    } else {
        Some(Solubility::Soluble)
    }
}

fn solubility_from_name(s: &Substance, _: &SolubilityPolicy) -> Option<Solubility> {
    let name = s.name.to_uppercase();
    if INSOLUBLE_NAME_FRAGMENTS.iter().any(|f| name.contains(f)) {
        Some(Solubility::Insoluble)
    } else if SOLUBLE_NAME_FRAGMENTS.iter().any(|f| name.contains(f)) {
        Some(Solubility::Soluble)
    } else {
        None
    }
}

fn solubility_from_log_kow(s: &Substance, policy: &SolubilityPolicy) -> Option<Solubility> {
    let log_kow = s.log_kow()?;
    if log_kow < policy.soluble_below_log_kow {
        Some(Solubility::Soluble)
    } else {
        // Partly miscible values count as a separate phase too
        Some(Solubility::Insoluble)
    }
}

/// Water solubility of a substance under the built-in policy.
pub fn assess_solubility(substance: &Substance) -> Solubility {
    assess_solubility_with(substance, DisposalPolicy::builtin())
}

pub fn assess_solubility_with(substance: &Substance, policy: &DisposalPolicy) -> Solubility {
    for (tier, check) in SOLUBILITY_TIERS {
        if let Some(verdict) = check(substance, &policy.solubility) {
            tracing::debug!(substance = %substance.name, tier, ?verdict, "solubility decided");
            return verdict;
        }
    }
    tracing::debug!(substance = %substance.name, "no solubility data, assuming insoluble");
    Solubility::Insoluble
}

// ---------------------------------------------------------------------------
// Neutralization
// ---------------------------------------------------------------------------

type NeutralizationCheck = fn(&Substance, &NeutralizationPolicy) -> Option<bool>;

/// Evaluated in order; `Some(false)` prohibits, `Some(true)` permits.
const NEUTRALIZATION_CHECKS: &[(&str, NeutralizationCheck)] = &[
    ("unstable", prohibited_if_unstable),
    ("low_boiling_point", prohibited_if_low_boiling),
    ("risk_factors", permitted_below_risk_threshold),
];

fn prohibited_if_unstable(s: &Substance, policy: &NeutralizationPolicy) -> Option<bool> {
    let stability = s.stability()?.to_lowercase();
    let keyword = policy
        .unstable_keywords
        .iter()
        .find(|k| stability.contains(k.as_str()))?;
    tracing::debug!(substance = %s.name, %keyword, "neutralization prohibited: unstable");
    Some(false)
}

fn prohibited_if_low_boiling(s: &Substance, policy: &NeutralizationPolicy) -> Option<bool> {
    let bp = s.boiling_point()?;
    if bp < policy.max_boiling_point_c {
        tracing::debug!(substance = %s.name, boiling_point = %bp, "neutralization prohibited: boil-over risk");
        Some(false)
    } else {
        None
    }
}

fn permitted_below_risk_threshold(s: &Substance, policy: &NeutralizationPolicy) -> Option<bool> {
    let risk = risk_factor_count(s, policy);
    if risk >= policy.risk_threshold {
        tracing::debug!(substance = %s.name, risk, "neutralization prohibited: risk factors");
        Some(false)
    } else {
        Some(true)
    }
}

/// Count the hazard-statement risk factors relevant to neutralizing `s`.
pub fn risk_factor_count(s: &Substance, policy: &NeutralizationPolicy) -> u8 {
    let statements: Vec<String> = s
        .hazard_statements()
        .iter()
        .map(|h| h.to_lowercase())
        .collect();
    let mentions = |keywords: &[String]| {
        statements
            .iter()
            .any(|h| keywords.iter().any(|k| h.contains(k.as_str())))
    };

    let mut risk = 0u8;
    if mentions(policy.oxidizer_keywords.as_slice()) {
        risk += 1;
    }
    // Corrosivity is expected of the alkali; it only counts against an organic
    if s.is_organic() && mentions(policy.corrosive_keywords.as_slice()) {
        risk += 1;
    }
    if mentions(policy.self_reactive_keywords.as_slice()) {
        risk += 1;
    }
    risk
}

/// Whether `substance` may be neutralized, under the built-in policy.
pub fn assess_neutralization(substance: &Substance) -> bool {
    assess_neutralization_with(substance, DisposalPolicy::builtin())
}

pub fn assess_neutralization_with(substance: &Substance, policy: &DisposalPolicy) -> bool {
    NEUTRALIZATION_CHECKS
        .iter()
        .find_map(|(_, check)| check(substance, &policy.neutralization))
        .unwrap_or(true)
}

// ---------------------------------------------------------------------------
// Combined decision
// ---------------------------------------------------------------------------

/// Choose the disposal procedure for the organic members of `substances`.
///
/// Only substances flagged organic are assessed. An insoluble phase forces
/// neutralization to `Prohibited` whatever the per-substance verdicts.
pub fn determine_disposal(substances: &[Substance]) -> DisposalDecision {
    determine_disposal_with(substances, DisposalPolicy::builtin())
}

pub fn determine_disposal_with(substances: &[Substance], policy: &DisposalPolicy) -> DisposalDecision {
    let organics: Vec<&Substance> = substances.iter().filter(|s| s.is_organic()).collect();

    let all_soluble = organics
        .iter()
        .all(|s| assess_solubility_with(s, policy) == Solubility::Soluble);
    let all_neutralizable = organics
        .iter()
        .all(|s| assess_neutralization_with(s, policy));

    let (solubility_status, neutralization_status, disposal_method) =
        match (all_soluble, all_neutralizable) {
            (true, true) => (
                Solubility::Soluble,
                Neutralization::Allowed,
                DisposalMethod::DiluteAndNeutralize,
            ),
            (true, false) => (
                Solubility::Soluble,
                Neutralization::Prohibited,
                DisposalMethod::ReactiveOrganic,
            ),
            (false, _) => (
                Solubility::Insoluble,
                Neutralization::Prohibited,
                DisposalMethod::SealedMixedOrganic,
            ),
        };

    tracing::debug!(
        organics = organics.len(),
        ?solubility_status,
        ?neutralization_status,
        method = disposal_method.key(),
        "disposal determined"
    );

    DisposalDecision {
        solubility_status,
        neutralization_status,
        disposal_method,
    }
}
