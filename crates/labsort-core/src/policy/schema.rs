use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tunable constants for the solubility and neutralization heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisposalPolicy {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub solubility: SolubilityPolicy,
    pub neutralization: NeutralizationPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolubilityPolicy {
    /// logKow strictly below this value counts as water-soluble; anything at
    /// or above it is insoluble.
    pub soluble_below_log_kow: Decimal,
}

/// Keyword lists are matched against lowercased text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutralizationPolicy {
    /// Any of these in the stability text prohibits neutralization outright.
    pub unstable_keywords: Vec<String>,
    /// Boiling points strictly below this (°C) prohibit neutralization.
    pub max_boiling_point_c: Decimal,
    /// Number of risk factors at which neutralization is prohibited.
    pub risk_threshold: u8,
    pub oxidizer_keywords: Vec<String>,
    /// Only counted when the substance itself is organic.
    pub corrosive_keywords: Vec<String>,
    pub self_reactive_keywords: Vec<String>,
}
