use crate::disposal::{Neutralization, Solubility};
use crate::model::{BinColor, DisposalCategory, Substance};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A value substituted into a reason message by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReasonParam {
    Number(Decimal),
    Text(String),
}

impl fmt::Display for ReasonParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonParam::Number(n) => write!(f, "{n}"),
            ReasonParam::Text(t) => write!(f, "{t}"),
        }
    }
}

/// Classification of a single substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Copy of the input with `is_organic`/`is_halogenated` recomputed from the formula.
    pub substance: Substance,
    pub category: DisposalCategory,
    pub bin_color: BinColor,
    /// Presentation key for the bin label (e.g. "label_acid").
    pub label_key: String,
    /// Presentation key explaining the decision (e.g. "reason_acid_ph").
    pub reason_key: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub reason_params: BTreeMap<String, ReasonParam>,
    /// False only for `Unknown`; such substances need manual verification.
    pub is_safe: bool,
}

/// Which rule of the mixture decision list produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixtureBranch {
    Empty,
    HalogenatedOrganic,
    AlkaliOrganic,
    AcidOrganic,
    NonHalogenatedOrganic,
    AcidAlkali,
    Acid,
    Alkali,
    Unclassifiable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalDetails {
    pub solubility: Solubility,
    pub neutralization: Neutralization,
}

/// Disposal verdict for a set of classified substances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixtureResult {
    pub category: DisposalCategory,
    pub bin_color: BinColor,
    pub label_key: String,
    pub reason_key: String,
    pub is_safe: bool,
    pub branch: MixtureBranch,
    /// Present only for alkali + organic mixtures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposal_details: Option<DisposalDetails>,
}

impl MixtureResult {
    pub(crate) fn new(
        branch: MixtureBranch,
        category: DisposalCategory,
        bin_color: BinColor,
        label_key: &str,
        reason_key: &str,
        is_safe: bool,
    ) -> Self {
        Self {
            category,
            bin_color,
            label_key: label_key.to_string(),
            reason_key: reason_key.to_string(),
            is_safe,
            branch,
            disposal_details: None,
        }
    }
}
