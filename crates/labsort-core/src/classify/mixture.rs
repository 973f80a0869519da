use crate::classify::outcome::{Classification, DisposalDetails, MixtureBranch, MixtureResult};
use crate::disposal::{determine_disposal_with, Neutralization, Solubility};
use crate::model::{BinColor, DisposalCategory, Substance};
use crate::policy::schema::DisposalPolicy;

/// Classify a set of already-classified substances as one mixture.
pub fn analyze_mixture(classifications: &[Classification]) -> MixtureResult {
    analyze_mixture_with(classifications, DisposalPolicy::builtin())
}

/// Like [`analyze_mixture`], with an explicit policy for the alkali + organic case.
///
/// Rules are tried in a fixed order and the first match wins: halogenated
/// organics dominate everything, then alkali + organic, acid + organic, plain
/// organic, acid + alkali, and finally single inorganic categories.
pub fn analyze_mixture_with(
    classifications: &[Classification],
    policy: &DisposalPolicy,
) -> MixtureResult {
    use DisposalCategory::*;

    if classifications.is_empty() {
        return MixtureResult::new(
            MixtureBranch::Empty,
            Unknown,
            BinColor::Gray,
            "mix_label_unknown",
            "cart_empty",
            true,
        );
    }

    let has = |cat: DisposalCategory| classifications.iter().any(|c| c.category == cat);
    let has_halogen_organic = has(OrganicHalogen);
    let has_organic = has(OrganicNonHalogen);
    let has_acid = has(Acid);
    let has_alkali = has(Alkali);

    let result = if has_halogen_organic {
        MixtureResult::new(
            MixtureBranch::HalogenatedOrganic,
            OrganicHalogen,
            BinColor::Orange,
            "mix_label_halogen",
            "mix_reason_halogen",
            true,
        )
    } else if has_alkali && has_organic {
        alkali_with_organic(classifications, policy)
    } else if has_organic && has_acid {
        MixtureResult::new(
            MixtureBranch::AcidOrganic,
            Unknown,
            BinColor::Red,
            "mix_label_warn_oi",
            "mix_warn_organic_inorganic",
            false,
        )
    } else if has_organic {
        MixtureResult::new(
            MixtureBranch::NonHalogenatedOrganic,
            OrganicNonHalogen,
            BinColor::Yellow,
            "mix_label_organic",
            "mix_reason_organic",
            true,
        )
    } else if has_acid && has_alkali {
        MixtureResult::new(
            MixtureBranch::AcidAlkali,
            Unknown,
            BinColor::Purple,
            "mix_label_warn_aa",
            "mix_warn_acid_alkali",
            false,
        )
    } else if has_acid {
        MixtureResult::new(
            MixtureBranch::Acid,
            Acid,
            BinColor::Red,
            "mix_label_acid",
            "mix_reason_acid",
            true,
        )
    } else if has_alkali {
        MixtureResult::new(
            MixtureBranch::Alkali,
            Alkali,
            BinColor::Blue,
            "mix_label_alkali",
            "mix_reason_alkali",
            true,
        )
    } else {
        MixtureResult::new(
            MixtureBranch::Unclassifiable,
            Unknown,
            BinColor::Gray,
            "mix_label_unknown",
            "mix_unknown",
            false,
        )
    };

    tracing::debug!(
        members = classifications.len(),
        branch = ?result.branch,
        category = %result.category,
        is_safe = result.is_safe,
        "analyzed mixture"
    );

    result
}

/// Alkali + non-halogenated organic: the verdict comes from the disposal assessor.
fn alkali_with_organic(classifications: &[Classification], policy: &DisposalPolicy) -> MixtureResult {
    let involved: Vec<Substance> = classifications
        .iter()
        .filter(|c| {
            matches!(
                c.category,
                DisposalCategory::Alkali | DisposalCategory::OrganicNonHalogen
            )
        })
        .map(|c| c.substance.clone())
        .collect();

    let decision = determine_disposal_with(&involved, policy);

    let bin_color = match (decision.neutralization_status, decision.solubility_status) {
        (Neutralization::Allowed, _) => BinColor::DeepBlue,
        (Neutralization::Prohibited, Solubility::Soluble) => BinColor::Orange,
        (Neutralization::Prohibited, Solubility::Insoluble) => BinColor::DarkRed,
    };

    let mut result = MixtureResult::new(
        MixtureBranch::AlkaliOrganic,
        DisposalCategory::Unknown,
        bin_color,
        "mix_label_alkali_organic",
        decision.disposal_method.key(),
        decision.neutralization_status == Neutralization::Allowed,
    );
    result.disposal_details = Some(DisposalDetails {
        solubility: decision.solubility_status,
        neutralization: decision.neutralization_status,
    });
    result
}
