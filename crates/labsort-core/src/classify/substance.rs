use crate::classify::outcome::{Classification, ReasonParam};
use crate::formula::parse_formula;
use crate::model::{DisposalCategory, Substance};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::BTreeMap;

const NEUTRAL_PH: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

const ACID_NAME_KEYWORDS: &[&str] = &["ACID", "SULFURIC", "HYDROCHLORIC", "NITRIC"];
const ALKALI_NAME_KEYWORDS: &[&str] = &["HYDROXIDE", "AMMONIA"];

/// Classify one substance into a disposal category.
///
/// Organic substances (carbon in the formula) are split on halogen content
/// alone. Inorganic substances use pH when known, then name keywords.
/// Missing data yields `Unknown`; this never fails.
pub fn classify_substance(substance: &Substance) -> Classification {
    let elements = parse_formula(&substance.formula);
    let is_organic = elements.is_organic();
    let has_halogen = elements.has_halogen();
    let derived = substance.with_derived_flags(is_organic, has_halogen);

    let mut reason_params = BTreeMap::new();

    let (category, reason_key) = if is_organic {
        if has_halogen {
            (DisposalCategory::OrganicHalogen, "reason_organic_halogen")
        } else {
            (DisposalCategory::OrganicNonHalogen, "reason_organic_non_halogen")
        }
    } else if let Some(ph) = derived.ph() {
        reason_params.insert("ph".to_string(), ReasonParam::Number(ph));
        match ph.cmp(&NEUTRAL_PH) {
            Ordering::Less => (DisposalCategory::Acid, "reason_acid_ph"),
            Ordering::Greater => (DisposalCategory::Alkali, "reason_alkali_ph"),
            Ordering::Equal => (DisposalCategory::Neutral, "reason_neutral_ph"),
        }
    } else {
        classify_by_name(&derived.name)
    };

    let (bin_color, label_key) = category.presentation();

    tracing::debug!(
        substance = %substance.name,
        formula = %substance.formula,
        elements = %elements,
        %category,
        reason = reason_key,
        "classified substance"
    );

    Classification {
        substance: derived,
        category,
        bin_color,
        label_key: label_key.to_string(),
        reason_key: reason_key.to_string(),
        reason_params,
        is_safe: category != DisposalCategory::Unknown,
    }
}

fn classify_by_name(name: &str) -> (DisposalCategory, &'static str) {
    let upper = name.to_uppercase();
    if ACID_NAME_KEYWORDS.iter().any(|k| upper.contains(k)) {
        (DisposalCategory::Acid, "reason_acid_keyword")
    } else if ALKALI_NAME_KEYWORDS.iter().any(|k| upper.contains(k)) {
        (DisposalCategory::Alkali, "reason_alkali_keyword")
    } else {
        (DisposalCategory::Unknown, "reason_unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BinColor, ChemicalProperties};
    use rust_decimal_macros::dec;

    #[test]
    fn test_chloroform_is_halogenated_organic() {
        let c = classify_substance(&Substance::new("Chloroform", "CHCl3"));
        assert_eq!(c.category, DisposalCategory::OrganicHalogen);
        assert_eq!(c.reason_key, "reason_organic_halogen");
        assert_eq!(c.bin_color, BinColor::Orange);
        assert!(c.is_safe);
    }

    #[test]
    fn test_ethanol_is_non_halogenated_organic() {
        let c = classify_substance(&Substance::new("Ethanol", "C2H6O"));
        assert_eq!(c.category, DisposalCategory::OrganicNonHalogen);
        assert_eq!(c.label_key, "label_organic");
    }

    #[test]
    fn test_organic_ignores_ph_and_name() {
        let acetic = Substance::new("Acetic Acid", "C2H4O2").with_ph(dec!(2.4));
        let c = classify_substance(&acetic);
        assert_eq!(c.category, DisposalCategory::OrganicNonHalogen);
        assert!(c.reason_params.is_empty());
    }

    #[test]
    fn test_ph_classification() {
        let acid = classify_substance(&Substance::new("Sulfuric Acid", "H2SO4").with_ph(dec!(1)));
        assert_eq!(acid.category, DisposalCategory::Acid);
        assert_eq!(acid.reason_key, "reason_acid_ph");
        assert_eq!(acid.reason_params.get("ph"), Some(&ReasonParam::Number(dec!(1))));

        let base = classify_substance(&Substance::new("Sodium Hydroxide", "NaOH").with_ph(dec!(14)));
        assert_eq!(base.category, DisposalCategory::Alkali);
        assert_eq!(base.reason_key, "reason_alkali_ph");
    }

    #[test]
    fn test_ph_seven_is_neutral() {
        let c = classify_substance(&Substance::new("Sodium Chloride", "NaCl").with_ph(dec!(7.0)));
        assert_eq!(c.category, DisposalCategory::Neutral);
        assert_eq!(c.reason_key, "reason_neutral_ph");
        assert_eq!(c.bin_color, BinColor::Green);
    }

    #[test]
    fn test_ph_outranks_name_keywords() {
        // Name says acid, measured pH says otherwise
        let c = classify_substance(&Substance::new("Boric Acid buffer", "H3BO3").with_ph(dec!(8.5)));
        assert_eq!(c.category, DisposalCategory::Alkali);
    }

    #[test]
    fn test_name_keyword_fallback() {
        let c = classify_substance(&Substance::new("Hydrochloric acid 37%", "HCl"));
        assert_eq!(c.category, DisposalCategory::Acid);
        assert_eq!(c.reason_key, "reason_acid_keyword");

        let c = classify_substance(&Substance::new("Potassium hydroxide", "KOH"));
        assert_eq!(c.category, DisposalCategory::Alkali);
        assert_eq!(c.reason_key, "reason_alkali_keyword");

        let c = classify_substance(&Substance::new("Ammonia solution", "NH3"));
        assert_eq!(c.category, DisposalCategory::Alkali);
    }

    #[test]
    fn test_unknown_is_unsafe() {
        let c = classify_substance(&Substance::new("Sodium Chloride", "NaCl"));
        assert_eq!(c.category, DisposalCategory::Unknown);
        assert_eq!(c.reason_key, "reason_unknown");
        assert_eq!(c.label_key, "mix_label_unknown");
        assert_eq!(c.bin_color, BinColor::Gray);
        assert!(!c.is_safe);
    }

    #[test]
    fn test_empty_formula_and_name() {
        let c = classify_substance(&Substance::default());
        assert_eq!(c.category, DisposalCategory::Unknown);
    }

    #[test]
    fn test_inorganic_never_gets_organic_category() {
        let cases = [
            ("Water", "H2O", None),
            ("Nitric Acid", "HNO3", Some(dec!(1))),
            ("Ammonia", "NH3", Some(dec!(11.6))),
            ("Hydrochloric Acid", "HCl", None),
            ("Mystery", "", None),
        ];
        for (name, formula, ph) in cases {
            let mut s = Substance::new(name, formula);
            if let Some(ph) = ph {
                s = s.with_ph(ph);
            }
            assert!(!classify_substance(&s).category.is_organic(), "{name}");
        }
    }

    #[test]
    fn test_stored_organic_flag_is_overwritten() {
        let mut s = Substance::new("Hydrochloric Acid", "HCl").with_ph(dec!(1));
        s.properties = Some(ChemicalProperties {
            is_organic: true,
            is_halogenated: false,
            ph: Some(dec!(1)),
        });
        let c = classify_substance(&s);
        assert_eq!(c.category, DisposalCategory::Acid);
        assert!(!c.substance.is_organic());
        assert!(c.substance.properties.as_ref().unwrap().is_halogenated);
        // caller's record is not mutated
        assert!(s.is_organic());
    }
}
