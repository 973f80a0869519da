//! End-to-end tests for assess_cart() and the built-in catalog.
//!
//! Substances come from the embedded catalog where possible, so these tests
//! also pin the catalog data the CLI ships with.

use labsort_core::catalog::{resolve_all, BuiltinCatalog, SubstanceSource};
use labsort_core::classify::MixtureBranch;
use labsort_core::disposal::DisposalMethod;
use labsort_core::error::LabsortError;
use labsort_core::model::PhysicalProperties;
use labsort_core::policy::{parse_policy_str, schema::DisposalPolicy};
use labsort_core::trace::build_trace;
use labsort_core::{
    analyze_mixture, assess_cart, check_compatibility, classify_substance, DisposalCategory,
    Neutralization, Severity, Substance,
};
use rust_decimal_macros::dec;

fn from_catalog(queries: &[&str]) -> Vec<Substance> {
    let queries: Vec<String> = queries.iter().map(|q| q.to_string()).collect();
    resolve_all(&BuiltinCatalog, &queries).unwrap()
}

// ---------------------------------------------------------------------------
// Test 1: Chloroform + sulfuric acid, minimal records
// ---------------------------------------------------------------------------
#[test]
fn chloroform_and_sulfuric_acid() {
    let a = Substance::new("Chloroform", "CHCl3");
    let b = Substance::new("Sulfuric Acid", "H2SO4").with_ph(dec!(1));

    let ca = classify_substance(&a);
    let cb = classify_substance(&b);
    assert_eq!(ca.category, DisposalCategory::OrganicHalogen);
    assert_eq!(cb.category, DisposalCategory::Acid);

    let mixture = analyze_mixture(&[ca, cb]);
    assert_eq!(mixture.category, DisposalCategory::OrganicHalogen);
}

// ---------------------------------------------------------------------------
// Test 2: Catalog acid + base -> unsafe mixture and an acid_base warning
// ---------------------------------------------------------------------------
#[test]
fn catalog_acid_and_base() {
    let cart = from_catalog(&["hydrochloric acid", "NaOH"]);
    let result = assess_cart(&cart, DisposalPolicy::builtin());

    assert_eq!(result.mixture.branch, MixtureBranch::AcidAlkali);
    assert!(!result.mixture.is_safe);
    assert!(result.warnings.iter().any(|w| w.rule_id == "acid_base"));
    assert!(!result.is_clear());
}

// ---------------------------------------------------------------------------
// Test 3: Nitric acid (oxidizer) with flammable solvents
// ---------------------------------------------------------------------------
#[test]
fn nitric_acid_with_solvents() {
    let cart = from_catalog(&["nitric acid", "acetone", "ethanol"]);
    let result = assess_cart(&cart, DisposalPolicy::builtin());

    let danger: Vec<_> = result
        .warnings
        .iter()
        .filter(|w| w.severity == Severity::Danger)
        .collect();
    assert_eq!(danger.len(), 2);
    assert!(danger.iter().all(|w| w.rule_id == "oxidizer_flammable"));
    assert!(danger.iter().all(|w| w.substance_a == "Nitric Acid"));

    // corrosive acid against organics
    assert!(result
        .warnings
        .iter()
        .any(|w| w.rule_id == "acid_organic" && w.substance_b == "Acetone"));

    // every DANGER before every WARNING
    let first_warning = result
        .warnings
        .iter()
        .position(|w| w.severity == Severity::Warning)
        .unwrap();
    assert!(result.warnings[..first_warning]
        .iter()
        .all(|w| w.severity == Severity::Danger));

    assert_eq!(result.mixture.branch, MixtureBranch::AcidOrganic);
}

// ---------------------------------------------------------------------------
// Test 4: Alkali + organic through the disposal assessor
// ---------------------------------------------------------------------------
#[test]
fn alkali_with_ethanol_is_neutralizable() {
    let cart = from_catalog(&["sodium hydroxide", "에탄올"]);
    let result = assess_cart(&cart, DisposalPolicy::builtin());

    assert_eq!(result.mixture.branch, MixtureBranch::AlkaliOrganic);
    assert_eq!(result.mixture.reason_key, DisposalMethod::DiluteAndNeutralize.key());
    assert!(result.mixture.is_safe);
}

#[test]
fn alkali_with_acetone_is_reactive_waste() {
    // acetone boils at 56 °C
    let cart = from_catalog(&["sodium hydroxide", "acetone"]);
    let result = assess_cart(&cart, DisposalPolicy::builtin());

    assert_eq!(result.mixture.reason_key, "disposal_method_case2");
    let details = result.mixture.disposal_details.unwrap();
    assert_eq!(details.neutralization, Neutralization::Prohibited);
    assert!(!result.mixture.is_safe);
}

#[test]
fn alkali_with_insoluble_organic_is_sealed() {
    let mut cart = from_catalog(&["ammonia"]);
    cart.push(Substance::new("Toluene", "C7H8").with_physical(PhysicalProperties {
        boiling_point: Some(dec!(111)),
        log_kow: Some(dec!(2.73)),
        ..Default::default()
    }));
    let result = assess_cart(&cart, DisposalPolicy::builtin());
    assert_eq!(result.mixture.reason_key, "disposal_method_case3");
}

// ---------------------------------------------------------------------------
// Test 5: A stricter policy changes the alkali + organic verdict
// ---------------------------------------------------------------------------
#[test]
fn custom_policy_boiling_point() {
    let strict = parse_policy_str(
        r#"{
            "name": "Strict",
            "version": "2.0",
            "solubility": { "soluble_below_log_kow": "1" },
            "neutralization": {
                "unstable_keywords": ["unstable"],
                "max_boiling_point_c": "80",
                "risk_threshold": 2,
                "oxidizer_keywords": ["oxidiz"],
                "corrosive_keywords": ["corrosive"],
                "self_reactive_keywords": ["self-reactive"]
            }
        }"#,
    )
    .unwrap();

    let cart = from_catalog(&["sodium hydroxide", "ethanol"]);
    let default_result = assess_cart(&cart, DisposalPolicy::builtin());
    let strict_result = assess_cart(&cart, &strict);

    // ethanol boils at 78 °C
    assert_eq!(default_result.mixture.reason_key, "disposal_method_case1");
    assert_eq!(strict_result.mixture.reason_key, "disposal_method_case2");
}

// ---------------------------------------------------------------------------
// Test 6: Classification does not trust stored organic flags
// ---------------------------------------------------------------------------
#[test]
fn stored_flags_are_recomputed() {
    let cart = from_catalog(&["acetic acid", "hydrochloric acid"]);
    let result = assess_cart(&cart, DisposalPolicy::builtin());

    // acetic acid has carbon -> organic despite its pH
    assert_eq!(
        result.classifications[0].category,
        DisposalCategory::OrganicNonHalogen
    );
    // HCl is inorganic even though the record marks it halogenated
    assert_eq!(result.classifications[1].category, DisposalCategory::Acid);
    assert!(!result.classifications[1].substance.is_organic());
    assert_eq!(result.mixture.branch, MixtureBranch::AcidOrganic);
}

// ---------------------------------------------------------------------------
// Test 7: Repeatability and order independence
// ---------------------------------------------------------------------------
#[test]
fn compatibility_is_repeatable_and_order_independent() {
    let forward = from_catalog(&["nitric acid", "methanol", "ammonia"]);
    let mut backward = forward.clone();
    backward.reverse();

    let a = check_compatibility(&forward);
    let b = check_compatibility(&forward);
    assert_eq!(a, b);

    let key = |w: &labsort_core::CompatibilityWarning| {
        let mut pair = [w.substance_a.clone(), w.substance_b.clone()];
        pair.sort();
        (w.rule_id.clone(), pair)
    };
    let mut ka: Vec<_> = a.iter().map(key).collect();
    let mut kb: Vec<_> = check_compatibility(&backward).iter().map(key).collect();
    ka.sort();
    kb.sort();
    assert_eq!(ka, kb);
}

// ---------------------------------------------------------------------------
// Test 8: Lookup failures and the trace
// ---------------------------------------------------------------------------
#[test]
fn unknown_query_is_reported() {
    let err = resolve_all(&BuiltinCatalog, &["ethanol".into(), "unobtainium".into()]).unwrap_err();
    match err {
        LabsortError::UnknownSubstance(q) => assert_eq!(q, "unobtainium"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn trace_matches_assessment() {
    let cart = from_catalog(&["chloroform", "sulfuric acid"]);
    let result = assess_cart(&cart, DisposalPolicy::builtin());
    let trace = build_trace(&result);

    assert_eq!(
        trace.decisions.len(),
        cart.len() + 1 + result.warnings.len()
    );
    assert_eq!(trace.decisions[0].outcome, "ORGANIC_HALOGEN");

    let json = serde_json::to_string(&trace).unwrap();
    assert!(json.contains("\"trace_schema_version\":\"1.0\""));
}

#[test]
fn empty_cart() {
    let result = assess_cart(&[], DisposalPolicy::builtin());
    assert!(result.classifications.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.mixture.reason_key, "cart_empty");
    assert!(result.is_clear());
    assert_eq!(BuiltinCatalog.source_name(), "builtin");
}
