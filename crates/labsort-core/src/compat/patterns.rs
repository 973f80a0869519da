//! Name/formula detectors for substances that react dangerously with acids.
//!
//! Each detector is tested against the name and the formula separately.
//! Korean names are matched as plain substrings.

use regex::Regex;
use std::sync::LazyLock;

/// Cyanides release HCN with acids.
static CYANIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:cyanid)|\b(?:CN|HCN|KCN|NaCN)\b|시안|청산").expect("cyanide pattern is valid")
});

/// Sulfides release H2S with acids.
static SULFIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:sulfide|sulphide)|\b(?:Na2S|FeS|H2S)\b|황화").expect("sulfide pattern is valid")
});

/// Metals that release H2 with acids.
static REACTIVE_METAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:sodium|potassium|lithium|calcium|magnesium|zinc|iron|aluminum|aluminium)\b|나트륨|칼륨|리튬|칼슘|마그네슘|아연|철|알루미늄",
    )
    .expect("reactive metal pattern is valid")
});

fn matches_either(pattern: &Regex, name: &str, formula: &str) -> bool {
    pattern.is_match(name) || pattern.is_match(formula)
}

pub fn is_cyanide(name: &str, formula: &str) -> bool {
    matches_either(&CYANIDE, name, formula)
}

pub fn is_sulfide(name: &str, formula: &str) -> bool {
    matches_either(&SULFIDE, name, formula)
}

pub fn is_reactive_metal(name: &str, formula: &str) -> bool {
    matches_either(&REACTIVE_METAL, name, formula)
}

/// Solubility text suggesting the substance is, or dissolves in, water.
pub fn is_aqueous(solubility: Option<&str>) -> bool {
    let Some(text) = solubility else {
        return false;
    };
    let lower = text.to_lowercase();
    lower.contains("miscible") || lower.contains("soluble") || lower.contains("water")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyanide() {
        assert!(is_cyanide("Potassium Cyanide", ""));
        assert!(is_cyanide("Unlabelled salt", "KCN"));
        assert!(is_cyanide("Natriumcyanid", ""));
        assert!(is_cyanide("시안화칼륨", ""));
        assert!(!is_cyanide("Acetonitrile", "C2H3N"));
        // CN must stand alone
        assert!(!is_cyanide("ACNE cream", ""));
    }

    #[test]
    fn test_sulfide() {
        assert!(is_sulfide("Sodium Sulfide", "Na2S"));
        assert!(is_sulfide("Iron sulphide", ""));
        assert!(is_sulfide("X", "FeS"));
        assert!(is_sulfide("황화나트륨", ""));
        assert!(!is_sulfide("Sodium Sulfate", "Na2SO4"));
    }

    #[test]
    fn test_reactive_metal() {
        assert!(is_reactive_metal("Sodium Metal", "Na"));
        assert!(is_reactive_metal("zinc dust", "Zn"));
        assert!(is_reactive_metal("Aluminium powder", "Al"));
        assert!(is_reactive_metal("마그네슘", ""));
        assert!(!is_reactive_metal("Ironwood extract", ""));
        assert!(!is_reactive_metal("Hydrochloric Acid", "HCl"));
    }

    #[test]
    fn test_aqueous() {
        assert!(is_aqueous(Some("Miscible with water")));
        assert!(is_aqueous(Some("soluble")));
        assert!(is_aqueous(Some("aqueous solution in water")));
        assert!(!is_aqueous(Some("reacts violently")));
        assert!(!is_aqueous(None));
    }
}
