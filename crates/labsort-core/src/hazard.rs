//! Typed GHS hazard codes.
//!
//! Free-text hazard statements are reduced to a set of [`HazardCode`]s once,
//! at the boundary. Rule logic downstream only asks about [`HazardGroup`]
//! membership.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

static H_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"H([0-9]{3})").expect("H-code pattern is valid"));

/// A GHS hazard statement code, e.g. `H225`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HazardCode(pub u16);

impl fmt::Display for HazardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{:03}", self.0)
    }
}

/// Hazard families used by the compatibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardGroup {
    Oxidizer,
    Flammable,
    WaterReactive,
    SelfReactive,
    Pyrophoric,
    Corrosive,
    Explosive,
}

impl HazardGroup {
    pub const ALL: [HazardGroup; 7] = [
        HazardGroup::Oxidizer,
        HazardGroup::Flammable,
        HazardGroup::WaterReactive,
        HazardGroup::SelfReactive,
        HazardGroup::Pyrophoric,
        HazardGroup::Corrosive,
        HazardGroup::Explosive,
    ];

    pub fn contains(self, code: HazardCode) -> bool {
        let n = code.0;
        match self {
            HazardGroup::Oxidizer => (270..=272).contains(&n),
            HazardGroup::Flammable => (220..=228).contains(&n),
            HazardGroup::WaterReactive => (260..=261).contains(&n),
            HazardGroup::SelfReactive => (240..=242).contains(&n),
            HazardGroup::Pyrophoric => n == 250,
            HazardGroup::Corrosive => n == 314,
            HazardGroup::Explosive => (200..=205).contains(&n),
        }
    }
}

/// Deduplicated hazard codes of one substance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HazardProfile {
    codes: BTreeSet<HazardCode>,
}

impl HazardProfile {
    /// Collect every `H###` token from the given statements.
    pub fn from_statements<S: AsRef<str>>(statements: &[S]) -> Self {
        let codes = statements
            .iter()
            .flat_map(|s| {
                H_CODE
                    .captures_iter(s.as_ref())
                    .filter_map(|c| c[1].parse::<u16>().ok())
                    .collect::<Vec<_>>()
            })
            .map(HazardCode)
            .collect();
        Self { codes }
    }

    pub fn has(&self, group: HazardGroup) -> bool {
        self.codes.iter().any(|c| group.contains(*c))
    }

    pub fn contains(&self, code: HazardCode) -> bool {
        self.codes.contains(&code)
    }

    pub fn codes(&self) -> impl Iterator<Item = HazardCode> + '_ {
        self.codes.iter().copied()
    }

    pub fn groups(&self) -> Vec<HazardGroup> {
        HazardGroup::ALL
            .into_iter()
            .filter(|g| self.has(*g))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_and_dedups_codes() {
        let p = HazardProfile::from_statements(&[
            "H225: Highly flammable liquid and vapour",
            "H319 + H225",
            "no code here",
        ]);
        let codes: Vec<_> = p.codes().collect();
        assert_eq!(codes, vec![HazardCode(225), HazardCode(319)]);
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        let p = HazardProfile::from_statements(&["H\u{0662}25: lookalike", "H\u{FF13}14"]);
        assert!(p.is_empty());
    }

    #[test]
    fn test_group_membership() {
        let p = HazardProfile::from_statements(&["H272: May intensify fire; oxidizer", "H314"]);
        assert!(p.has(HazardGroup::Oxidizer));
        assert!(p.has(HazardGroup::Corrosive));
        assert!(!p.has(HazardGroup::Flammable));
        assert_eq!(p.groups(), vec![HazardGroup::Oxidizer, HazardGroup::Corrosive]);
    }

    #[test]
    fn test_group_boundaries() {
        assert!(HazardGroup::Flammable.contains(HazardCode(220)));
        assert!(HazardGroup::Flammable.contains(HazardCode(228)));
        assert!(!HazardGroup::Flammable.contains(HazardCode(229)));
        assert!(HazardGroup::Explosive.contains(HazardCode(205)));
        assert!(!HazardGroup::Explosive.contains(HazardCode(206)));
        assert!(!HazardGroup::WaterReactive.contains(HazardCode(262)));
    }

    #[test]
    fn test_empty_statements() {
        let p = HazardProfile::from_statements::<&str>(&[]);
        assert!(p.is_empty());
        assert!(p.groups().is_empty());
    }

    #[test]
    fn test_code_display_is_zero_padded() {
        assert_eq!(HazardCode(225).to_string(), "H225");
        assert_eq!(HazardCode(7).to_string(), "H007");
    }
}
