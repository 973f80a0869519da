//! The incompatibility rule table.
//!
//! Each rule is directional: `applies(a, b)` asks whether adding `b` to `a`
//! is hazardous because of what `a` is. The checker evaluates every ordered
//! pair, so symmetric coverage comes from the caller, not the rule.

use super::patterns;
use crate::formula::parse_formula;
use crate::hazard::{HazardGroup, HazardProfile};
use crate::model::Substance;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const STRONG_ACID_PH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
const NEUTRAL_PH: Decimal = Decimal::from_parts(7, 0, 0, false, 0);
const STRONG_BASE_PH: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Danger,
    Warning,
}

/// A substance reduced to the facts the rules look at.
#[derive(Debug, Clone)]
pub struct Screened<'a> {
    pub name: &'a str,
    pub hazards: HazardProfile,
    pub is_organic: bool,
    pub is_aqueous: bool,
    pub ph: Option<Decimal>,
    pub is_cyanide: bool,
    pub is_sulfide: bool,
    pub is_reactive_metal: bool,
}

impl<'a> Screened<'a> {
    pub fn from_substance(s: &'a Substance) -> Self {
        let name = s.name.as_str();
        let formula = s.formula.as_str();
        // Formula wins when present; otherwise trust the record's flag
        let is_organic = if formula.trim().is_empty() {
            s.is_organic()
        } else {
            parse_formula(formula).is_organic()
        };

        Self {
            name,
            hazards: HazardProfile::from_statements(s.hazard_statements()),
            is_organic,
            is_aqueous: patterns::is_aqueous(s.solubility()),
            ph: s.ph(),
            is_cyanide: patterns::is_cyanide(name, formula),
            is_sulfide: patterns::is_sulfide(name, formula),
            is_reactive_metal: patterns::is_reactive_metal(name, formula),
        }
    }

    pub fn has(&self, group: HazardGroup) -> bool {
        self.hazards.has(group)
    }

    /// pH below 4, or corrosive with a known pH below 7.
    pub fn is_acidic(&self) -> bool {
        match self.ph {
            Some(ph) => ph < STRONG_ACID_PH || (self.has(HazardGroup::Corrosive) && ph < NEUTRAL_PH),
            None => false,
        }
    }

    pub fn is_basic(&self) -> bool {
        self.ph.is_some_and(|ph| ph > STRONG_BASE_PH)
    }

    /// Corrosive and not known to be neutral or basic.
    pub fn is_corrosive_acid(&self) -> bool {
        self.has(HazardGroup::Corrosive) && self.ph.map_or(true, |ph| ph < NEUTRAL_PH)
    }
}

pub struct CompatRule {
    pub id: &'static str,
    pub severity: Severity,
    pub message_key: &'static str,
    pub applies: fn(&Screened<'_>, &Screened<'_>) -> bool,
}

pub static RULES: &[CompatRule] = &[
    // Fire and explosion
    CompatRule {
        id: "oxidizer_flammable",
        severity: Severity::Danger,
        message_key: "compat_oxidizer_flammable",
        applies: |a, b| a.has(HazardGroup::Oxidizer) && b.has(HazardGroup::Flammable),
    },
    CompatRule {
        id: "oxidizer_organic",
        severity: Severity::Warning,
        message_key: "compat_oxidizer_organic",
        applies: |a, b| {
            a.has(HazardGroup::Oxidizer) && b.is_organic && !b.has(HazardGroup::Flammable)
        },
    },
    CompatRule {
        id: "water_reactive",
        severity: Severity::Danger,
        message_key: "compat_water_reactive",
        applies: |a, b| a.has(HazardGroup::WaterReactive) && b.is_aqueous,
    },
    CompatRule {
        id: "pyrophoric",
        severity: Severity::Danger,
        message_key: "compat_pyrophoric",
        applies: |a, _| a.has(HazardGroup::Pyrophoric),
    },
    CompatRule {
        id: "self_reactive",
        severity: Severity::Danger,
        message_key: "compat_self_reactive",
        applies: |a, _| a.has(HazardGroup::SelfReactive),
    },
    CompatRule {
        id: "explosive",
        severity: Severity::Danger,
        message_key: "compat_explosive",
        applies: |a, _| a.has(HazardGroup::Explosive),
    },
    // Toxic gas
    CompatRule {
        id: "acid_cyanide",
        severity: Severity::Danger,
        message_key: "compat_acid_cyanide",
        applies: |a, b| a.is_acidic() && b.is_cyanide,
    },
    CompatRule {
        id: "acid_sulfide",
        severity: Severity::Danger,
        message_key: "compat_acid_sulfide",
        applies: |a, b| a.is_acidic() && b.is_sulfide,
    },
    // Reaction heat and hydrogen
    CompatRule {
        id: "acid_metal",
        severity: Severity::Warning,
        message_key: "compat_acid_metal",
        applies: |a, b| a.is_acidic() && b.is_reactive_metal,
    },
    CompatRule {
        id: "acid_base",
        severity: Severity::Warning,
        message_key: "compat_acid_base",
        applies: |a, b| a.is_acidic() && b.is_basic(),
    },
    CompatRule {
        id: "acid_organic",
        severity: Severity::Warning,
        message_key: "compat_acid_organic",
        applies: |a, b| a.is_corrosive_acid() && b.is_organic,
    },
];
