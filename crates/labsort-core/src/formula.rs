//! Molecular formula tokenizing.
//!
//! Formulas are read as a flat run of `Symbol[count]` tokens; grouping,
//! charges and hydrate dots are not interpreted, and anything that is not an
//! element token is skipped.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static ELEMENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]?)([0-9]*)").expect("element token pattern is valid"));

pub const HALOGENS: &[&str] = &["F", "Cl", "Br", "I"];

/// Element symbol -> atom count. Every stored count is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementCounts(BTreeMap<String, u32>);

impl ElementCounts {
    pub fn get(&self, symbol: &str) -> Option<u32> {
        self.0.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Carbon present.
    pub fn is_organic(&self) -> bool {
        self.contains("C")
    }

    /// Any of F, Cl, Br, I present.
    pub fn has_halogen(&self) -> bool {
        HALOGENS.iter().any(|h| self.contains(h))
    }

    fn add(&mut self, symbol: &str, count: u32) {
        if count == 0 {
            return;
        }
        let slot = self.0.entry(symbol.to_string()).or_default();
        *slot = slot.saturating_add(count);
    }
}

impl fmt::Display for ElementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(el, n)| format!("{el}:{n}")).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Parse a molecular formula into element counts.
///
/// Repeated occurrences of an element are summed (`C2H5OH` gives `H:6`).
/// Never fails: malformed input yields whatever complete tokens it contains.
pub fn parse_formula(formula: &str) -> ElementCounts {
    let mut counts = ElementCounts::default();

    for caps in ELEMENT_TOKEN.captures_iter(formula) {
        let symbol = &caps[1];
        let digits = &caps[2];
        let count = if digits.is_empty() {
            1
        } else {
            // Digit runs too long for u32 saturate rather than fail
            digits.parse::<u32>().unwrap_or(u32::MAX)
        };
        counts.add(symbol, count);
    }

    counts
}
