use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flags carried on a substance record. `is_organic` and `is_halogenated`
/// are recomputed from the formula during classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalProperties {
    #[serde(default)]
    pub is_organic: bool,
    #[serde(default)]
    pub is_halogenated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<Decimal>,
}

/// Physical data as reported by a safety data sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalProperties {
    /// Free text, e.g. "Miscible with water".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solubility: Option<String>,
    /// Degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_point: Option<Decimal>,
    /// Degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boiling_point: Option<Decimal>,
    /// log10 of the octanol-water partition coefficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_kow: Option<Decimal>,
    /// Free text from the stability/reactivity section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<String>,
}

/// GHS signal word and hazard statements (e.g. "H225: Highly flammable liquid and vapour").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardInfo {
    #[serde(default)]
    pub signal: String,
    #[serde(default)]
    pub hazard_statements: Vec<String>,
}

/// A substance record as produced by a lookup service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substance {
    pub name: String,
    #[serde(default)]
    pub cas_number: String,
    #[serde(default)]
    pub formula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecular_weight: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ChemicalProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_properties: Option<PhysicalProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard: Option<HazardInfo>,
}

impl Substance {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            ..Self::default()
        }
    }

    pub fn ph(&self) -> Option<Decimal> {
        self.properties.as_ref().and_then(|p| p.ph)
    }

    /// The organic flag as stored on the record. Only meaningful after classification.
    pub fn is_organic(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| p.is_organic)
    }

    pub fn solubility(&self) -> Option<&str> {
        self.physical_properties
            .as_ref()
            .and_then(|p| p.solubility.as_deref())
    }

    pub fn stability(&self) -> Option<&str> {
        self.physical_properties
            .as_ref()
            .and_then(|p| p.stability.as_deref())
    }

    pub fn boiling_point(&self) -> Option<Decimal> {
        self.physical_properties.as_ref().and_then(|p| p.boiling_point)
    }

    pub fn log_kow(&self) -> Option<Decimal> {
        self.physical_properties.as_ref().and_then(|p| p.log_kow)
    }

    pub fn hazard_statements(&self) -> &[String] {
        self.hazard
            .as_ref()
            .map(|h| h.hazard_statements.as_slice())
            .unwrap_or(&[])
    }

    /// Return a copy whose derived flags are replaced; `self` is left untouched.
    pub fn with_derived_flags(&self, is_organic: bool, is_halogenated: bool) -> Substance {
        let mut derived = self.clone();
        let props = derived.properties.get_or_insert_with(ChemicalProperties::default);
        props.is_organic = is_organic;
        props.is_halogenated = is_halogenated;
        derived
    }

    pub fn with_ph(mut self, ph: Decimal) -> Self {
        self.properties.get_or_insert_with(ChemicalProperties::default).ph = Some(ph);
        self
    }

    pub fn with_physical(mut self, physical: PhysicalProperties) -> Self {
        self.physical_properties = Some(physical);
        self
    }

    pub fn with_hazard_statements<I, S>(mut self, statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hazard
            .get_or_insert_with(HazardInfo::default)
            .hazard_statements
            .extend(statements.into_iter().map(Into::into));
        self
    }
}

/// Disposal bin a substance or mixture is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisposalCategory {
    Acid,
    Alkali,
    Neutral,
    OrganicHalogen,
    OrganicNonHalogen,
    Unknown,
}

impl DisposalCategory {
    /// Bin colour and label key shown for a single substance in this category.
    pub fn presentation(self) -> (BinColor, &'static str) {
        match self {
            DisposalCategory::Acid => (BinColor::Red, "label_acid"),
            DisposalCategory::Alkali => (BinColor::Blue, "label_alkali"),
            DisposalCategory::Neutral => (BinColor::Green, "label_neutral"),
            DisposalCategory::OrganicHalogen => (BinColor::Orange, "label_organic"),
            DisposalCategory::OrganicNonHalogen => (BinColor::Yellow, "label_organic"),
            DisposalCategory::Unknown => (BinColor::Gray, "mix_label_unknown"),
        }
    }

    pub fn is_organic(self) -> bool {
        matches!(
            self,
            DisposalCategory::OrganicHalogen | DisposalCategory::OrganicNonHalogen
        )
    }
}

impl fmt::Display for DisposalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisposalCategory::Acid => write!(f, "ACID"),
            DisposalCategory::Alkali => write!(f, "ALKALI"),
            DisposalCategory::Neutral => write!(f, "NEUTRAL"),
            DisposalCategory::OrganicHalogen => write!(f, "ORGANIC_HALOGEN"),
            DisposalCategory::OrganicNonHalogen => write!(f, "ORGANIC_NON_HALOGEN"),
            DisposalCategory::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Colour tag for the presentation layer. Opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BinColor {
    Red,
    DarkRed,
    Blue,
    DeepBlue,
    Green,
    Orange,
    Yellow,
    Purple,
    Gray,
}

impl fmt::Display for BinColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            BinColor::Red => "red",
            BinColor::DarkRed => "dark-red",
            BinColor::Blue => "blue",
            BinColor::DeepBlue => "deep-blue",
            BinColor::Green => "green",
            BinColor::Orange => "orange",
            BinColor::Yellow => "yellow",
            BinColor::Purple => "purple",
            BinColor::Gray => "gray",
        };
        write!(f, "{tag}")
    }
}
