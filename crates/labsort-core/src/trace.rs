use crate::compat::{CompatibilityWarning, Severity};
use crate::formula::parse_formula;
use crate::hazard::HazardProfile;
use crate::{CartAssessment, Classification, MixtureResult};
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    Critical,
    Important,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    ParseFormula,
    ExtractHazards,
    CategoryDecision,
    MixtureRule,
    DisposalAssessment,
    PairRule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceDecisionTarget {
    Substance,
    Mixture,
    Pair,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDecision {
    pub decision_id: String,
    pub target: TraceDecisionTarget,
    /// Substance name, or "A + B" for pairs. Absent for the mixture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub outcome: String,
    pub reason_key: String,
    pub severity: TraceSeverity,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceBundle {
    pub trace_schema_version: String,
    pub decisions: Vec<TraceDecision>,
}

impl Default for TraceBundle {
    fn default() -> Self {
        Self {
            trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
            decisions: Vec::new(),
        }
    }
}

/// Explain every decision in an assessment.
pub fn build_trace(assessment: &CartAssessment) -> TraceBundle {
    let mut bundle = TraceBundle::default();

    for (idx, c) in assessment.classifications.iter().enumerate() {
        bundle.decisions.push(substance_decision(idx, c));
    }
    bundle.decisions.push(mixture_decision(&assessment.mixture));
    for (idx, w) in assessment.warnings.iter().enumerate() {
        bundle.decisions.push(pair_decision(idx, w));
    }

    bundle
}

fn substance_decision(idx: usize, c: &Classification) -> TraceDecision {
    let s = &c.substance;
    let elements = parse_formula(&s.formula);
    let hazards = HazardProfile::from_statements(s.hazard_statements());
    let codes: Vec<String> = hazards.codes().map(|h| h.to_string()).collect();

    let params: Vec<String> = c
        .reason_params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();

    TraceDecision {
        decision_id: format!("dec_sub_{idx}"),
        target: TraceDecisionTarget::Substance,
        subject: Some(s.name.clone()),
        outcome: c.category.to_string(),
        reason_key: c.reason_key.clone(),
        severity: if c.is_safe {
            TraceSeverity::Info
        } else {
            TraceSeverity::Important
        },
        steps: vec![
            TraceStep {
                step_type: TraceStepType::ParseFormula,
                message: format!(
                    "Parsed '{}' -> {} (organic: {}, halogen: {})",
                    s.formula,
                    elements,
                    elements.is_organic(),
                    elements.has_halogen()
                ),
            },
            TraceStep {
                step_type: TraceStepType::ExtractHazards,
                message: if codes.is_empty() {
                    "No hazard codes".to_string()
                } else {
                    format!("Hazard codes: {}", codes.join(", "))
                },
            },
            TraceStep {
                step_type: TraceStepType::CategoryDecision,
                message: if params.is_empty() {
                    format!("{} via {}", c.category, c.reason_key)
                } else {
                    format!("{} via {} ({})", c.category, c.reason_key, params.join(", "))
                },
            },
        ],
    }
}

fn mixture_decision(m: &MixtureResult) -> TraceDecision {
    let mut steps = vec![TraceStep {
        step_type: TraceStepType::MixtureRule,
        message: format!("Matched rule '{:?}' -> {}", m.branch, m.category),
    }];
    if let Some(details) = &m.disposal_details {
        steps.push(TraceStep {
            step_type: TraceStepType::DisposalAssessment,
            message: format!(
                "Organic phase {:?}, neutralization {:?} -> {}",
                details.solubility, details.neutralization, m.reason_key
            ),
        });
    }

    TraceDecision {
        decision_id: "dec_mixture".to_string(),
        target: TraceDecisionTarget::Mixture,
        subject: None,
        outcome: m.category.to_string(),
        reason_key: m.reason_key.clone(),
        severity: if m.is_safe {
            TraceSeverity::Important
        } else {
            TraceSeverity::Critical
        },
        steps,
    }
}

fn pair_decision(idx: usize, w: &CompatibilityWarning) -> TraceDecision {
    TraceDecision {
        decision_id: format!("dec_pair_{idx}"),
        target: TraceDecisionTarget::Pair,
        subject: Some(format!("{} + {}", w.substance_a, w.substance_b)),
        outcome: format!("{:?}", w.severity).to_uppercase(),
        reason_key: w.message_key.clone(),
        severity: match w.severity {
            Severity::Danger => TraceSeverity::Critical,
            Severity::Warning => TraceSeverity::Important,
        },
        steps: vec![TraceStep {
            step_type: TraceStepType::PairRule,
            message: format!(
                "Rule '{}' fired for {} against {}",
                w.rule_id, w.substance_a, w.substance_b
            ),
        }],
    }
}
