pub mod builtin;
pub mod schema;

use crate::error::LabsortError;
use schema::DisposalPolicy;
use std::path::Path;

/// Load a policy from a JSON file.
pub fn load_policy(path: &Path) -> Result<DisposalPolicy, LabsortError> {
    let content = std::fs::read_to_string(path).map_err(|e| LabsortError::PolicyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_policy(&content, path)
}

/// Parse a policy from a JSON string, attributing errors to `source`.
pub fn parse_policy(json: &str, source: &Path) -> Result<DisposalPolicy, LabsortError> {
    serde_json::from_str::<DisposalPolicy>(json)
        .map_err(|e| LabsortError::PolicyLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })
        .and_then(|policy| validate_policy(&policy).map(|()| policy))
        .inspect_err(|e| {
            tracing::warn!(path = %source.display(), error = %e, "rejected policy file");
        })
}

/// Parse a policy from a JSON string (no file path context).
pub fn parse_policy_str(json: &str) -> Result<DisposalPolicy, LabsortError> {
    let policy: DisposalPolicy = serde_json::from_str(json).map_err(LabsortError::Json)?;
    validate_policy(&policy)?;
    Ok(policy)
}

/// Validate that a policy is well-formed.
pub fn validate_policy(policy: &DisposalPolicy) -> Result<(), LabsortError> {
    let neu = &policy.neutralization;
    if neu.risk_threshold == 0 {
        return Err(LabsortError::PolicyInvalid(
            "risk_threshold must be at least 1".into(),
        ));
    }

    let keyword_lists = [
        ("unstable_keywords", &neu.unstable_keywords),
        ("oxidizer_keywords", &neu.oxidizer_keywords),
        ("corrosive_keywords", &neu.corrosive_keywords),
        ("self_reactive_keywords", &neu.self_reactive_keywords),
    ];

    for (field, keywords) in keyword_lists {
        if keywords.is_empty() {
            return Err(LabsortError::PolicyInvalid(format!(
                "{field} must not be empty"
            )));
        }
        for kw in keywords {
            if kw.trim().is_empty() {
                return Err(LabsortError::PolicyInvalid(format!(
                    "{field} contains an empty keyword"
                )));
            }
            if *kw != kw.to_lowercase() {
                return Err(LabsortError::PolicyInvalid(format!(
                    "{field} keyword '{kw}' must be lowercase"
                )));
            }
        }
    }

    Ok(())
}
