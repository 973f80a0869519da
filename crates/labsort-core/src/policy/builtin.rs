use super::schema::DisposalPolicy;
use std::sync::LazyLock;

const DEFAULT_POLICY_JSON: &str = include_str!("../../../../data/default-policy.json");

static DEFAULT_POLICY: LazyLock<DisposalPolicy> = LazyLock::new(|| {
    serde_json::from_str(DEFAULT_POLICY_JSON).expect("embedded default-policy.json is valid")
});

/// The policy used when the caller does not supply one.
pub fn default_policy() -> &'static DisposalPolicy {
    &DEFAULT_POLICY
}

impl DisposalPolicy {
    pub fn builtin() -> &'static DisposalPolicy {
        default_policy()
    }
}
