use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Verdict is intentionally binary: the host either persists the resource or
/// rejects it with the denial's reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Allow,
    Deny,
}

/// The failing rule's identity and diagnostic text.
///
/// `reason` is part of the external contract: consumers suffix-match it, so
/// the exact wording belongs to the evaluator that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Denial {
    pub code: String,
    pub reason: String,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

impl Denial {
    pub fn new(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            reason: reason.into(),
            data: JsonValue::Null,
        }
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = data;
        self
    }
}

/// Outcome of evaluating one policy chain against one resource.
///
/// Invariant: `denial` is `Some` (with a non-empty reason) iff the verdict is
/// `Deny`; the constructors are the only way these fields are set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Decision {
    pub policy_id: String,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denial: Option<Denial>,
}

impl Decision {
    pub fn allow(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            verdict: Verdict::Allow,
            denial: None,
        }
    }

    pub fn deny(policy_id: impl Into<String>, denial: Denial) -> Self {
        Self {
            policy_id: policy_id.into(),
            verdict: Verdict::Deny,
            denial: Some(denial),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.verdict == Verdict::Allow
    }

    /// Reason string; empty iff the verdict is `Allow`.
    pub fn reason(&self) -> &str {
        self.denial.as_ref().map(|d| d.reason.as_str()).unwrap_or("")
    }
}
