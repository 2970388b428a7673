use crate::decision::{Denial, Verdict};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Stable schema identifier for serialized decision records.
pub const SCHEMA_DECISION_V1: &str = "vapguard.decision.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Host-facing decision envelope.
///
/// One record per admission request. The evaluation core is pure, so the
/// record carries no timestamps or host metadata; hosts that need request
/// correlation attach it at their own layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionRecord {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,

    pub policy_id: String,
    pub kind: String,
    pub namespace: String,

    pub verdict: Verdict,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup and trending. A hash of:
    /// `policy_id + code + kind + namespace + salient fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

impl DecisionRecord {
    /// Build a record scaffold for a policy/resource pair; callers fill the
    /// verdict fields from the engine's `Decision`.
    pub fn new(
        policy_id: impl Into<String>,
        kind: impl Into<String>,
        namespace: impl Into<String>,
        verdict: Verdict,
    ) -> Self {
        Self {
            schema: SCHEMA_DECISION_V1.to_string(),
            tool: ToolMeta {
                name: "vapguard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            policy_id: policy_id.into(),
            kind: kind.into(),
            namespace: namespace.into(),
            verdict,
            code: None,
            reason: None,
            help: None,
            fingerprint: None,
            data: JsonValue::Null,
        }
    }

    pub fn with_denial(mut self, denial: &Denial) -> Self {
        self.verdict = Verdict::Deny;
        self.code = Some(denial.code.clone());
        self.reason = Some(denial.reason.clone());
        self.data = denial.data.clone();
        self
    }
}
