use crate::document::Document;
use serde_json::Value as JsonValue;

/// The candidate object being admitted.
///
/// Constructed fresh per admission request, immutable for the duration of
/// one evaluation, discarded after the verdict is produced.
#[derive(Clone, Debug)]
pub struct ResourceModel {
    pub kind: String,
    /// Empty for cluster-scoped kinds.
    pub namespace: String,
    pub fields: Document,
}

impl ResourceModel {
    pub fn new(kind: impl Into<String>, namespace: impl Into<String>, fields: JsonValue) -> Self {
        Self {
            kind: kind.into(),
            namespace: namespace.into(),
            fields: Document::new(fields),
        }
    }
}

/// Policy configuration bound to exactly one namespace.
#[derive(Clone, Debug)]
pub struct ParameterModel {
    pub namespace: String,
    /// The parameter's `spec` subtree; its shape is policy-specific.
    pub spec: Document,
}

impl ParameterModel {
    pub fn new(namespace: impl Into<String>, spec: JsonValue) -> Self {
        Self {
            namespace: namespace.into(),
            spec: Document::new(spec),
        }
    }
}

/// Tri-state outcome of parameter resolution.
///
/// `Absent` is an explicit marker, never a default empty document: several
/// policies must deny outright when no parameter exists, so callers can not
/// be allowed to conflate "no restriction" with "no parameter".
#[derive(Clone, Debug)]
pub enum ParameterResult {
    Found(ParameterModel),
    Absent,
    /// The parameter exists but fails its own shape requirements. The reason
    /// is a schema-violation detail, distinct from business-rule text.
    Invalid(String),
}

/// Parameter lookup capability supplied by the host.
///
/// Resolution is an exact match on namespace with no wildcard or
/// default-namespace fallback, and at most one parameter exists per
/// (policy id, namespace) pair. The core treats a resolution as a single
/// atomic read; retries, caching, and deadlines are the host's concern.
pub trait ParameterLookup {
    fn resolve(&self, policy_id: &str, namespace: &str) -> ParameterResult;
}
