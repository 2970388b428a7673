use crate::model::ParameterDoc;
use vapguard_domain::model::{ParameterModel, ParameterResult};

/// Validate a parameter document's own shape requirements.
///
/// A document that fails here resolves as `Invalid`, which the engine turns
/// into a DENY with a schema-violation reason, evaluated before any business
/// rule. The detail strings are stable: hosts log and alert on them.
pub fn validate_parameter(doc: &ParameterDoc) -> ParameterResult {
    if doc.metadata.namespace.is_empty() {
        return ParameterResult::Invalid("metadata.namespace is required".to_string());
    }
    if doc.spec.is_null() {
        return ParameterResult::Invalid("spec is required".to_string());
    }
    if !doc.spec.is_object() {
        return ParameterResult::Invalid("spec must be a map".to_string());
    }

    ParameterResult::Found(ParameterModel::new(
        doc.metadata.namespace.clone(),
        doc.spec.clone(),
    ))
}
