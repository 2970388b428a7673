use crate::model::ResourceModel;
use serde_json::json;
use vapguard_types::{ids, Denial};

/// Annotation must name the resource's own namespace.
pub fn run(resource: &ResourceModel, annotation: &str) -> Option<Denial> {
    if resource.fields.annotation(annotation) == Some(resource.namespace.as_str()) {
        return None;
    }

    Some(
        Denial::new(
            ids::CODE_ANNOTATION_NAMESPACE_MISMATCH,
            format!(
                "metadata.annotations.{annotation} must be set to the namespace of the {}",
                resource.kind
            ),
        )
        .with_data(json!({
            "annotation": annotation,
            "namespace": resource.namespace,
        })),
    )
}
