use crate::model::ResourceModel;
use serde_json::json;
use vapguard_types::{ids, Denial, FieldPath};

/// Deny when any list entry carries the forbidden kind/name pair.
///
/// An absent list, or a list with no matching entry, passes.
pub fn run(
    resource: &ResourceModel,
    path: &str,
    kind_field: &str,
    forbidden_kind: &str,
    name_field: &str,
    forbidden_name: &str,
) -> Option<Denial> {
    let entries = resource.fields.list(&FieldPath::new(path))?;

    for (index, entry) in entries.iter().enumerate() {
        let kind = entry.get(kind_field).and_then(|v| v.as_str());
        let name = entry.get(name_field).and_then(|v| v.as_str());

        if kind == Some(forbidden_kind) && name == Some(forbidden_name) {
            return Some(
                Denial::new(
                    ids::CODE_FORBIDDEN_SUBJECT,
                    format!(
                        "{path}[{index}] must not reference the \
                         \"{forbidden_name}\" {forbidden_kind}"
                    ),
                )
                .with_data(json!({"index": index, "entry": entry})),
            );
        }
    }

    None
}
