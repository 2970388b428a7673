use crate::model::ResourceModel;
use serde_json::json;
use vapguard_types::{ids, Denial, FieldPath};

/// Closed set of permitted keys on each entry of a list field.
///
/// `exempt` keys (like a volume's `name`) are metadata, not sources, and are
/// never flagged. A non-map entry carries no keys to validate.
pub fn run(
    resource: &ResourceModel,
    path: &str,
    label: &str,
    exempt: &[&str],
    allowed: &[&str],
) -> Option<Denial> {
    let entries = resource.fields.list(&FieldPath::new(path))?;

    for (index, entry) in entries.iter().enumerate() {
        let Some(map) = entry.as_object() else {
            continue;
        };
        for key in map.keys() {
            if exempt.contains(&key.as_str()) {
                continue;
            }
            if !allowed.contains(&key.as_str()) {
                return Some(
                    Denial::new(
                        ids::CODE_VOLUME_SOURCE_NOT_ALLOWED,
                        format!(
                            "{path}[{index}].{key} is not a permitted {label}. \
                             Permitted: {}",
                            allowed.join(", ")
                        ),
                    )
                    .with_data(json!({"index": index, "key": key, "allowed": allowed})),
                );
            }
        }
    }

    None
}
