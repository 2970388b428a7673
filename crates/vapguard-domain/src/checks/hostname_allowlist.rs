use crate::checks::utils;
use crate::model::{ParameterModel, ResourceModel};
use serde_json::json;
use vapguard_types::{ids, Denial, FieldPath};

/// Presence + membership companion rule: the list must exist, be non-empty,
/// and every item must be on the parameter's allow-list.
///
/// One reason string covers every failure mode; consumers suffix-match it.
pub fn run(
    resource: &ResourceModel,
    param: &ParameterModel,
    path: &str,
    allowed_path: &str,
) -> Option<Denial> {
    let reason = format!(
        "{path} must be present and each item must be on the spec.{allowed_path} \
         list in the policy parameter"
    );

    let Some(items) = resource.fields.list(&FieldPath::new(path)) else {
        return Some(Denial::new(ids::CODE_HOSTNAMES_NOT_ALLOWED, reason));
    };
    if items.is_empty() {
        return Some(Denial::new(ids::CODE_HOSTNAMES_NOT_ALLOWED, reason));
    }

    let allowed_items = param
        .spec
        .list(&FieldPath::new(allowed_path))
        .unwrap_or(&[]);
    let allowed = utils::string_items(allowed_items);

    for item in items {
        // A non-string item can never be on the allow-list.
        let ok = item.as_str().is_some_and(|s| allowed.contains(&s));
        if !ok {
            return Some(
                Denial::new(ids::CODE_HOSTNAMES_NOT_ALLOWED, reason)
                    .with_data(json!({"item": item, "allowed": allowed})),
            );
        }
    }

    None
}
