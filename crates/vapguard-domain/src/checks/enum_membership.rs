use crate::checks::utils;
use crate::model::{ParameterModel, ResourceModel};
use serde_json::json;
use vapguard_types::{ids, Denial, FieldPath};

/// Resource field must be on the parameter's allow-list.
///
/// An absent (or explicitly null) field is evaluated as if it held `default`,
/// so removing the default from the allow-list flips resources that rely on
/// it. A present non-string value can never be on the list.
pub fn run(
    resource: &ResourceModel,
    param: &ParameterModel,
    path: &str,
    default: &str,
    allowed_path: &str,
) -> Option<Denial> {
    let value = match resource.fields.get(&FieldPath::new(path)) {
        None => default.to_string(),
        Some(v) if v.is_null() => default.to_string(),
        Some(v) => match v.as_str() {
            Some(s) => s.to_string(),
            None => utils::display_scalar(v),
        },
    };

    let allowed_items = param
        .spec
        .list(&FieldPath::new(allowed_path))
        .unwrap_or(&[]);
    let allowed = utils::string_items(allowed_items);

    if allowed.contains(&value.as_str()) {
        return None;
    }

    Some(
        Denial::new(
            ids::CODE_VALUE_NOT_ALLOWED,
            format!(
                "{path}: Unsupported value: \"{value}\": supported values: {}",
                utils::quoted_list(&allowed)
            ),
        )
        .with_data(json!({
            "path": path,
            "value": value,
            "allowed": allowed,
        })),
    )
}
