use crate::checks::utils;
use crate::model::{ParameterModel, ResourceModel};
use serde_json::json;
use vapguard_types::{ids, Denial, FieldPath};

/// A resource field must equal the value the parameter declares.
///
/// The expected value is itself a required parameter field: a parameter that
/// does not carry it fails its own shape requirements, which is a
/// schema-violation deny, not a business-rule one.
pub fn run(
    resource: &ResourceModel,
    param: &ParameterModel,
    path: &str,
    param_path: &str,
) -> Option<Denial> {
    let expected = match param.spec.get(&FieldPath::new(param_path)) {
        Some(v) if !v.is_null() => v,
        _ => {
            return Some(Denial::new(
                ids::CODE_PARAMETER_INVALID,
                format!("invalid policy parameter: spec.{param_path} is required"),
            ));
        }
    };

    match resource.fields.get(&FieldPath::new(path)) {
        Some(actual) if !actual.is_null() => {
            if actual == expected {
                None
            } else {
                Some(
                    Denial::new(
                        ids::CODE_FIELD_MISMATCH,
                        format!(
                            "{path} must be set to {}. It is: {}",
                            utils::display_scalar(expected),
                            utils::display_scalar(actual)
                        ),
                    )
                    .with_data(json!({
                        "path": path,
                        "expected": expected,
                        "actual": actual,
                    })),
                )
            }
        }
        _ => Some(
            Denial::new(
                ids::CODE_FIELD_MISSING,
                format!(
                    "{path} must be set to the namespace specified in the \
                     Validating Admission Policy parameter"
                ),
            )
            .with_data(json!({"path": path})),
        ),
    }
}
