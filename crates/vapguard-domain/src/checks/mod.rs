use crate::model::{ParameterModel, ResourceModel};
use crate::policy::CheckSpec;
use vapguard_types::{ids, Denial};

mod enum_membership;
mod field_equality;
mod forbidden_entry;
mod hostname_allowlist;
mod key_allowlist;
mod list_subset;
mod namespace_annotation;
pub(crate) mod utils;


/// Reason text shared by the engine's parameter gate and the defensive path
/// below. Part of the external contract; consumers suffix-match it.
pub const NO_PARAMETER_REASON: &str = "no policy parameter found for namespace";

/// Run one configured evaluator. `None` means pass.
///
/// Parameter-reading evaluators deny with the no-parameter reason if they are
/// ever dispatched without one; the engine's parameter gate makes that
/// unreachable for registered policies.
pub fn run(
    resource: &ResourceModel,
    param: Option<&ParameterModel>,
    check: &CheckSpec,
) -> Option<Denial> {
    let no_param = || Denial::new(ids::CODE_PARAMETER_ABSENT, NO_PARAMETER_REASON);

    match *check {
        CheckSpec::FieldEquality { path, param_path } => {
            let Some(param) = param else {
                return Some(no_param());
            };
            field_equality::run(resource, param, path, param_path)
        }
        CheckSpec::EnumMembership {
            path,
            default,
            allowed_path,
        } => {
            let Some(param) = param else {
                return Some(no_param());
            };
            enum_membership::run(resource, param, path, default, allowed_path)
        }
        CheckSpec::HostnameAllowlist { path, allowed_path } => {
            let Some(param) = param else {
                return Some(no_param());
            };
            hostname_allowlist::run(resource, param, path, allowed_path)
        }
        CheckSpec::ListSubset {
            path,
            patterns_path,
        } => {
            let Some(param) = param else {
                return Some(no_param());
            };
            list_subset::run(resource, param, path, patterns_path)
        }
        CheckSpec::ForbiddenEntry {
            path,
            kind_field,
            forbidden_kind,
            name_field,
            forbidden_name,
        } => forbidden_entry::run(
            resource,
            path,
            kind_field,
            forbidden_kind,
            name_field,
            forbidden_name,
        ),
        CheckSpec::KeyAllowlist {
            path,
            label,
            exempt,
            allowed,
        } => key_allowlist::run(resource, path, label, exempt, allowed),
        CheckSpec::NamespaceAnnotation { annotation } => {
            namespace_annotation::run(resource, annotation)
        }
    }
}
