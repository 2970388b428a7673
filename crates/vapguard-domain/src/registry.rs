//! Static policy registry.
//!
//! Adding a policy means adding a table entry, not touching evaluators.
//! Chains run in declaration order and short-circuit on the first deny.

use crate::policy::{CheckSpec, PolicySpec};
use vapguard_types::ids;

/// Service type assumed when `spec.type` is absent.
pub const DEFAULT_SERVICE_TYPE: &str = "ClusterIP";

/// Closed set of volume sources tenants may use.
pub const PERMITTED_VOLUME_SOURCES: &[&str] = &[
    "configMap",
    "secret",
    "emptyDir",
    "projected",
    "downwardAPI",
    "persistentVolumeClaim",
];

static POLICIES: &[PolicySpec] = &[
    PolicySpec {
        id: ids::POLICY_KUSTOMIZATION_REQUIRED_FIELDS,
        kind: "Kustomization",
        requires_parameter: true,
        chain: &[
            CheckSpec::FieldEquality {
                path: "spec.targetNamespace",
                param_path: "targetNamespace",
            },
            CheckSpec::FieldEquality {
                path: "spec.serviceAccountName",
                param_path: "serviceAccountName",
            },
        ],
    },
    PolicySpec {
        id: ids::POLICY_SERVICE_ALLOWED_TYPES,
        kind: "Service",
        requires_parameter: true,
        chain: &[CheckSpec::EnumMembership {
            path: "spec.type",
            default: DEFAULT_SERVICE_TYPE,
            allowed_path: "allowedTypes",
        }],
    },
    PolicySpec {
        id: ids::POLICY_HTTPROUTE_ROUTE_BINDINGS,
        kind: "HTTPRoute",
        requires_parameter: true,
        chain: &[
            CheckSpec::HostnameAllowlist {
                path: "spec.hostnames",
                allowed_path: "allowedHostnames",
            },
            CheckSpec::ListSubset {
                path: "spec.parentRefs",
                patterns_path: "allowedParentRefs",
            },
        ],
    },
    PolicySpec {
        id: ids::POLICY_ROLEBINDING_NO_DEFAULT_SA,
        kind: "RoleBinding",
        requires_parameter: false,
        chain: &[CheckSpec::ForbiddenEntry {
            path: "subjects",
            kind_field: "kind",
            forbidden_kind: "ServiceAccount",
            name_field: "name",
            forbidden_name: "default",
        }],
    },
    PolicySpec {
        id: ids::POLICY_POD_VOLUME_SOURCES,
        kind: "Pod",
        requires_parameter: false,
        chain: &[CheckSpec::KeyAllowlist {
            path: "spec.volumes",
            label: "volume source",
            exempt: &["name"],
            allowed: PERMITTED_VOLUME_SOURCES,
        }],
    },
    PolicySpec {
        id: ids::POLICY_HELMRELEASE_TENANT_NAMESPACE,
        kind: "HelmRelease",
        requires_parameter: false,
        chain: &[CheckSpec::NamespaceAnnotation {
            annotation: "toolkit.fluxcd.io/tenant",
        }],
    },
];

pub fn policies() -> &'static [PolicySpec] {
    POLICIES
}

pub fn lookup(policy_id: &str) -> Option<&'static PolicySpec> {
    POLICIES.iter().find(|p| p.id == policy_id)
}

/// The policy in effect for a resource kind, if one is registered.
pub fn lookup_kind(kind: &str) -> Option<&'static PolicySpec> {
    POLICIES.iter().find(|p| p.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vapguard_types::explain;

    #[test]
    fn every_policy_id_resolves() {
        for policy in policies() {
            assert_eq!(lookup(policy.id).map(|p| p.id), Some(policy.id));
        }
    }

    #[test]
    fn policy_ids_match_explain_registry() {
        let ids: Vec<&str> = policies().iter().map(|p| p.id).collect();
        assert_eq!(ids, explain::all_policy_ids());
    }

    #[test]
    fn kinds_are_unique() {
        let mut kinds: Vec<&str> = policies().iter().map(|p| p.kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), policies().len());
    }

    #[test]
    fn lookup_kind_finds_registered_kinds() {
        assert_eq!(
            lookup_kind("RoleBinding").map(|p| p.id),
            Some(vapguard_types::ids::POLICY_ROLEBINDING_NO_DEFAULT_SA)
        );
        assert!(lookup_kind("ConfigMap").is_none());
    }

    #[test]
    fn parameterless_policies_have_no_parameter_reads() {
        for policy in policies() {
            if policy.requires_parameter {
                continue;
            }
            for check in policy.chain {
                assert!(
                    matches!(
                        check,
                        CheckSpec::ForbiddenEntry { .. }
                            | CheckSpec::KeyAllowlist { .. }
                            | CheckSpec::NamespaceAnnotation { .. }
                    ),
                    "policy {} has a parameter-reading check but requires_parameter=false",
                    policy.id
                );
            }
        }
    }
}
