//! Stable identifiers for policies and deny codes.
//!
//! `policy_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Policies
pub const POLICY_KUSTOMIZATION_REQUIRED_FIELDS: &str = "kustomization.required_fields";
pub const POLICY_SERVICE_ALLOWED_TYPES: &str = "service.allowed_types";
pub const POLICY_HTTPROUTE_ROUTE_BINDINGS: &str = "httproute.route_bindings";
pub const POLICY_ROLEBINDING_NO_DEFAULT_SA: &str = "rolebinding.no_default_service_account";
pub const POLICY_POD_VOLUME_SOURCES: &str = "pod.volume_sources";
pub const POLICY_HELMRELEASE_TENANT_NAMESPACE: &str = "helmrelease.tenant_namespace";

// Codes: parameter resolution (shared by every parameterized policy)
pub const CODE_PARAMETER_ABSENT: &str = "parameter_absent";
pub const CODE_PARAMETER_INVALID: &str = "parameter_invalid";

// Codes: kustomization.required_fields
pub const CODE_FIELD_MISMATCH: &str = "field_mismatch";
pub const CODE_FIELD_MISSING: &str = "field_missing";

// Codes: service.allowed_types
pub const CODE_VALUE_NOT_ALLOWED: &str = "value_not_allowed";

// Codes: httproute.route_bindings
pub const CODE_HOSTNAMES_NOT_ALLOWED: &str = "hostnames_not_allowed";
pub const CODE_UNMATCHED_REFERENCE: &str = "unmatched_reference";

// Codes: rolebinding.no_default_service_account
pub const CODE_FORBIDDEN_SUBJECT: &str = "forbidden_subject";

// Codes: pod.volume_sources
pub const CODE_VOLUME_SOURCE_NOT_ALLOWED: &str = "volume_source_not_allowed";

// Codes: helmrelease.tenant_namespace
pub const CODE_ANNOTATION_NAMESPACE_MISMATCH: &str = "annotation_namespace_mismatch";
