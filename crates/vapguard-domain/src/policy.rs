//! Policies are data, not subtypes: each one is an ordered list of evaluator
//! configurations registered in `registry`.

/// Declarative configuration for one evaluator in a policy chain.
///
/// Paths into the resource are full dotted paths (`spec.targetNamespace`);
/// paths into the parameter are relative to its `spec` and rendered with the
/// `spec.` prefix in reason strings.
#[derive(Clone, Copy, Debug)]
pub enum CheckSpec {
    /// Resource field must equal the value at a parameter spec path.
    FieldEquality {
        path: &'static str,
        param_path: &'static str,
    },

    /// Resource field (or `default` when the field is absent) must be on
    /// the parameter's allow-list.
    EnumMembership {
        path: &'static str,
        default: &'static str,
        allowed_path: &'static str,
    },

    /// List field must be present and non-empty, and every item must be on
    /// the parameter's allow-list.
    HostnameAllowlist {
        path: &'static str,
        allowed_path: &'static str,
    },

    /// Every candidate entry must subset-match at least one pattern entry
    /// from the parameter. An absent candidate list passes vacuously.
    ListSubset {
        path: &'static str,
        patterns_path: &'static str,
    },

    /// Deny when any entry of the list carries the forbidden kind/name pair.
    ForbiddenEntry {
        path: &'static str,
        kind_field: &'static str,
        forbidden_kind: &'static str,
        name_field: &'static str,
        forbidden_name: &'static str,
    },

    /// Closed set of permitted keys on each entry of a list field; `exempt`
    /// keys (like `name`) are not treated as sources.
    KeyAllowlist {
        path: &'static str,
        label: &'static str,
        exempt: &'static [&'static str],
        allowed: &'static [&'static str],
    },

    /// Annotation must equal the resource's own namespace.
    NamespaceAnnotation { annotation: &'static str },
}

/// A registered policy: the resource kind it governs, whether it requires a
/// namespace-scoped parameter, and its ordered evaluator chain.
#[derive(Clone, Copy, Debug)]
pub struct PolicySpec {
    pub id: &'static str,
    pub kind: &'static str,
    pub requires_parameter: bool,
    pub chain: &'static [CheckSpec],
}
