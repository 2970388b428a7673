//! Explain registry for policies and deny codes.
//!
//! Maps policy IDs and codes to human-readable explanations with remediation
//! guidance. Hosts surface these next to the contract reason string, which
//! stays terse by design.

use crate::ids;

/// Explanation entry for a policy or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the policy/code.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after manifest examples.
    pub examples: ExamplePair,
}

/// Before and after manifest examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A resource that would be denied.
    pub before: &'static str,
    /// A resource that passes the policy.
    pub after: &'static str,
}

/// Look up an explanation by policy_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try policy_id first, then code
    match identifier {
        // Policy IDs
        ids::POLICY_KUSTOMIZATION_REQUIRED_FIELDS => Some(explain_kustomization_fields()),
        ids::POLICY_SERVICE_ALLOWED_TYPES => Some(explain_service_types()),
        ids::POLICY_HTTPROUTE_ROUTE_BINDINGS => Some(explain_route_bindings()),
        ids::POLICY_ROLEBINDING_NO_DEFAULT_SA => Some(explain_no_default_sa()),
        ids::POLICY_POD_VOLUME_SOURCES => Some(explain_volume_sources()),
        ids::POLICY_HELMRELEASE_TENANT_NAMESPACE => Some(explain_tenant_namespace()),

        // Codes
        ids::CODE_PARAMETER_ABSENT => Some(explain_parameter_absent()),
        ids::CODE_PARAMETER_INVALID => Some(explain_parameter_invalid()),
        ids::CODE_FIELD_MISMATCH => Some(explain_field_mismatch()),
        ids::CODE_FIELD_MISSING => Some(explain_field_missing()),
        ids::CODE_VALUE_NOT_ALLOWED => Some(explain_value_not_allowed()),
        ids::CODE_HOSTNAMES_NOT_ALLOWED => Some(explain_hostnames_not_allowed()),
        ids::CODE_UNMATCHED_REFERENCE => Some(explain_unmatched_reference()),
        ids::CODE_FORBIDDEN_SUBJECT => Some(explain_forbidden_subject()),
        ids::CODE_VOLUME_SOURCE_NOT_ALLOWED => Some(explain_volume_source_not_allowed()),
        ids::CODE_ANNOTATION_NAMESPACE_MISMATCH => Some(explain_annotation_mismatch()),

        _ => None,
    }
}

/// List all known policy IDs.
pub fn all_policy_ids() -> &'static [&'static str] {
    &[
        ids::POLICY_KUSTOMIZATION_REQUIRED_FIELDS,
        ids::POLICY_SERVICE_ALLOWED_TYPES,
        ids::POLICY_HTTPROUTE_ROUTE_BINDINGS,
        ids::POLICY_ROLEBINDING_NO_DEFAULT_SA,
        ids::POLICY_POD_VOLUME_SOURCES,
        ids::POLICY_HELMRELEASE_TENANT_NAMESPACE,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_PARAMETER_ABSENT,
        ids::CODE_PARAMETER_INVALID,
        ids::CODE_FIELD_MISMATCH,
        ids::CODE_FIELD_MISSING,
        ids::CODE_VALUE_NOT_ALLOWED,
        ids::CODE_HOSTNAMES_NOT_ALLOWED,
        ids::CODE_UNMATCHED_REFERENCE,
        ids::CODE_FORBIDDEN_SUBJECT,
        ids::CODE_VOLUME_SOURCE_NOT_ALLOWED,
        ids::CODE_ANNOTATION_NAMESPACE_MISMATCH,
    ]
}

// --- Policy-level explanations ---

fn explain_kustomization_fields() -> Explanation {
    Explanation {
        title: "Kustomization Required Fields",
        description: "\
Requires tenant Kustomizations to pin spec.targetNamespace and
spec.serviceAccountName to the values declared in the namespace's policy
parameter.

Without the pin, a tenant Kustomization could:
- apply objects into another tenant's namespace
- impersonate a more privileged service account during reconciliation",
        remediation: "\
Set both fields to the values the platform team declared in the policy
parameter for your namespace. If the parameter values are wrong, change the
parameter, not the Kustomization.",
        examples: ExamplePair {
            before: r#"spec:
  serviceAccountName: cluster-admin-sa"#,
            after: r#"spec:
  targetNamespace: app
  serviceAccountName: deployer"#,
        },
    }
}

fn explain_service_types() -> Explanation {
    Explanation {
        title: "Allowed Service Types",
        description: "\
Restricts spec.type of tenant Services to the allow-list in the policy
parameter. A Service with no explicit type is evaluated as ClusterIP, the
platform default.

Unrestricted Service types let tenants allocate NodePorts or cloud load
balancers, which are shared, billable cluster resources.",
        remediation: "\
Use one of the allowed types, or ask the platform team to extend
spec.allowedTypes in the policy parameter for your namespace.",
        examples: ExamplePair {
            before: r#"spec:
  type: LoadBalancer"#,
            after: r#"spec:
  type: ClusterIP"#,
        },
    }
}

fn explain_route_bindings() -> Explanation {
    Explanation {
        title: "HTTPRoute Bindings",
        description: "\
Checks two things on tenant HTTPRoutes:
1. spec.hostnames must be present and every hostname must be on the
   parameter's spec.allowedHostnames list
2. every spec.parentRefs entry must match one of the parameter's
   spec.allowedParentRefs patterns; a pattern matches when every field it
   declares equals the candidate's field, and fields the pattern omits are
   ignored

This keeps tenants from claiming hostnames or attaching to gateways that
belong to someone else.",
        remediation: "\
Declare only hostnames from the allow-list and attach only to the gateways
listed in the policy parameter. A parentRef must carry every field its
matching pattern declares.",
        examples: ExamplePair {
            before: r#"spec:
  hostnames: ["admin.internal"]
  parentRefs:
    - name: shared-gw"#,
            after: r#"spec:
  hostnames: ["app.tenant-a.example.com"]
  parentRefs:
    - name: tenant-a-gw
      namespace: tenant-a"#,
        },
    }
}

fn explain_no_default_sa() -> Explanation {
    Explanation {
        title: "No Default ServiceAccount Bindings",
        description: "\
Denies RoleBindings that grant permissions to the namespace's \"default\"
ServiceAccount.

Every pod that does not name a service account runs as \"default\", so
binding roles to it silently grants those permissions to all such pods in
the namespace.",
        remediation: "\
Create a dedicated ServiceAccount for the workload and bind the role to it:

    subjects:
      - kind: ServiceAccount
        name: my-workload-sa",
        examples: ExamplePair {
            before: r#"subjects:
  - kind: ServiceAccount
    name: default"#,
            after: r#"subjects:
  - kind: ServiceAccount
    name: my-workload-sa"#,
        },
    }
}

fn explain_volume_sources() -> Explanation {
    Explanation {
        title: "Permitted Volume Sources",
        description: "\
Restricts pod volumes to a closed set of sources: configMap, secret,
emptyDir, projected, downwardAPI, persistentVolumeClaim.

Other sources (hostPath in particular) expose node filesystems or bypass
storage quotas, which breaks tenant isolation.",
        remediation: "\
Replace the volume with one of the permitted sources. Host-level data
belongs in a PersistentVolume provisioned by the platform team.",
        examples: ExamplePair {
            before: r#"volumes:
  - name: host
    hostPath:
      path: /var/run"#,
            after: r#"volumes:
  - name: data
    persistentVolumeClaim:
      claimName: data"#,
        },
    }
}

fn explain_tenant_namespace() -> Explanation {
    Explanation {
        title: "Tenant Namespace Annotation",
        description: "\
Requires the tenant annotation on a HelmRelease to name the namespace the
HelmRelease itself lives in.

The annotation feeds downstream tooling that attributes releases to
tenants; a mismatched value lets a release masquerade as another tenant's.",
        remediation: "\
Set the annotation to the resource's own namespace:

    metadata:
      annotations:
        toolkit.fluxcd.io/tenant: <namespace>",
        examples: ExamplePair {
            before: r#"metadata:
  namespace: tenant-a
  annotations:
    toolkit.fluxcd.io/tenant: tenant-b"#,
            after: r#"metadata:
  namespace: tenant-a
  annotations:
    toolkit.fluxcd.io/tenant: tenant-a"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_parameter_absent() -> Explanation {
    Explanation {
        title: "No Policy Parameter For Namespace",
        description: "\
The policy requires a namespace-scoped parameter and none is bound to the
resource's namespace.

Absence is a deny, not an exemption: a namespace without a parameter has no
declared tenancy contract, so nothing can be admitted under the policy.",
        remediation: "\
Ask the platform team to create the policy parameter for the namespace
before deploying resources governed by this policy.",
        examples: ExamplePair {
            before: "# namespace has no policy parameter bound",
            after: r#"kind: VapParameter
metadata:
  namespace: tenant-a
spec:
  targetNamespace: app
  serviceAccountName: deployer"#,
        },
    }
}

fn explain_parameter_invalid() -> Explanation {
    Explanation {
        title: "Invalid Policy Parameter",
        description: "\
A parameter is bound to the namespace but fails its own shape requirements
(for example, spec missing or not a map).

A malformed parameter denies everything it governs; it never degrades to
\"no restriction\".",
        remediation: "\
Fix the parameter document so its spec is a map carrying the fields the
policy reads. The deny reason names the failing requirement.",
        examples: ExamplePair {
            before: r#"kind: VapParameter
metadata:
  namespace: tenant-a
spec: "not-a-map""#,
            after: r#"kind: VapParameter
metadata:
  namespace: tenant-a
spec:
  allowedTypes: ["ClusterIP"]"#,
        },
    }
}

fn explain_field_mismatch() -> Explanation {
    let mut exp = explain_kustomization_fields();
    exp.title = "Field Value Mismatch";
    exp
}

fn explain_field_missing() -> Explanation {
    let mut exp = explain_kustomization_fields();
    exp.title = "Required Field Missing";
    exp
}

fn explain_value_not_allowed() -> Explanation {
    let mut exp = explain_service_types();
    exp.title = "Value Not On Allow-List";
    exp
}

fn explain_hostnames_not_allowed() -> Explanation {
    let mut exp = explain_route_bindings();
    exp.title = "Hostname Not On Allow-List";
    exp
}

fn explain_unmatched_reference() -> Explanation {
    let mut exp = explain_route_bindings();
    exp.title = "Parent Reference Matches No Pattern";
    exp
}

fn explain_forbidden_subject() -> Explanation {
    let mut exp = explain_no_default_sa();
    exp.title = "Forbidden Binding Subject";
    exp
}

fn explain_volume_source_not_allowed() -> Explanation {
    let mut exp = explain_volume_sources();
    exp.title = "Volume Source Not Permitted";
    exp
}

fn explain_annotation_mismatch() -> Explanation {
    let mut exp = explain_tenant_namespace();
    exp.title = "Tenant Annotation Mismatch";
    exp
}
