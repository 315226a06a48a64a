pub const NAMESPACE_NAME_LABEL: &str = "kubernetes.io/metadata.name";
pub const KUBE_SYSTEM: &str = "kube-system";

pub const WILDCARD_RESOURCE: &str = "*";
pub const POD_RESOURCE: &str = "pods";

pub const FAILURE_POLICY_IGNORE: &str = "Ignore";
pub const OPERATOR_NOT_IN: &str = "NotIn";

pub const VALIDATING_KIND: &str = "ValidatingWebhookConfiguration";
pub const MUTATING_KIND: &str = "MutatingWebhookConfiguration";
