use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;

use crate::constants;

/// Whether the namespace selector explicitly keeps the webhook away from `kube-system`.
///
/// Anything short of a `NotIn` expression naming `kube-system` counts as not excluded.
pub fn is_kube_system_excluded(namespace_selector: Option<&LabelSelector>) -> bool {
    let selector = match namespace_selector {
        Some(selector) => selector,
        None => return false,
    };

    let targets_kube_system = selector
        .match_labels
        .as_ref()
        .and_then(|labels| labels.get(constants::NAMESPACE_NAME_LABEL))
        .is_some_and(|value| value == constants::KUBE_SYSTEM);
    if targets_kube_system {
        return false;
    }

    selector
        .match_expressions
        .iter()
        .flatten()
        .filter(|expression| {
            expression.key == constants::NAMESPACE_NAME_LABEL
                && expression.operator == constants::OPERATOR_NOT_IN
        })
        .filter_map(|expression| expression.values.as_ref())
        .flatten()
        .any(|value| value.eq_ignore_ascii_case(constants::KUBE_SYSTEM))
}
