use k8s_openapi::api::admissionregistration::v1::RuleWithOperations;

use crate::constants;

/// Whether any rule targets pods. Subresources such as `pods/eviction` count too.
pub fn is_pod_webhook(rules: &[RuleWithOperations]) -> bool {
    rules
        .iter()
        .filter_map(|rule| rule.resources.as_ref())
        .flatten()
        .any(|resource| {
            resource == constants::WILDCARD_RESOURCE || resource.contains(constants::POD_RESOURCE)
        })
}

#[cfg(test)]
mod tests {
    use super::is_pod_webhook;
    use k8s_openapi::api::admissionregistration::v1::RuleWithOperations;

    fn rule(resources: &[&str]) -> RuleWithOperations {
        RuleWithOperations {
            api_groups: Some(vec!["".to_string()]),
            api_versions: Some(vec!["v1".to_string()]),
            operations: Some(vec!["CREATE".to_string()]),
            resources: Some(resources.iter().map(|r| r.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_wildcard_resource() {
        assert!(is_pod_webhook(&[rule(&["*"])]));
    }

    #[test]
    fn test_non_pod_resource() {
        assert!(!is_pod_webhook(&[rule(&["deployments"])]));
    }

    #[test]
    fn test_pod_subresource() {
        assert!(is_pod_webhook(&[rule(&["pods/eviction"])]));
        assert!(is_pod_webhook(&[rule(&["pods/status"])]));
    }

    #[test]
    fn test_empty_resources() {
        assert!(!is_pod_webhook(&[rule(&[])]));
        assert!(!is_pod_webhook(&[RuleWithOperations::default()]));
        assert!(!is_pod_webhook(&[]));
    }

    #[test]
    fn test_any_rule_matches() {
        let rules = vec![
            rule(&["deployments", "services"]),
            rule(&["configmaps", "pods"]),
        ];
        assert!(is_pod_webhook(&rules));
    }
}
