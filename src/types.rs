use std::fmt;

use k8s_openapi::api::admissionregistration::v1::{
    MutatingWebhook, RuleWithOperations, ValidatingWebhook, WebhookClientConfig,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;

use crate::check::risk;
use crate::config;
use crate::constants;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigurationKind {
    Validating,
    Mutating,
}

impl ConfigurationKind {
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigurationKind::Validating => constants::VALIDATING_KIND,
            ConfigurationKind::Mutating => constants::MUTATING_KIND,
        }
    }
}

impl fmt::Display for ConfigurationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Kind-agnostic view over a single validating or mutating webhook entry.
#[derive(Clone, Copy, Debug)]
pub struct WebhookEntry<'a> {
    pub name: &'a str,
    pub failure_policy: Option<&'a str>,
    pub rules: &'a [RuleWithOperations],
    pub client_config: &'a WebhookClientConfig,
    pub namespace_selector: Option<&'a LabelSelector>,
}

impl WebhookEntry<'_> {
    /// An absent failure policy means the API default, `Fail`.
    pub fn failure_policy_ignores(&self) -> bool {
        self.failure_policy == Some(constants::FAILURE_POLICY_IGNORE)
    }
}

impl<'a> From<&'a ValidatingWebhook> for WebhookEntry<'a> {
    fn from(webhook: &'a ValidatingWebhook) -> Self {
        Self {
            name: &webhook.name,
            failure_policy: webhook.failure_policy.as_deref(),
            rules: webhook.rules.as_deref().unwrap_or_default(),
            client_config: &webhook.client_config,
            namespace_selector: webhook.namespace_selector.as_ref(),
        }
    }
}

impl<'a> From<&'a MutatingWebhook> for WebhookEntry<'a> {
    fn from(webhook: &'a MutatingWebhook) -> Self {
        Self {
            name: &webhook.name,
            failure_policy: webhook.failure_policy.as_deref(),
            rules: webhook.rules.as_deref().unwrap_or_default(),
            client_config: &webhook.client_config,
            namespace_selector: webhook.namespace_selector.as_ref(),
        }
    }
}

/// Pods behind a webhook's service and whether a disruption budget covers them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackingWorkload {
    pub replicas: usize,
    pub has_disruption_budget: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookRecord {
    pub configuration_name: String,
    pub webhook_name: String,
    pub failure_policy_ignores: bool,
    pub backing_replica_count: usize,
    pub has_disruption_budget: bool,
    pub kube_system_excluded: bool,
}

impl WebhookRecord {
    pub fn new(
        kind: ConfigurationKind,
        configuration: &str,
        entry: &WebhookEntry<'_>,
        workload: BackingWorkload,
        kube_system_excluded: bool,
    ) -> Self {
        Self {
            configuration_name: format!("{}/{}", kind, configuration),
            webhook_name: entry.name.to_string(),
            failure_policy_ignores: entry.failure_policy_ignores(),
            backing_replica_count: workload.replicas,
            has_disruption_budget: workload.has_disruption_budget,
            kube_system_excluded,
        }
    }

    pub fn is_risky(&self) -> bool {
        risk::is_risky(
            self.failure_policy_ignores,
            self.backing_replica_count,
            self.has_disruption_budget,
            self.kube_system_excluded,
        )
    }
}

#[derive(Clone, Debug)]
pub struct FullResult {
    pub config: config::Config,
    pub items: Vec<WebhookRecord>,
}
