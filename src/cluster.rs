use std::collections::BTreeMap;

use async_trait::async_trait;
use k8s_openapi::api::admissionregistration::v1::{
    MutatingWebhookConfiguration, ValidatingWebhookConfiguration,
};
use k8s_openapi::api::core::v1::{Pod, Service};
use k8s_openapi::api::policy::v1::PodDisruptionBudget;
use kube::api::{Api, ListParams};
use kube::Client;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::error::{Error, Result};

/// Read-only cluster queries needed to audit admission webhooks.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClusterQuery: Send + Sync {
    async fn list_validating_webhook_configurations(
        &self,
    ) -> Result<Vec<ValidatingWebhookConfiguration>>;

    async fn list_mutating_webhook_configurations(
        &self,
    ) -> Result<Vec<MutatingWebhookConfiguration>>;

    /// Pod selector of the named service. Empty when the service has none.
    async fn service_selector(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<BTreeMap<String, String>>;

    async fn count_pods(&self, namespace: &str, label_selector: &str) -> Result<usize>;

    async fn count_pod_disruption_budgets(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> Result<usize>;
}

pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterQuery for KubeCluster {
    async fn list_validating_webhook_configurations(
        &self,
    ) -> Result<Vec<ValidatingWebhookConfiguration>> {
        let api: Api<ValidatingWebhookConfiguration> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        debug!(
            count = list.items.len(),
            "Listed validating webhook configurations"
        );
        Ok(list.items)
    }

    async fn list_mutating_webhook_configurations(
        &self,
    ) -> Result<Vec<MutatingWebhookConfiguration>> {
        let api: Api<MutatingWebhookConfiguration> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        debug!(
            count = list.items.len(),
            "Listed mutating webhook configurations"
        );
        Ok(list.items)
    }

    async fn service_selector(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<BTreeMap<String, String>> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        let service = api
            .get_opt(name)
            .await?
            .ok_or_else(|| Error::not_found("Service", namespace, name))?;
        let selector = service.spec.and_then(|spec| spec.selector);
        Ok(selector.unwrap_or_default())
    }

    async fn count_pods(&self, namespace: &str, label_selector: &str) -> Result<usize> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let pods = api
            .list(&ListParams::default().labels(label_selector))
            .await?;
        Ok(pods.items.len())
    }

    async fn count_pod_disruption_budgets(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> Result<usize> {
        let api: Api<PodDisruptionBudget> = Api::namespaced(self.client.clone(), namespace);
        let pdbs = api
            .list(&ListParams::default().labels(label_selector))
            .await?;
        Ok(pdbs.items.len())
    }
}
