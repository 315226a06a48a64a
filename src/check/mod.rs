pub mod filter;
pub mod namespace;
pub mod risk;
pub mod workload;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::cluster::ClusterQuery;
use crate::config;
use crate::types::{ConfigurationKind, FullResult, WebhookEntry, WebhookRecord};

pub struct Checker<C> {
    pub config: config::Config,
    pub cluster: C,
}

impl<C: ClusterQuery> Checker<C> {
    pub fn new(config: config::Config, cluster: C) -> Self {
        Self { config, cluster }
    }

    /// Evaluate every pod webhook, validating configurations first, then mutating ones.
    pub async fn check_all(&self) -> Result<FullResult> {
        let validating = self
            .cluster
            .list_validating_webhook_configurations()
            .await
            .context("failed to list ValidatingWebhookConfigurations")?;
        let mutating = self
            .cluster
            .list_mutating_webhook_configurations()
            .await
            .context("failed to list MutatingWebhookConfigurations")?;

        let mut items = Vec::new();
        for configuration in &validating {
            let name = configuration.metadata.name.as_deref().unwrap_or_default();
            let entries = configuration
                .webhooks
                .iter()
                .flatten()
                .map(WebhookEntry::from);
            let kind = ConfigurationKind::Validating;
            items.extend(self.check_configuration(kind, name, entries).await);
        }
        for configuration in &mutating {
            let name = configuration.metadata.name.as_deref().unwrap_or_default();
            let entries = configuration
                .webhooks
                .iter()
                .flatten()
                .map(WebhookEntry::from);
            let kind = ConfigurationKind::Mutating;
            items.extend(self.check_configuration(kind, name, entries).await);
        }

        Ok(FullResult {
            config: self.config.clone(),
            items,
        })
    }

    async fn check_configuration<'a>(
        &self,
        kind: ConfigurationKind,
        configuration: &str,
        entries: impl Iterator<Item = WebhookEntry<'a>>,
    ) -> Vec<WebhookRecord> {
        let mut records = Vec::new();
        for entry in entries {
            if let Some(record) = self.check_webhook(kind, configuration, &entry).await {
                if self.config.show_all || record.is_risky() {
                    records.push(record);
                }
            }
        }
        records
    }

    /// Build the record for one entry, or `None` if it is not a pod webhook or its
    /// backing workload could not be resolved.
    async fn check_webhook(
        &self,
        kind: ConfigurationKind,
        configuration: &str,
        entry: &WebhookEntry<'_>,
    ) -> Option<WebhookRecord> {
        if !filter::is_pod_webhook(entry.rules) {
            debug!(
                configuration = %configuration,
                webhook = %entry.name,
                "Skipping webhook without pod rules"
            );
            return None;
        }

        let inspected = workload::inspect_backing_workload(&self.cluster, entry.client_config);
        let workload = match inspected.await {
            Ok(workload) => workload,
            Err(e) => {
                warn!(
                    kind = %kind,
                    configuration = %configuration,
                    webhook = %entry.name,
                    "Failed to check {} / {} - {}",
                    configuration,
                    entry.name,
                    e
                );
                return None;
            }
        };
        let excluded = namespace::is_kube_system_excluded(entry.namespace_selector);

        let record = WebhookRecord::new(kind, configuration, entry, workload, excluded);
        Some(record)
    }
}
