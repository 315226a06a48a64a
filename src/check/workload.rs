use std::collections::BTreeMap;

use k8s_openapi::api::admissionregistration::v1::WebhookClientConfig;
use tracing::debug;

use crate::cluster::ClusterQuery;
use crate::error::Result;
use crate::types::BackingWorkload;

/// Render a label set as a selector string, e.g. `app=webhook,tier=admission`.
pub fn selector_from_labels(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<String>>()
        .join(",")
}

/// Resolve the pods behind a webhook's service and whether a PDB covers them.
///
/// URL-based webhooks have no in-cluster workload and resolve to an empty one.
pub async fn inspect_backing_workload<C: ClusterQuery + ?Sized>(
    cluster: &C,
    client_config: &WebhookClientConfig,
) -> Result<BackingWorkload> {
    let service = match &client_config.service {
        Some(service) => service,
        None => return Ok(BackingWorkload::default()),
    };

    let labels = cluster
        .service_selector(&service.namespace, &service.name)
        .await?;
    let selector = selector_from_labels(&labels);

    let replicas = cluster.count_pods(&service.namespace, &selector).await?;
    let pdbs = cluster
        .count_pod_disruption_budgets(&service.namespace, &selector)
        .await?;
    debug!(
        namespace = %service.namespace,
        service = %service.name,
        selector = %selector,
        replicas,
        pdbs,
        "Resolved backing workload"
    );

    Ok(BackingWorkload {
        replicas,
        has_disruption_budget: pdbs > 0,
    })
}
