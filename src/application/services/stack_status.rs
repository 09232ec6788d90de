//! Application service — service status aggregation use-case.
//!
//! Discovers the configured services, probes each one concurrently through
//! the [`ServiceProber`] port, and reconstructs a deterministically ordered
//! report regardless of the order in which probes complete.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::application::ports::ServiceProber;
use crate::domain::status::{ServiceStatus, parse_status_line};

/// Outcome of one status gathering invocation.
#[derive(Debug)]
pub enum StatusReport {
    /// Enumeration failed or returned nothing. Not an error: the caller
    /// reports "nothing to show" and exits successfully.
    NoServices,
    /// One row per enumerated service, sorted ascending by name.
    Services(Vec<ServiceStatus>),
}

/// Gather the live status of every configured service.
///
/// One task is spawned per service; each transmits exactly one outcome over
/// a fan-in channel. The first probe error aborts the whole invocation —
/// still-running tasks are abandoned, never awaited, and their late sends
/// land on a closed channel.
///
/// # Errors
///
/// Returns the first container-ID lookup failure verbatim. Enumeration
/// failures are soft and collapse into [`StatusReport::NoServices`].
pub async fn gather_status(prober: Arc<dyn ServiceProber>) -> Result<StatusReport> {
    let names = match prober.list_services().await {
        Ok(output) => enumerate_services(&output),
        Err(_) => Vec::new(),
    };
    if names.is_empty() {
        return Ok(StatusReport::NoServices);
    }

    let (tx, mut rx) = mpsc::channel(names.len());
    for name in &names {
        let prober = Arc::clone(&prober);
        let tx = tx.clone();
        let name = name.clone();
        tokio::spawn(async move {
            let outcome = probe_service(prober.as_ref(), &name).await;
            let _ = tx.send(outcome).await;
        });
    }
    drop(tx);

    let mut statuses = Vec::with_capacity(names.len());
    while statuses.len() < names.len() {
        match rx.recv().await {
            Some(Ok(status)) => statuses.push(status),
            Some(Err(e)) => return Err(e),
            // A closed channel before all outcomes arrived means a probe task
            // died without reporting; a partial report must not escape.
            None => anyhow::bail!("probe task terminated without reporting"),
        }
    }

    // Output order is a function of the name set alone, not of enumeration
    // order or probe completion timing.
    statuses.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    Ok(StatusReport::Services(statuses))
}

/// Split enumeration output into trimmed, non-empty service names,
/// preserving input order.
#[must_use]
pub fn enumerate_services(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Probe one service: resolve its container ID, then fetch and parse its
/// status line.
///
/// An ID lookup failure is fatal for the invocation — it is the only signal
/// that the runtime itself is unreachable. The status fetch runs uniformly
/// even for an empty ID, and its failure degrades to an empty status line.
async fn probe_service(prober: &dyn ServiceProber, name: &str) -> Result<ServiceStatus> {
    let container_id = prober.container_id(name).await?;
    let raw = prober
        .container_status(container_id.trim())
        .await
        .unwrap_or_default();
    Ok(parse_status_line(name, &raw))
}
