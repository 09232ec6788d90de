//! `devstack status` — report the live state of every configured service.

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::{DependencyChecker, NetworkGuard, ServiceProber, TableRenderer};
use crate::application::services::stack_status::{self, StatusReport};
use crate::domain::status::{ServiceStatus, running_label};
use crate::output::OutputContext;

/// Report table header, one column per [`ServiceStatus`] field.
pub const TABLE_HEADER: [&str; 4] = ["Service", "Running", "Ports", "State"];

/// Warning emitted when there is nothing to report. The command still
/// exits successfully in that case.
pub const NO_SERVICES_WARNING: &str = "No services found.";

/// Run `devstack status`.
///
/// # Errors
///
/// Returns an error when a precondition check fails or any service's
/// container-ID lookup fails; no partial table is rendered in either case.
pub async fn run(
    ctx: &OutputContext,
    json: bool,
    checker: &dyn DependencyChecker,
    network: &dyn NetworkGuard,
    prober: Arc<dyn ServiceProber>,
    table: &dyn TableRenderer,
) -> Result<()> {
    checker.verify_dependencies().await?;
    network.ensure_network().await?;

    match stack_status::gather_status(prober).await? {
        StatusReport::NoServices => {
            if json {
                println!("[]");
            } else {
                ctx.warn(NO_SERVICES_WARNING);
            }
        }
        StatusReport::Services(statuses) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&statuses)?);
            } else {
                let rows: Vec<Vec<String>> = statuses.iter().map(table_row).collect();
                table.render(&TABLE_HEADER, &rows);
            }
        }
    }

    Ok(())
}

fn table_row(status: &ServiceStatus) -> Vec<String> {
    vec![
        status.name.clone(),
        running_label(status.running).to_string(),
        status.ports.clone(),
        status.state.clone(),
    ]
}
