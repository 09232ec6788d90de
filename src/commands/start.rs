//! `devstack start` — bring the environment's service containers up.

use anyhow::Result;
use clap::Args;

use crate::application::ports::{DependencyChecker, NetworkGuard, StackLifecycle};
use crate::output::OutputContext;

/// Arguments for the start command.
#[derive(Args, Default)]
pub struct StartArgs {
    /// Start only these services (default: all services in the manifest)
    pub services: Vec<String>,
}

/// Run `devstack start`.
///
/// # Errors
///
/// Returns an error if a precondition check fails or `docker-compose up`
/// exits non-zero.
pub async fn run(
    ctx: &OutputContext,
    checker: &dyn DependencyChecker,
    network: &dyn NetworkGuard,
    stack: &dyn StackLifecycle,
    services: &[String],
) -> Result<()> {
    checker.verify_dependencies().await?;
    network.ensure_network().await?;

    let status = stack.up(services).await?;
    if !status.success() {
        anyhow::bail!("failed to start the environment ({status})");
    }

    ctx.success("Environment is up.");
    Ok(())
}
