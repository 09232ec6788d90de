//! `devstack stop` — stop and remove the environment's containers.

use anyhow::Result;
use clap::Args;

use crate::application::ports::StackLifecycle;
use crate::output::OutputContext;

/// Arguments for the stop command.
#[derive(Args, Default)]
pub struct StopArgs {
    /// Also remove persistent volumes
    #[arg(long)]
    pub purge: bool,
}

/// Run `devstack stop`.
///
/// The purge confirmation happens at the CLI layer; by the time this runs,
/// `purge` is the final decision.
///
/// # Errors
///
/// Returns an error if `docker-compose down` exits non-zero.
pub async fn run(ctx: &OutputContext, stack: &dyn StackLifecycle, purge: bool) -> Result<()> {
    let status = stack.down(purge).await?;
    if !status.success() {
        anyhow::bail!("failed to stop the environment ({status})");
    }

    ctx.success("Environment is down.");
    Ok(())
}
