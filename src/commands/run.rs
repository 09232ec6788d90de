//! `devstack run` — run a one-off command in a fresh container.

use anyhow::Result;
use clap::Args;

use crate::application::ports::{ImageRunner, RunSpec};
use crate::commands::exec::ASUSER_ENV;
use crate::output::OutputContext;

/// Arguments for the run command.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Image to run
    pub image: String,

    /// Command and arguments to execute inside the container
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,

    /// Extra environment variables (KEY=VALUE, repeatable)
    #[arg(long = "env")]
    pub env: Vec<String>,

    /// Extra volume bindings (repeatable)
    #[arg(long = "volume")]
    pub volume: Vec<String>,

    /// Ports to publish (repeatable)
    #[arg(long = "publish")]
    pub publish: Vec<String>,
}

/// Build the run spec for the given arguments and terminal state.
///
/// The container always gets the project directory mounted as its workdir;
/// a TTY is allocated only when stdout is a terminal. The `DEVSTACK_ASUSER`
/// variable, when set and non-empty, is forwarded to the container as
/// `ASUSER`.
#[must_use]
pub fn build_spec(args: &RunArgs, is_tty: bool) -> RunSpec {
    let user = std::env::var(ASUSER_ENV)
        .ok()
        .filter(|user| !user.is_empty());

    RunSpec {
        image: args.image.clone(),
        command: args.command.clone(),
        user,
        env: args.env.clone(),
        volumes: args.volume.clone(),
        publish: args.publish.clone(),
        allocate_tty: is_tty,
    }
}

/// Run `devstack run`.
///
/// # Errors
///
/// Returns an error if the container cannot be started or exits non-zero.
pub async fn run(ctx: &OutputContext, runner: &dyn ImageRunner, args: RunArgs) -> Result<()> {
    let spec = build_spec(&args, ctx.is_tty);
    let status = runner.run_image(&spec).await?;
    if !status.success() {
        anyhow::bail!("command in image {} exited with {status}", spec.image);
    }
    Ok(())
}
