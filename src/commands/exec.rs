//! `devstack exec` — run a command inside a running service container.

use anyhow::Result;
use clap::Args;

use crate::application::ports::{ExecSpec, ServiceExecutor};
use crate::output::OutputContext;

/// Environment variable overriding the user the command runs as.
pub const ASUSER_ENV: &str = "DEVSTACK_ASUSER";

/// Arguments for the exec command.
#[derive(Args)]
pub struct ExecArgs {
    /// Service whose container runs the command
    pub service: String,

    /// Command and arguments to execute
    #[arg(required = true, trailing_var_arg = true)]
    pub command: Vec<String>,

    /// Extra environment variables (KEY=VALUE, repeatable)
    #[arg(long = "env")]
    pub env: Vec<String>,

    /// Detached mode: run the command in the background
    #[arg(short, long)]
    pub detach: bool,
}

/// Build the execution spec for the given arguments and terminal state.
///
/// TTY allocation is disabled when stdout is not a terminal so piped
/// output stays clean; the `DEVSTACK_ASUSER` variable, when set and
/// non-empty, selects the container user.
#[must_use]
pub fn build_spec(args: &ExecArgs, is_tty: bool) -> ExecSpec {
    let user = std::env::var(ASUSER_ENV)
        .ok()
        .filter(|user| !user.is_empty());

    ExecSpec {
        service: args.service.clone(),
        command: args.command.clone(),
        user,
        env: args.env.clone(),
        detach: args.detach,
        disable_tty: !is_tty,
    }
}

/// Run `devstack exec`.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned or exits non-zero.
pub async fn run(ctx: &OutputContext, executor: &dyn ServiceExecutor, args: ExecArgs) -> Result<()> {
    let spec = build_spec(&args, ctx.is_tty);
    let status = executor.exec(&spec).await?;
    if !status.success() {
        anyhow::bail!("command in service {} exited with {status}", spec.service);
    }
    Ok(())
}
