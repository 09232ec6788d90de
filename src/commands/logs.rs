//! `devstack logs` — display log output from services.

use anyhow::Result;
use clap::Args;

use crate::application::ports::StackLifecycle;

/// Tail size when neither `--tail` nor `--follow` is given.
const DEFAULT_TAIL: u32 = 25;

/// Arguments for the logs command.
#[derive(Args, Default)]
pub struct LogsArgs {
    /// Number of log lines to show from the end (default 25; "all" when following)
    #[arg(short, long)]
    pub tail: Option<u32>,

    /// Follow log output
    #[arg(short, long)]
    pub follow: bool,

    /// Services to show logs for (default: all)
    pub services: Vec<String>,
}

/// Tail argument handed to the runtime: an explicit `--tail` always wins;
/// following without one streams the full log.
#[must_use]
pub fn tail_value(args: &LogsArgs) -> String {
    match args.tail {
        Some(n) => n.to_string(),
        None if args.follow => "all".to_string(),
        None => DEFAULT_TAIL.to_string(),
    }
}

/// Run `devstack logs`.
///
/// # Errors
///
/// Returns an error if `docker-compose logs` exits non-zero.
pub async fn run(stack: &dyn StackLifecycle, args: LogsArgs) -> Result<()> {
    let tail = tail_value(&args);
    let status = stack.logs(&tail, args.follow, &args.services).await?;
    if !status.success() {
        anyhow::bail!("failed to fetch logs ({status})");
    }
    Ok(())
}
