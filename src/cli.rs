//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::output::TextTable;

/// Orchestrate containerized development environments
#[derive(Parser)]
#[command(
    name = "devstack",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the status of every service container
    Status,

    /// Start the environment's service containers
    Start(commands::start::StartArgs),

    /// Stop and remove the environment's containers
    Stop(commands::stop::StopArgs),

    /// Restart the environment (stop, then start)
    Restart,

    /// Execute a command inside a running service container
    Exec(commands::exec::ExecArgs),

    /// Run a one-off command in a fresh container from any image
    Run(commands::run::RunArgs),

    /// Display log output from services
    Logs(commands::logs::LogsArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli { json, quiet, no_color, command } = self;
        let app = AppContext::new(&AppFlags { json, quiet, no_color });

        match command {
            Command::Status => {
                commands::status::run(
                    &app.output,
                    app.json,
                    &app.checker,
                    &app.network,
                    app.prober(),
                    &TextTable,
                )
                .await
            }
            Command::Start(args) => {
                commands::start::run(
                    &app.output,
                    &app.checker,
                    &app.network,
                    app.compose.as_ref(),
                    &args.services,
                )
                .await
            }
            Command::Stop(args) => {
                let purge = args.purge
                    && app.confirm("Also remove persistent volumes?", true)?;
                commands::stop::run(&app.output, app.compose.as_ref(), purge).await
            }
            Command::Restart => {
                commands::stop::run(&app.output, app.compose.as_ref(), false).await?;
                commands::start::run(
                    &app.output,
                    &app.checker,
                    &app.network,
                    app.compose.as_ref(),
                    &[],
                )
                .await
            }
            Command::Exec(args) => {
                commands::exec::run(&app.output, app.compose.as_ref(), args).await
            }
            Command::Run(args) => {
                commands::run::run(&app.output, app.compose.as_ref(), args).await
            }
            Command::Logs(args) => {
                commands::logs::run(app.compose.as_ref(), args).await
            }
        }
    }
}
