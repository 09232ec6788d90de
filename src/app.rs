//! Application context — unified state passed to every command handler.
//!
//! Constructed once in `Cli::run()` and passed as `&AppContext` to all
//! command handlers. Adding a cross-cutting concern requires only one
//! field change here — zero command signatures change.

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::ServiceProber;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::compose::DockerComposeCli;
use crate::infra::preflight::{DockerDependencyChecker, DockerNetworkGuard, network_name};
use crate::output::OutputContext;

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Enable JSON output mode where a command supports it.
    pub json: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Disable ANSI color output.
    pub no_color: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Whether JSON output mode is active.
    pub json: bool,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when the `CI` or `DEVSTACK_YES` environment variables are present.
    pub non_interactive: bool,
    /// Production compose runtime for the project in the current directory.
    pub compose: Arc<DockerComposeCli<TokioCommandRunner>>,
    /// Docker toolchain dependency checker.
    pub checker: DockerDependencyChecker<TokioCommandRunner>,
    /// Shared-network guard.
    pub network: DockerNetworkGuard<TokioCommandRunner>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let non_interactive =
            std::env::var("CI").is_ok() || std::env::var("DEVSTACK_YES").is_ok();

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            json: flags.json,
            non_interactive,
            compose: Arc::new(DockerComposeCli::new(TokioCommandRunner::default())),
            checker: DockerDependencyChecker::new(TokioCommandRunner::default()),
            network: DockerNetworkGuard::new(TokioCommandRunner::default(), network_name()),
        }
    }

    /// The compose runtime as a shareable prober handle for concurrent use.
    #[must_use]
    pub fn prober(&self) -> Arc<dyn ServiceProber> {
        self.compose.clone()
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI or `DEVSTACK_YES` env), returns
    /// `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
