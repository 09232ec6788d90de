//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.
//!
//! Traits whose futures cross a `tokio::spawn` boundary use `async_trait`
//! so they stay object-safe and their futures are `Send`.

use std::process::ExitStatus;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// `run` captures stdout and treats a non-zero exit as an error; `run_status`
/// inherits the caller's stdio for interactive pass-through. Timeout behavior
/// belongs entirely to the runner — callers never impose their own.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program, capture stdout, and fail on spawn error or non-zero exit.
    async fn run(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, exits non-zero, or
    /// exceeds `timeout`. On timeout the child is killed, not left orphaned.
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<String>;

    /// Run a program with inherited stdio and return only its exit status.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Container Runtime Ports ───────────────────────────────────────────────────

/// The three read-only queries the status aggregator fans out over.
///
/// Each method returns trimmed stdout; an execution failure (spawn error or
/// non-zero exit) surfaces as `Err`.
#[async_trait]
pub trait ServiceProber: Send + Sync {
    /// List configured service names, one per line.
    async fn list_services(&self) -> Result<String>;

    /// Resolve the live container identifier for a service.
    /// Empty output means no running container exists for it.
    async fn container_id(&self, service: &str) -> Result<String>;

    /// Fetch the combined `<state>|<ports>` descriptor for a container.
    /// Called uniformly, even when `container_id` is empty.
    async fn container_status(&self, container_id: &str) -> Result<String>;
}

/// Environment lifecycle operations: bring services up, tear them down,
/// stream their logs. All run with inherited stdio.
#[async_trait]
pub trait StackLifecycle: Send + Sync {
    /// Create and start service containers (all of them when `services` is empty).
    async fn up(&self, services: &[String]) -> Result<ExitStatus>;

    /// Stop and remove containers; also remove volumes when `purge_volumes`.
    async fn down(&self, purge_volumes: bool) -> Result<ExitStatus>;

    /// Stream service logs.
    async fn logs(&self, tail: &str, follow: bool, services: &[String]) -> Result<ExitStatus>;
}

/// Parameters for running a command inside a service container.
/// Struct-based to avoid breaking test doubles on future additions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecSpec {
    /// Target service name.
    pub service: String,
    /// Command and arguments to run inside the container.
    pub command: Vec<String>,
    /// Optional user to run as (`--user`).
    pub user: Option<String>,
    /// Extra `KEY=VALUE` environment entries.
    pub env: Vec<String>,
    /// Run detached instead of attached.
    pub detach: bool,
    /// Disable pseudo-TTY allocation (stdout is not a terminal).
    pub disable_tty: bool,
}

/// Command execution inside a service container.
#[async_trait]
pub trait ServiceExecutor: Send + Sync {
    /// Execute a command in a service container with inherited stdio.
    async fn exec(&self, spec: &ExecSpec) -> Result<ExitStatus>;
}

/// Parameters for running a one-off container from an arbitrary image with
/// the project directory mounted as its workdir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSpec {
    /// Image to run.
    pub image: String,
    /// Command and arguments to run inside the container, may be empty.
    pub command: Vec<String>,
    /// Optional user identity forwarded as the `ASUSER` container variable.
    pub user: Option<String>,
    /// Extra `KEY=VALUE` environment entries.
    pub env: Vec<String>,
    /// Extra volume bindings.
    pub volumes: Vec<String>,
    /// Ports to publish.
    pub publish: Vec<String>,
    /// Allocate a pseudo-TTY (stdout is a terminal).
    pub allocate_tty: bool,
}

/// One-off container execution from an arbitrary image.
#[async_trait]
pub trait ImageRunner: Send + Sync {
    /// Run a throwaway container with inherited stdio.
    async fn run_image(&self, spec: &RunSpec) -> Result<ExitStatus>;
}

/// Composite trait — any type implementing all three container-runtime
/// sub-traits is a `ComposeRuntime`.
pub trait ComposeRuntime: ServiceProber + StackLifecycle + ServiceExecutor {}

impl<T> ComposeRuntime for T where T: ServiceProber + StackLifecycle + ServiceExecutor {}

// ── Precondition Gate Ports ───────────────────────────────────────────────────

/// Environment/dependency verification run before any probing starts.
#[async_trait]
pub trait DependencyChecker: Send + Sync {
    /// Verify that the container runtime dependencies are usable.
    async fn verify_dependencies(&self) -> Result<()>;
}

/// Shared-network verification run before any probing starts.
#[async_trait]
pub trait NetworkGuard: Send + Sync {
    /// Ensure the shared attachable network exists, creating it when missing.
    async fn ensure_network(&self) -> Result<()>;
}

// ── Table Renderer Port ───────────────────────────────────────────────────────

/// Accepts a header and ordered rows; how they are serialized is a
/// presentation detail the application layer does not know about.
pub trait TableRenderer {
    /// Render a header row followed by data rows.
    fn render(&self, header: &[&str], rows: &[Vec<String>]);
}
