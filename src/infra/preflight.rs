//! Precondition gate — dependency and shared-network checks that run
//! before any service is probed or started.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::{CommandRunner, DependencyChecker, NetworkGuard};
use crate::domain::error::PreflightError;

/// Default name of the shared attachable network joining all devstack
/// projects on one host. Override with `DEVSTACK_NETWORK`.
pub const DEFAULT_NETWORK: &str = "devstack_global";

/// Resolve the shared network name from the environment.
#[must_use]
pub fn network_name() -> String {
    std::env::var("DEVSTACK_NETWORK")
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_NETWORK.to_string())
}

/// Verifies the docker toolchain is present and the daemon answers.
pub struct DockerDependencyChecker<R> {
    runner: R,
}

impl<R: CommandRunner> DockerDependencyChecker<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl<R: CommandRunner> DependencyChecker for DockerDependencyChecker<R> {
    async fn verify_dependencies(&self) -> Result<()> {
        if self
            .runner
            .run("docker-compose", &["--version"])
            .await
            .is_err()
        {
            return Err(PreflightError::MissingDependency("docker-compose").into());
        }

        if self.runner.run("docker", &["info"]).await.is_err() {
            return Err(PreflightError::DaemonUnreachable.into());
        }

        Ok(())
    }
}

/// Ensures the shared attachable docker network exists, creating it on
/// first use.
pub struct DockerNetworkGuard<R> {
    runner: R,
    network: String,
}

impl<R: CommandRunner> DockerNetworkGuard<R> {
    #[must_use]
    pub fn new(runner: R, network: String) -> Self {
        Self { runner, network }
    }
}

#[async_trait]
impl<R: CommandRunner> NetworkGuard for DockerNetworkGuard<R> {
    async fn ensure_network(&self) -> Result<()> {
        let filter = format!("name=^{}$", self.network);
        let existing = self
            .runner
            .run("docker", &["network", "ls", "-q", "--filter", &filter])
            .await
            .map_err(|e| PreflightError::NetworkLookup {
                name: self.network.clone(),
                reason: e.to_string(),
            })?;

        if !existing.trim().is_empty() {
            return Ok(());
        }

        self.runner
            .run("docker", &["network", "create", "--attachable", &self.network])
            .await
            .map_err(|e| PreflightError::NetworkCreate {
                name: self.network.clone(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
