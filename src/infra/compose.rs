//! Docker Compose CLI abstraction — the production container runtime.
//!
//! All read-only queries go through the injected [`CommandRunner`] with its
//! timeout discipline; lifecycle and exec operations inherit the caller's
//! stdio so output streams through transparently.

use std::process::ExitStatus;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::application::ports::{
    CommandRunner, ExecSpec, ImageRunner, RunSpec, ServiceExecutor, ServiceProber, StackLifecycle,
};

/// Go template handed to `docker ps` to produce the `<state>|<ports>` line
/// the status parser expects.
const STATUS_PORTS_FORMAT: &str = "{{.Status}}|{{.Ports}}";

/// Production compose runtime — shells out to the `docker-compose` and
/// `docker` binaries for the project in the current directory.
pub struct DockerComposeCli<R> {
    runner: R,
}

impl<R: CommandRunner> DockerComposeCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl<R: CommandRunner> ServiceProber for DockerComposeCli<R> {
    async fn list_services(&self) -> Result<String> {
        let out = self.runner.run("docker-compose", &["ps", "--services"]).await?;
        Ok(out.trim().to_string())
    }

    async fn container_id(&self, service: &str) -> Result<String> {
        let out = self.runner.run("docker-compose", &["ps", "-q", service]).await?;
        Ok(out.trim().to_string())
    }

    async fn container_status(&self, container_id: &str) -> Result<String> {
        let filter = format!("id={container_id}");
        let out = self
            .runner
            .run(
                "docker",
                &["ps", "-a", "--filter", &filter, "--format", STATUS_PORTS_FORMAT],
            )
            .await?;
        Ok(out.trim().to_string())
    }
}

#[async_trait]
impl<R: CommandRunner> StackLifecycle for DockerComposeCli<R> {
    async fn up(&self, services: &[String]) -> Result<ExitStatus> {
        let mut args = vec!["up", "-d", "--force-recreate"];
        args.extend(services.iter().map(String::as_str));
        self.runner.run_status("docker-compose", &args).await
    }

    async fn down(&self, purge_volumes: bool) -> Result<ExitStatus> {
        let mut args = vec!["down"];
        if purge_volumes {
            args.push("--volumes");
        }
        self.runner.run_status("docker-compose", &args).await
    }

    async fn logs(&self, tail: &str, follow: bool, services: &[String]) -> Result<ExitStatus> {
        let mut args = vec!["logs", "--tail", tail];
        if follow {
            args.push("--follow");
        }
        args.extend(services.iter().map(String::as_str));
        self.runner.run_status("docker-compose", &args).await
    }
}

#[async_trait]
impl<R: CommandRunner> ServiceExecutor for DockerComposeCli<R> {
    async fn exec(&self, spec: &ExecSpec) -> Result<ExitStatus> {
        let mut args = vec!["exec"];
        if spec.disable_tty {
            args.push("-T");
        }
        if let Some(user) = spec.user.as_deref() {
            args.push("--user");
            args.push(user);
        }
        for entry in &spec.env {
            args.push("--env");
            args.push(entry);
        }
        if spec.detach {
            args.push("--detach");
        }
        args.push(&spec.service);
        args.extend(spec.command.iter().map(String::as_str));
        self.runner.run_status("docker-compose", &args).await
    }
}

#[async_trait]
impl<R: CommandRunner> ImageRunner for DockerComposeCli<R> {
    async fn run_image(&self, spec: &RunSpec) -> Result<ExitStatus> {
        let workdir = std::env::current_dir().context("resolving the project directory")?;
        let mount = format!("{}:/app:delegated", workdir.display());
        let args = run_image_args(spec, &mount);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner.run_status("docker", &args).await
    }
}

/// Assemble the `docker run` argument list for a [`RunSpec`]. The project
/// directory mount always comes after the user-supplied environment entries
/// and before any extra volumes.
fn run_image_args(spec: &RunSpec, workdir_mount: &str) -> Vec<String> {
    let mut args: Vec<String> = ["run", "--init", "--rm", "-w", "/app", "-i"]
        .iter()
        .map(ToString::to_string)
        .collect();
    if spec.allocate_tty {
        args.push("-t".to_string());
    }
    if let Some(user) = &spec.user {
        args.push("--env".to_string());
        args.push(format!("ASUSER={user}"));
    }
    for entry in &spec.env {
        args.push("--env".to_string());
        args.push(entry.clone());
    }
    args.push("--volume".to_string());
    args.push(workdir_mount.to_string());
    for volume in &spec.volumes {
        args.push("--volume".to_string());
        args.push(volume.clone());
    }
    for publish in &spec.publish {
        args.push("--publish".to_string());
        args.push(publish.clone());
    }
    args.push(spec.image.clone());
    args.extend(spec.command.iter().cloned());
    args
}
