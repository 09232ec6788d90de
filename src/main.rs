//! Devstack CLI - orchestrate containerized development environments

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use devstack::cli::Cli;
use devstack::output::OutputContext;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let output = OutputContext::new(cli.no_color, cli.quiet);
    if let Err(e) = cli.run().await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}
