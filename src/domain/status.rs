//! Per-service container status: parsing and display labels.

use serde::{Deserialize, Serialize};

/// A container whose runtime state begins with this prefix is considered
/// running. Exact, case-sensitive match against the raw state text.
const RUNNING_PREFIX: &str = "Up";

/// Field separator between the state and ports sections of a raw status line.
const FIELD_SEPARATOR: char = '|';

/// Live status of a single configured service.
///
/// Built once per probe and immutable afterwards; the aggregator consumes it
/// to assemble the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Service name as enumerated from the manifest.
    pub name: String,
    /// Whether the backing container is up.
    pub running: bool,
    /// Published ports description, empty when none.
    pub ports: String,
    /// Raw state description, empty when no container exists.
    pub state: String,
}

/// Parse a raw `<state>` or `<state>|<ports>` line into a [`ServiceStatus`].
///
/// Total over all inputs: an empty line means "no meaningful status" and
/// degrades to empty state/ports rather than an error. Only the first
/// separator is significant; the ports section may itself be empty.
#[must_use]
pub fn parse_status_line(name: &str, raw: &str) -> ServiceStatus {
    let (state, ports) = match raw.split_once(FIELD_SEPARATOR) {
        Some((state, ports)) => (state, ports),
        None => (raw, ""),
    };

    ServiceStatus {
        name: name.to_string(),
        running: state.starts_with(RUNNING_PREFIX),
        ports: ports.to_string(),
        state: state.to_string(),
    }
}

/// Display label for the `Running` report column.
#[must_use]
pub fn running_label(running: bool) -> &'static str {
    if running { "Running" } else { "Not running" }
}
