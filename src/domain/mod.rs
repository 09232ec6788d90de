//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod status;

#[allow(unused_imports)]
pub use error::PreflightError;
#[allow(unused_imports)]
pub use status::{ServiceStatus, parse_status_line, running_label};
