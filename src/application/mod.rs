//! Application layer — use-cases wired to infrastructure through port traits.

pub mod ports;
pub mod services;
