//! Infrastructure layer — adapters that fulfill the application ports by
//! talking to the outside world (processes, environment).

pub mod command_runner;
pub mod compose;
pub mod preflight;
