//! Command implementations

pub mod exec;
pub mod logs;
pub mod run;
pub mod start;
pub mod status;
pub mod stop;
