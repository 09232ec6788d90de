//! Application services — use-case orchestration over port traits.

pub mod stack_status;
