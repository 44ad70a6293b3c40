//! Policy and role synthesis (deterministic, no I/O)

pub mod role_builder;

pub use role_builder::{build_logging_role, build_trust_policy};
