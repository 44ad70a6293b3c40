//! Commands module - service layer for the account logging setup

mod apply;
mod plan;
pub(crate) mod service;

pub use service::AccountLoggingSetup;
