//! Error types surfaced by the setup operations

use crate::aws::AwsError;
use thiserror::Error;

/// Errors returned by [`crate::AccountLoggingSetup`].
///
/// Provider failures are carried unmodified. Nothing is retried and a role that was
/// created before a later failure is left in place.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The caller supplied an unusable scope prefix.
    #[error("Invalid deployment scope: {0}")]
    InvalidScope(String),

    /// The account settings singleton (or the caller identity) could not be read.
    #[error("Account lookup failed: {0}")]
    Lookup(AwsError),

    /// The deployment region could not be determined.
    #[error("Region resolution failed: {0}")]
    RegionResolution(AwsError),

    /// Role creation or the account binding was rejected by the provider.
    #[error("Provisioning failed: {0}")]
    Provisioning(AwsError),
}

impl SetupError {
    /// Create an invalid scope error
    pub fn invalid_scope(message: impl Into<String>) -> Self {
        Self::InvalidScope(message.into())
    }
}

pub type SetupResult<T> = Result<T, SetupError>;
