//! This crate provides the core logic for API Gateway account logging setup:
//! - Partition selection for the CloudWatch push policy
//! - Trust policy synthesis for the logging role
//! - Idempotent plan/apply against the account settings singleton
//!

pub mod aws;
pub mod commands;
mod error;
mod partition;
pub mod providers;
mod synthesis;
mod types;

// Re-exports for a small, focused public API
pub use aws::{AwsError, AwsOptions, AwsResult};
pub use commands::AccountLoggingSetup;
pub use error::{SetupError, SetupResult};
pub use partition::Partition;
pub use synthesis::{build_logging_role, build_trust_policy};
pub use types::{
    AccountHandle, AccountSettings, AccountState, AccountStatus, CreatedRole, DeploymentScope,
    PlannedRole, PolicyDocument, Principal, RoleSpec, SetupPlan, Statement,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_role_for_sample_region() {
        let planned = build_logging_role("eu-central-1");
        assert_eq!(planned.partition, Partition::Standard);
        assert_eq!(
            planned.role.managed_policy_arns,
            vec!["arn:aws:iam::aws:policy/service-role/AmazonAPIGatewayPushToCloudWatchLogs"]
        );
        assert!(planned.role.retain_on_delete);
    }
}
