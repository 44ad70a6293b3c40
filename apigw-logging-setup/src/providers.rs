//! Collaborator seams for the setup service.
//!
//! The AWS-backed implementations live in [`crate::aws`]; tests substitute in-memory ones.

use crate::aws::AwsResult;
use crate::types::{AccountSettings, CreatedRole, DeploymentScope, RoleSpec};
use async_trait::async_trait;

/// Read and write access to the API Gateway account settings singleton
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get_account(&self, scope: &DeploymentScope) -> AwsResult<AccountSettings>;

    /// Bind `role_arn` as the account's CloudWatch logging role
    async fn set_logging_role(
        &self,
        scope: &DeploymentScope,
        role_arn: &str,
    ) -> AwsResult<AccountSettings>;
}

/// Creates IAM roles
#[async_trait]
pub trait RoleProvisioner: Send + Sync {
    async fn create_role(&self, scope: &DeploymentScope, spec: &RoleSpec) -> AwsResult<CreatedRole>;
}

/// Resolves the region the scope deploys into
#[async_trait]
pub trait RegionResolver: Send + Sync {
    async fn resolve_region(&self, scope: &DeploymentScope) -> AwsResult<String>;
}

/// Identifies the account the credentials belong to
#[async_trait]
pub trait CallerIdentity: Send + Sync {
    async fn account_id(&self) -> AwsResult<String>;
}
