//! Account Logging Setup Service Layer
//!
//! The service holds the collaborators (account store, role provisioner, region resolver,
//! caller identity) and exposes the high-level operations (plan, apply, setup, status)
//! used by the CLI.

use crate::aws::apigateway_client::AwsAccountStore;
use crate::aws::iam_client::AwsRoleProvisioner;
use crate::aws::region::ConfiguredRegion;
use crate::aws::sts::AwsCallerIdentity;
use crate::aws::{load_sdk_config, AwsOptions};
use crate::error::{SetupError, SetupResult};
use crate::providers::{AccountStore, CallerIdentity, RegionResolver, RoleProvisioner};
use crate::types::{AccountHandle, AccountStatus, DeploymentScope};
use std::sync::Arc;

/// Main service struct that provisions the API Gateway account logging role
pub struct AccountLoggingSetup {
    pub(crate) accounts: Arc<dyn AccountStore>,
    pub(crate) roles: Arc<dyn RoleProvisioner>,
    pub(crate) regions: Arc<dyn RegionResolver>,
    pub(crate) identity: Arc<dyn CallerIdentity>,
}

impl AccountLoggingSetup {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        roles: Arc<dyn RoleProvisioner>,
        regions: Arc<dyn RegionResolver>,
        identity: Arc<dyn CallerIdentity>,
    ) -> Self {
        Self {
            accounts,
            roles,
            regions,
            identity,
        }
    }

    /// Create a service instance backed by AWS clients.
    ///
    /// The configuration is loaded using the default credential provider chain, with
    /// `options` applied on top.
    pub async fn from_env(options: &AwsOptions) -> Self {
        let config = load_sdk_config(options).await;

        Self::new(
            Arc::new(AwsAccountStore::new(aws_sdk_apigateway::Client::new(&config))),
            Arc::new(AwsRoleProvisioner::new(aws_sdk_iam::Client::new(&config))),
            Arc::new(ConfiguredRegion::from_config(&config)),
            Arc::new(AwsCallerIdentity::new(aws_sdk_sts::Client::new(&config))),
        )
    }

    /// Ensure the account has a CloudWatch logging role: plan, then apply.
    pub async fn setup(&self, scope: &DeploymentScope) -> SetupResult<AccountHandle> {
        let plan = self.plan(scope).await?;
        self.apply(scope, plan).await
    }

    /// Report the caller account and the currently attached logging role
    pub async fn status(&self, scope: &DeploymentScope) -> SetupResult<AccountStatus> {
        let account_id = self
            .identity
            .account_id()
            .await
            .map_err(SetupError::Lookup)?;
        let account = self
            .accounts
            .get_account(scope)
            .await
            .map_err(SetupError::Lookup)?;

        Ok(AccountStatus {
            account_id,
            state: account.state(),
            logging_role_arn: account.logging_role_arn().map(ToOwned::to_owned),
        })
    }

    // plan() method implementation is in plan.rs
    // apply() method implementation is in apply.rs
}
