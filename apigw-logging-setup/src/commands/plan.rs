//! Plan creation logic for the account logging setup

use crate::aws::resource_naming::{account_binding_name, account_lookup_name};
use crate::error::{SetupError, SetupResult};
use crate::synthesis::build_logging_role;
use crate::types::{DeploymentScope, SetupPlan};

impl super::service::AccountLoggingSetup {
    /// Read the account settings and decide what, if anything, must be created.
    ///
    /// Has no side effects. The region is only resolved when no logging role is attached.
    pub async fn plan(&self, scope: &DeploymentScope) -> SetupResult<SetupPlan> {
        let account = self
            .accounts
            .get_account(scope)
            .await
            .map_err(SetupError::Lookup)?;
        let lookup_name = account_lookup_name(scope);

        if let Some(role_arn) = account.logging_role_arn() {
            log::debug!("{lookup_name} already has logging role {role_arn}");
            return Ok(SetupPlan::AlreadyConfigured {
                logical_name: lookup_name,
                logging_role_arn: role_arn.to_string(),
            });
        }

        let region = self
            .regions
            .resolve_region(scope)
            .await
            .map_err(SetupError::RegionResolution)?;
        let role = build_logging_role(&region);
        if let Some(notice) = &role.notice {
            log::info!("{notice}");
        }

        Ok(SetupPlan::Provision {
            lookup_name,
            binding_name: account_binding_name(scope),
            role,
        })
    }
}
