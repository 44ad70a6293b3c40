//! Apply logic for the account logging setup

use crate::error::{SetupError, SetupResult};
use crate::types::{AccountHandle, AccountState, DeploymentScope, SetupPlan};

impl super::service::AccountLoggingSetup {
    /// Execute a plan produced by [`Self::plan`].
    ///
    /// The role is created before the account binding that references it. Failures are
    /// returned as-is; a role created before a binding failure is not removed.
    pub async fn apply(
        &self,
        scope: &DeploymentScope,
        plan: SetupPlan,
    ) -> SetupResult<AccountHandle> {
        let (binding_name, planned) = match plan {
            SetupPlan::AlreadyConfigured {
                logical_name,
                logging_role_arn,
            } => {
                return Ok(AccountHandle {
                    logical_name,
                    state: AccountState::Configured,
                    logging_role_arn,
                    created_role: None,
                })
            }
            SetupPlan::Provision {
                binding_name, role, ..
            } => (binding_name, role),
        };

        let created = self
            .roles
            .create_role(scope, &planned.role)
            .await
            .map_err(SetupError::Provisioning)?;
        log::info!("Created logging role {}", created.arn);

        let account = self
            .accounts
            .set_logging_role(scope, &created.arn)
            .await
            .map_err(SetupError::Provisioning)?;
        let logging_role_arn = account
            .logging_role_arn()
            .map_or_else(|| created.arn.clone(), ToOwned::to_owned);
        log::info!("Bound {logging_role_arn} to {binding_name}");

        Ok(AccountHandle {
            logical_name: binding_name,
            state: AccountState::Configured,
            logging_role_arn,
            created_role: Some(created),
        })
    }
}
