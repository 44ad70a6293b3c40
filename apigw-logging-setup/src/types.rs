//! Data types shared by the planning and provisioning layers

use crate::error::{SetupError, SetupResult};
use crate::partition::Partition;
use serde::{Deserialize, Serialize};

/// Namespacing context for one logical deployment.
///
/// Passed explicitly to every collaborator call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentScope {
    prefix: String,
}

impl DeploymentScope {
    pub fn new(prefix: impl Into<String>) -> SetupResult<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(SetupError::invalid_scope("scope prefix must not be empty"));
        }
        Ok(Self { prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// IAM policy document, serialized with the PascalCase keys IAM expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub effect: String,
    pub principal: Principal,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Principal {
    pub service: String,
}

/// Observed state of the API Gateway account settings singleton
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub cloudwatch_role_arn: Option<String>,
}

impl AccountSettings {
    pub fn with_role(role_arn: impl Into<String>) -> Self {
        Self {
            cloudwatch_role_arn: Some(role_arn.into()),
        }
    }

    /// The attached logging role, treating an empty string as unset
    pub fn logging_role_arn(&self) -> Option<&str> {
        self.cloudwatch_role_arn
            .as_deref()
            .filter(|arn| !arn.is_empty())
    }

    pub fn state(&self) -> AccountState {
        if self.logging_role_arn().is_some() {
            AccountState::Configured
        } else {
            AccountState::Unconfigured
        }
    }
}

/// `Unconfigured` moves to `Configured` at most once; nothing here moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountState {
    Unconfigured,
    Configured,
}

/// Everything required to create the logging role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSpec {
    pub name: String,
    pub description: String,
    pub trust_policy: PolicyDocument,
    pub managed_policy_arns: Vec<String>,
    /// The role outlives the deployment that created it
    pub retain_on_delete: bool,
}

/// A role as reported back by the provisioner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRole {
    pub name: String,
    pub arn: String,
}

/// Role plan derived from the resolved region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedRole {
    pub region: String,
    pub partition: Partition,
    /// Informational only, never changes what gets created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub role: RoleSpec,
}

/// Decision taken once the current account state is known
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum SetupPlan {
    /// A logging role is already attached; nothing will be changed
    AlreadyConfigured {
        #[serde(rename = "logicalName")]
        logical_name: String,
        #[serde(rename = "loggingRoleArn")]
        logging_role_arn: String,
    },
    /// A role has to be created and bound to the account
    Provision {
        #[serde(rename = "lookupName")]
        lookup_name: String,
        #[serde(rename = "bindingName")]
        binding_name: String,
        role: PlannedRole,
    },
}

impl SetupPlan {
    pub fn creates_role(&self) -> bool {
        matches!(self, Self::Provision { .. })
    }
}

/// Final account state handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHandle {
    pub logical_name: String,
    /// Always `Configured` once a handle exists
    pub state: AccountState,
    /// Never empty
    pub logging_role_arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_role: Option<CreatedRole>,
}

/// Operator-facing snapshot used by the `status` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatus {
    pub account_id: String,
    pub state: AccountState,
    pub logging_role_arn: Option<String>,
}
