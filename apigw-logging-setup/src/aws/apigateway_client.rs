//! API Gateway account settings access

use crate::aws::{AwsError, AwsResult};
use crate::providers::AccountStore;
use crate::types::{AccountSettings, DeploymentScope};
use async_trait::async_trait;
use aws_sdk_apigateway::error::ProvideErrorMetadata;
use aws_sdk_apigateway::types::{Op, PatchOperation};
use aws_sdk_apigateway::Client as ApiGatewayClient;
use backon::{ExponentialBuilder, Retryable};
use std::time::Duration;

const CLOUDWATCH_ROLE_ARN_PATH: &str = "/cloudwatchRoleArn";

/// Returned by UpdateAccount while a freshly created role is not yet visible to API Gateway
const PROPAGATION_ERROR_CODE: &str = "BadRequestException";
const PROPAGATION_ERROR_MESSAGE: &str = "The role ARN does not have required permissions";

pub struct AwsAccountStore {
    client: ApiGatewayClient,
    propagation_backoff: ExponentialBuilder,
}

impl AwsAccountStore {
    pub fn new(client: ApiGatewayClient) -> Self {
        Self {
            client,
            // roughly a minute and a half before giving up
            propagation_backoff: ExponentialBuilder::default()
                .with_min_delay(Duration::from_secs(1))
                .with_max_delay(Duration::from_secs(10))
                .with_max_times(12),
        }
    }
}

#[async_trait]
impl AccountStore for AwsAccountStore {
    async fn get_account(&self, scope: &DeploymentScope) -> AwsResult<AccountSettings> {
        log::debug!("Reading API Gateway account settings for '{}'", scope.prefix());
        let output = self.client.get_account().send().await.map_err(|e| {
            AwsError::ApiGatewayError(format!("Failed to get account settings: {e:?}"))
        })?;

        Ok(AccountSettings {
            cloudwatch_role_arn: output.cloudwatch_role_arn().map(ToOwned::to_owned),
        })
    }

    /// Bind the role, retrying only while IAM has not yet propagated it to API Gateway.
    async fn set_logging_role(
        &self,
        scope: &DeploymentScope,
        role_arn: &str,
    ) -> AwsResult<AccountSettings> {
        log::debug!(
            "Binding '{role_arn}' to API Gateway account for '{}'",
            scope.prefix()
        );
        let output = (|| async {
            self.client
                .update_account()
                .patch_operations(cloudwatch_role_patch(role_arn))
                .send()
                .await
        })
        .retry(self.propagation_backoff.clone())
        .when(|e| is_role_propagation_delay(e.code(), e.message()))
        .notify(|_, delay| {
            log::warn!("Role '{role_arn}' not yet usable by API Gateway, retrying in {delay:?}");
        })
        .await
        .map_err(|e| {
            AwsError::ApiGatewayError(format!(
                "Failed to set CloudWatch role '{role_arn}' on account: {e:?}"
            ))
        })?;

        Ok(AccountSettings {
            cloudwatch_role_arn: output.cloudwatch_role_arn().map(ToOwned::to_owned),
        })
    }
}

fn cloudwatch_role_patch(role_arn: &str) -> PatchOperation {
    PatchOperation::builder()
        .op(Op::Replace)
        .path(CLOUDWATCH_ROLE_ARN_PATH)
        .value(role_arn)
        .build()
}

/// Classify an UpdateAccount error by its code and message
fn is_role_propagation_delay(code: Option<&str>, message: Option<&str>) -> bool {
    code == Some(PROPAGATION_ERROR_CODE)
        && message.is_some_and(|m| m.contains(PROPAGATION_ERROR_MESSAGE))
}
