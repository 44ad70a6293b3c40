use async_trait::async_trait;
use aws_sdk_sts::Client as StsClient;

use crate::aws::{AwsError, AwsResult};
use crate::providers::CallerIdentity;

/// Return the current caller account ID using STS GetCallerIdentity.
///
/// # Arguments
///
/// * `client` - STS client to use for the API call
pub async fn caller_account_id(client: &StsClient) -> AwsResult<String> {
    let out = client
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| AwsError::SdkError(format!("STS GetCallerIdentity failed: {}", e)))?;
    out.account()
        .map(ToOwned::to_owned)
        .ok_or_else(|| AwsError::SdkError("STS GetCallerIdentity missing Account".to_string()))
}

pub struct AwsCallerIdentity {
    client: StsClient,
}

impl AwsCallerIdentity {
    pub fn new(client: StsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CallerIdentity for AwsCallerIdentity {
    async fn account_id(&self) -> AwsResult<String> {
        caller_account_id(&self.client).await
    }
}
