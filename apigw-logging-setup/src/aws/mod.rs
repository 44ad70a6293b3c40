//! AWS SDK integration: API Gateway account store, IAM role provisioner, STS identity, region.

pub mod apigateway_client;
pub mod iam_client;
pub mod region;
pub mod resource_naming;
pub mod sts;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("AWS configuration error: {0}")]
    ConfigError(String),
    #[error("API Gateway client error: {0}")]
    ApiGatewayError(String),
    #[error("IAM client error: {0}")]
    IamError(String),
    #[error("Policy error: {0}")]
    PolicyError(String),
    #[error("AWS SDK error: {0}")]
    SdkError(String),
}

pub type AwsResult<T> = Result<T, AwsError>;

/// Overrides applied on top of the default AWS configuration chain
#[derive(Debug, Clone, Default)]
pub struct AwsOptions {
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// Load AWS configuration using the standard credential provider chain
pub async fn load_sdk_config(options: &AwsOptions) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &options.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &options.profile {
        loader = loader.profile_name(profile);
    }
    loader.load().await
}
