//! Region resolution from the loaded SDK configuration

use crate::aws::{AwsError, AwsResult};
use crate::providers::RegionResolver;
use crate::types::DeploymentScope;
use async_trait::async_trait;
use aws_config::{Region, SdkConfig};

/// Resolves to whatever region the SDK configuration settled on
pub struct ConfiguredRegion {
    region: Option<Region>,
}

impl ConfiguredRegion {
    pub fn new(region: Option<Region>) -> Self {
        Self { region }
    }

    pub fn from_config(config: &SdkConfig) -> Self {
        Self::new(config.region().cloned())
    }
}

#[async_trait]
impl RegionResolver for ConfiguredRegion {
    async fn resolve_region(&self, scope: &DeploymentScope) -> AwsResult<String> {
        self.region
            .as_ref()
            .map(|region| region.as_ref().to_string())
            .ok_or_else(|| {
                AwsError::ConfigError(format!(
                    "No AWS region configured for scope '{}'",
                    scope.prefix()
                ))
            })
    }
}
