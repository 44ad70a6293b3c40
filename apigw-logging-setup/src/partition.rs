//! AWS partition selection from a region identifier

use serde::{Deserialize, Serialize};
use std::fmt;

const CHINA_REGION_PREFIX: &str = "cn-";
const PUSH_TO_CLOUDWATCH_LOGS_POLICY: &str =
    "policy/service-role/AmazonAPIGatewayPushToCloudWatchLogs";
// Account segment used by AWS managed policies
const AWS_MANAGED_ACCOUNT: &str = "aws";

/// The two partitions this crate distinguishes. Each has its own ARN namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Partition {
    #[serde(rename = "aws")]
    Standard,
    #[serde(rename = "aws-cn")]
    China,
}

impl Partition {
    pub fn from_region(region: &str) -> Self {
        if region.starts_with(CHINA_REGION_PREFIX) {
            Self::China
        } else {
            Self::Standard
        }
    }

    /// Partition segment used in ARNs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "aws",
            Self::China => "aws-cn",
        }
    }

    /// Build an IAM ARN in this partition (IAM ARNs carry no region)
    pub fn iam_arn(self, account: &str, resource: &str) -> String {
        format!("arn:{}:iam::{account}:{resource}", self.name())
    }

    pub fn push_to_cloudwatch_logs_policy_arn(self) -> String {
        self.iam_arn(AWS_MANAGED_ACCOUNT, PUSH_TO_CLOUDWATCH_LOGS_POLICY)
    }

    /// Note for operators when deploying outside the standard partition
    pub const fn notice(self) -> Option<&'static str> {
        match self {
            Self::Standard => None,
            Self::China => Some("AWS China detected."),
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
