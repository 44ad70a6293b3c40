//! Builders for the logging role and its trust policy

use crate::aws::resource_naming::LOGGING_ROLE_NAME;
use crate::partition::Partition;
use crate::types::{PlannedRole, PolicyDocument, Principal, RoleSpec, Statement};

pub const POLICY_VERSION: &str = "2012-10-17";
pub const APIGATEWAY_SERVICE_PRINCIPAL: &str = "apigateway.amazonaws.com";
const ASSUME_ROLE_ACTION: &str = "sts:AssumeRole";
const ROLE_DESCRIPTION: &str = "Allows API Gateway to push execution logs to CloudWatch Logs";

/// Build a single-statement trust policy letting `service_principal` assume the role
pub fn build_trust_policy(service_principal: &str) -> PolicyDocument {
    PolicyDocument {
        version: POLICY_VERSION.to_string(),
        statement: vec![Statement {
            effect: "Allow".to_string(),
            principal: Principal {
                service: service_principal.to_string(),
            },
            action: ASSUME_ROLE_ACTION.to_string(),
        }],
    }
}

/// Plan the logging role for a resolved region.
///
/// Pure function of the region: picks the partition, the matching managed policy,
/// and always marks the role retain-on-delete.
pub fn build_logging_role(region: &str) -> PlannedRole {
    let partition = Partition::from_region(region);

    PlannedRole {
        region: region.to_string(),
        partition,
        notice: partition.notice().map(str::to_string),
        role: RoleSpec {
            name: LOGGING_ROLE_NAME.to_string(),
            description: ROLE_DESCRIPTION.to_string(),
            trust_policy: build_trust_policy(APIGATEWAY_SERVICE_PRINCIPAL),
            managed_policy_arns: vec![partition.push_to_cloudwatch_logs_policy_arn()],
            retain_on_delete: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_policy_shape() {
        let policy = build_trust_policy(APIGATEWAY_SERVICE_PRINCIPAL);
        let json: serde_json::Value = serde_json::to_value(&policy).unwrap();

        assert_eq!(json["Version"], "2012-10-17");
        let statements = json["Statement"].as_array().unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0]["Effect"], "Allow");
        assert_eq!(statements[0]["Principal"]["Service"], "apigateway.amazonaws.com");
        assert_eq!(statements[0]["Action"], "sts:AssumeRole");
    }

    #[test]
    fn test_china_region_role() {
        let planned = build_logging_role("cn-north-1");
        assert_eq!(planned.partition, Partition::China);
        assert_eq!(planned.notice.as_deref(), Some("AWS China detected."));
        assert_eq!(
            planned.role.managed_policy_arns,
            vec!["arn:aws-cn:iam::aws:policy/service-role/AmazonAPIGatewayPushToCloudWatchLogs"]
        );
    }

    #[test]
    fn test_standard_region_role() {
        let planned = build_logging_role("us-west-2");
        assert_eq!(planned.partition, Partition::Standard);
        assert_eq!(planned.notice, None);
        assert_eq!(planned.role.name, "APIGatewayPushToCloudWatchLogsRole");
        assert_eq!(planned.role.managed_policy_arns.len(), 1);
    }

    #[test]
    fn test_role_is_always_retained() {
        for region in ["us-east-1", "cn-northwest-1", "eu-west-1"] {
            assert!(build_logging_role(region).role.retain_on_delete);
        }
    }
}
