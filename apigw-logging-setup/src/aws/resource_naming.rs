//! Logical resource names within a deployment scope

use crate::types::DeploymentScope;

/// Physical IAM role name. Fixed, so a role orphaned by an interrupted run collides on retry.
pub const LOGGING_ROLE_NAME: &str = "APIGatewayPushToCloudWatchLogsRole";

/// Tag marking roles that must survive teardown of the creating deployment
pub const RETAIN_ON_DELETE_TAG: &str = "retain-on-delete";
/// Tag recording which scope created the role
pub const SCOPE_TAG: &str = "apigw-logging-setup:scope";

/// Name under which the pre-existing account settings are looked up
pub fn account_lookup_name(scope: &DeploymentScope) -> String {
    format!("{}APIGatewayAccount", scope.prefix())
}

/// Name of the account binding created when a role is provisioned
pub fn account_binding_name(scope: &DeploymentScope) -> String {
    format!("{}APIGatewayAccountSetup", scope.prefix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_prefixed() {
        let scope = DeploymentScope::new("MyApp").unwrap();
        assert_eq!(account_lookup_name(&scope), "MyAppAPIGatewayAccount");
        assert_eq!(account_binding_name(&scope), "MyAppAPIGatewayAccountSetup");
    }
}
