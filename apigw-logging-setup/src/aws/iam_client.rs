//! AWS IAM client wrapper for logging role creation

use crate::aws::resource_naming::{RETAIN_ON_DELETE_TAG, SCOPE_TAG};
use crate::aws::{AwsError, AwsResult};
use crate::providers::RoleProvisioner;
use crate::types::{CreatedRole, DeploymentScope, PolicyDocument, RoleSpec};
use async_trait::async_trait;
use aws_sdk_iam::operation::create_role::CreateRoleError;
use aws_sdk_iam::types::Tag;
use aws_sdk_iam::Client as IamClient;

pub struct AwsRoleProvisioner {
    client: IamClient,
}

impl AwsRoleProvisioner {
    pub fn new(client: IamClient) -> Self {
        Self { client }
    }

    async fn create_role_with_trust(&self, spec: &RoleSpec, tags: Vec<Tag>) -> AwsResult<String> {
        let trust_json = trust_policy_json(&spec.trust_policy)?;

        let output = self
            .client
            .create_role()
            .role_name(&spec.name)
            .description(&spec.description)
            .assume_role_policy_document(trust_json)
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(|e| {
                if e
                    .as_service_error()
                    .is_some_and(CreateRoleError::is_entity_already_exists_exception)
                {
                    log::warn!(
                        "Role '{}' already exists but is not bound to the account; \
                         it may be left over from an interrupted run",
                        spec.name
                    );
                }
                AwsError::IamError(format!("Failed to create role '{}': {e:?}", spec.name))
            })?;

        output
            .role()
            .map(|role| role.arn().to_string())
            .ok_or_else(|| {
                AwsError::IamError(format!(
                    "CreateRole response for '{}' did not include the role",
                    spec.name
                ))
            })
    }

    async fn attach_managed_policy(&self, role_name: &str, policy_arn: &str) -> AwsResult<()> {
        self.client
            .attach_role_policy()
            .role_name(role_name)
            .policy_arn(policy_arn)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "Failed to attach policy '{policy_arn}' to role '{role_name}': {e:?}"
                ))
            })?;
        Ok(())
    }
}

#[async_trait]
impl RoleProvisioner for AwsRoleProvisioner {
    async fn create_role(
        &self,
        scope: &DeploymentScope,
        spec: &RoleSpec,
    ) -> AwsResult<CreatedRole> {
        let tags = role_tags(scope, spec)?;
        log::debug!("Creating IAM role '{}'", spec.name);
        let arn = self.create_role_with_trust(spec, tags).await?;

        for policy_arn in &spec.managed_policy_arns {
            log::debug!("Attaching '{policy_arn}' to '{}'", spec.name);
            self.attach_managed_policy(&spec.name, policy_arn).await?;
        }

        Ok(CreatedRole {
            name: spec.name.clone(),
            arn,
        })
    }
}

fn trust_policy_json(policy: &PolicyDocument) -> AwsResult<String> {
    serde_json::to_string(policy)
        .map_err(|e| AwsError::PolicyError(format!("Failed to serialize trust policy: {e}")))
}

fn role_tags(scope: &DeploymentScope, spec: &RoleSpec) -> AwsResult<Vec<Tag>> {
    let mut tags = vec![build_tag(SCOPE_TAG, scope.prefix())?];
    if spec.retain_on_delete {
        tags.push(build_tag(RETAIN_ON_DELETE_TAG, "true")?);
    }
    Ok(tags)
}

fn build_tag(key: &str, value: &str) -> AwsResult<Tag> {
    Tag::builder()
        .key(key)
        .value(value)
        .build()
        .map_err(|e| AwsError::IamError(format!("Failed to build tag '{key}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::build_logging_role;

    #[test]
    fn test_trust_policy_json() {
        let spec = build_logging_role("us-east-1").role;
        let json = trust_policy_json(&spec.trust_policy).unwrap();
        assert!(json.contains("\"Version\":\"2012-10-17\""));
        assert!(json.contains("apigateway.amazonaws.com"));
        assert!(json.contains("sts:AssumeRole"));
    }

    #[test]
    fn test_role_tags_mark_retention() {
        let scope = DeploymentScope::new("Prod").unwrap();
        let spec = build_logging_role("us-east-1").role;
        let tags = role_tags(&scope, &spec).unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].key(), SCOPE_TAG);
        assert_eq!(tags[0].value(), "Prod");
        assert_eq!(tags[1].key(), RETAIN_ON_DELETE_TAG);
        assert_eq!(tags[1].value(), "true");
    }

    #[test]
    fn test_role_tags_without_retention() {
        let scope = DeploymentScope::new("Prod").unwrap();
        let mut spec = build_logging_role("us-east-1").role;
        spec.retain_on_delete = false;
        let tags = role_tags(&scope, &spec).unwrap();
        assert_eq!(tags.len(), 1);
    }
}
