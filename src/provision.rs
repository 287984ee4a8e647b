//! The provisioning sequence and its input resolution.
//!
//! Input resolution (region, profile, policy ARN) is pure and synchronous;
//! the run itself is a strictly sequential chain of calls against an injected
//! [`IamClient`]. Group and user creation tolerate the already-exists answer;
//! every other failure aborts the remaining steps and leaves the resources
//! created so far in place. There is deliberately no rollback.

use serde::Serialize;

use crate::error::Result;
use crate::iam::{AccessKeyPair, IamClient};
use crate::output;

/// Default IAM group when none is given.
pub const DEFAULT_GROUP_NAME: &str = "github_iac";

/// Default IAM user when none is given.
pub const DEFAULT_USER_NAME: &str = "github_user";

/// Last-resort region when neither flag, session, nor environment names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Display label when no profile source names one.
pub const DEFAULT_PROFILE: &str = "default";

/// Regions living in the GovCloud partition.
const GOV_REGIONS: [&str; 2] = ["us-gov-west-1", "us-gov-east-1"];

const ADMIN_POLICY_ARN: &str = "arn:aws:iam::aws:policy/AdministratorAccess";
const GOV_ADMIN_POLICY_ARN: &str = "arn:aws-us-gov:iam::aws:policy/AdministratorAccess";

/// Administrator policy ARN for the partition the region lives in.
pub fn policy_arn_for_region(region: &str) -> &'static str {
    if GOV_REGIONS.contains(&region) {
        GOV_ADMIN_POLICY_ARN
    } else {
        ADMIN_POLICY_ARN
    }
}

/// First candidate that is present and non-blank.
fn first_non_empty<'a>(candidates: [Option<&'a str>; 3]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

/// Region precedence: explicit flag, then the ambient session, then the
/// `AWS_DEFAULT_REGION` fallback, then the fixed default.
pub fn resolve_region(flag: Option<&str>, session: Option<&str>, env: Option<&str>) -> String {
    first_non_empty([flag, session, env])
        .unwrap_or(DEFAULT_REGION)
        .to_string()
}

/// Display-only profile label: explicit flag, then the `AWS_PROFILE`
/// override, then the session profile, then the fixed label.
pub fn resolve_profile(flag: Option<&str>, env: Option<&str>, session: Option<&str>) -> String {
    first_non_empty([flag, env, session])
        .unwrap_or(DEFAULT_PROFILE)
        .to_string()
}

/// Everything a single provisioning run needs, resolved up front.
///
/// The profile is carried for display only; the client is already bound to
/// its credentials by the time a request exists.
#[derive(Debug, Clone)]
pub struct ProvisioningRequest {
    pub group_name: String,
    pub user_name: String,
    pub environment_scope: String,
    pub region: String,
    pub policy_arn: String,
    pub profile: String,
}

impl ProvisioningRequest {
    /// Assemble a request, deriving the policy ARN from the region.
    pub fn new(
        group_name: String,
        user_name: String,
        environment_scope: String,
        region: String,
        profile: String,
    ) -> Self {
        let policy_arn = policy_arn_for_region(&region).to_string();
        Self {
            group_name,
            user_name,
            environment_scope,
            region,
            policy_arn,
            profile,
        }
    }
}

/// One name/value entry in the environment document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentEntry {
    pub name: String,
    pub value: String,
}

/// The document handed to the CI/CD environment importer.
///
/// Field names and nesting are a compatibility contract with the downstream
/// consumer; do not rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentDoc {
    pub name: String,
    pub branches: Vec<String>,
    pub variables: Vec<EnvironmentEntry>,
    pub secrets: Vec<EnvironmentEntry>,
}

impl EnvironmentDoc {
    /// Bind the scope, region, and freshly minted key pair into the document.
    pub fn new(scope: &str, region: &str, key: &AccessKeyPair) -> Self {
        Self {
            name: scope.to_string(),
            branches: vec![scope.to_string()],
            variables: vec![EnvironmentEntry {
                name: "AWS_DEFAULT_REGION".to_string(),
                value: region.to_string(),
            }],
            secrets: vec![
                EnvironmentEntry {
                    name: "AWS_ACCESS_KEY_ID".to_string(),
                    value: key.access_key_id.clone(),
                },
                EnvironmentEntry {
                    name: "AWS_SECRET_ACCESS_KEY".to_string(),
                    value: key.secret_access_key.clone(),
                },
            ],
        }
    }
}

/// Execute the provisioning sequence against the injected client.
///
/// Steps run in a fixed order: create group, attach policy, create user, add
/// user to group, mint an access key. The already-exists answer is tolerated
/// for group and user creation only. Every successful run mints a new key
/// pair; repeated runs accumulate keys on the user up to the service limit.
pub async fn run(request: &ProvisioningRequest, client: &dyn IamClient) -> Result<EnvironmentDoc> {
    output::step(&format!("Creating IAM group: {}...", request.group_name));
    match client.create_group(&request.group_name).await {
        Ok(()) => output::created(&format!("Group {} created", request.group_name)),
        Err(err) if err.is_already_exists() => {
            tracing::warn!("Group {} already exists, continuing", request.group_name);
            output::exists(&format!(
                "Group {} already exists, continuing...",
                request.group_name
            ));
        }
        Err(err) => return Err(err),
    }

    output::step(&format!(
        "Attaching policy {} to group: {}...",
        request.policy_arn, request.group_name
    ));
    client
        .attach_group_policy(&request.group_name, &request.policy_arn)
        .await?;
    output::created(&format!("Policy attached to group {}", request.group_name));

    output::step(&format!("Creating IAM user: {}...", request.user_name));
    match client.create_user(&request.user_name).await {
        Ok(()) => output::created(&format!("User {} created", request.user_name)),
        Err(err) if err.is_already_exists() => {
            tracing::warn!("User {} already exists, continuing", request.user_name);
            output::exists(&format!(
                "User {} already exists, continuing...",
                request.user_name
            ));
        }
        Err(err) => return Err(err),
    }

    output::step(&format!(
        "Adding user {} to group {}...",
        request.user_name, request.group_name
    ));
    client
        .add_user_to_group(&request.user_name, &request.group_name)
        .await?;
    output::created(&format!(
        "User {} added to group {}",
        request.user_name, request.group_name
    ));

    output::step(&format!(
        "Creating access keys for user {}...",
        request.user_name
    ));
    let key = client.create_access_key(&request.user_name).await?;
    output::created(&format!(
        "Access keys created for user {}",
        request.user_name
    ));
    tracing::debug!("Minted access key {}", key.access_key_id);

    Ok(EnvironmentDoc::new(
        &request.environment_scope,
        &request.region,
        &key,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gov_regions_resolve_to_gov_partition_arn() {
        for region in ["us-gov-west-1", "us-gov-east-1"] {
            assert_eq!(
                policy_arn_for_region(region),
                "arn:aws-us-gov:iam::aws:policy/AdministratorAccess"
            );
        }
    }

    #[test]
    fn other_regions_resolve_to_standard_partition_arn() {
        for region in ["us-east-1", "eu-west-1", "ap-southeast-2", "made-up-region"] {
            assert_eq!(
                policy_arn_for_region(region),
                "arn:aws:iam::aws:policy/AdministratorAccess"
            );
        }
    }

    #[test]
    fn region_precedence_is_flag_session_env_default() {
        assert_eq!(
            resolve_region(Some("eu-central-1"), Some("eu-west-1"), Some("us-west-2")),
            "eu-central-1"
        );
        assert_eq!(
            resolve_region(None, Some("eu-west-1"), Some("us-west-2")),
            "eu-west-1"
        );
        assert_eq!(resolve_region(None, None, Some("us-west-2")), "us-west-2");
        assert_eq!(resolve_region(None, None, None), DEFAULT_REGION);
    }

    #[test]
    fn blank_region_sources_are_skipped() {
        assert_eq!(resolve_region(Some(""), Some("  "), Some("us-west-2")), "us-west-2");
        assert_eq!(resolve_region(Some(""), None, None), DEFAULT_REGION);
    }

    #[test]
    fn profile_precedence_is_flag_env_session_default() {
        assert_eq!(
            resolve_profile(Some("deploy"), Some("staging"), Some("work")),
            "deploy"
        );
        assert_eq!(resolve_profile(None, Some("staging"), Some("work")), "staging");
        assert_eq!(resolve_profile(None, None, Some("work")), "work");
        assert_eq!(resolve_profile(None, None, None), DEFAULT_PROFILE);
    }

    #[test]
    fn request_derives_policy_arn_from_region() {
        let request = ProvisioningRequest::new(
            "ci-group".to_string(),
            "ci-bot".to_string(),
            "prod".to_string(),
            "us-gov-east-1".to_string(),
            "default".to_string(),
        );
        assert_eq!(
            request.policy_arn,
            "arn:aws-us-gov:iam::aws:policy/AdministratorAccess"
        );
    }

    #[test]
    fn environment_doc_matches_the_importer_contract() {
        let key = AccessKeyPair {
            access_key_id: "AKIAEXAMPLE".to_string(),
            secret_access_key: "wJalrXUtnFEMI".to_string(),
        };
        let doc = EnvironmentDoc::new("staging", "eu-west-1", &key);

        let value = serde_json::to_value(&doc).expect("document serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "staging",
                "branches": ["staging"],
                "variables": [
                    {"name": "AWS_DEFAULT_REGION", "value": "eu-west-1"}
                ],
                "secrets": [
                    {"name": "AWS_ACCESS_KEY_ID", "value": "AKIAEXAMPLE"},
                    {"name": "AWS_SECRET_ACCESS_KEY", "value": "wJalrXUtnFEMI"}
                ]
            })
        );
    }
}
