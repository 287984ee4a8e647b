//! AWS SDK adapter for the [`IamClient`] capability.
//!
//! Raw SDK failures are decoded into the crate taxonomy here, at the
//! boundary, so the provisioning sequence never branches on service error
//! codes itself.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_iam::config::Region;
use aws_sdk_iam::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_iam::Client;

use super::{AccessKeyPair, IamClient};
use crate::error::{Error, IamEntity, Result};

/// Error code the service reports for an entity that already exists.
const ENTITY_ALREADY_EXISTS: &str = "EntityAlreadyExists";

/// IAM client backed by the AWS SDK.
pub struct AwsIamClient {
    client: Client,
}

impl AwsIamClient {
    /// Build a client against the resolved region, optionally pinning a
    /// credentials profile.
    ///
    /// The credential chain is resolved eagerly so a missing-credentials
    /// failure surfaces before any provisioning call is made.
    pub async fn connect(profile: Option<&str>, region: &str) -> Result<Self> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        let config = loader.load().await;

        let provider = config
            .credentials_provider()
            .ok_or_else(|| Error::CredentialsMissing {
                message: "no credentials provider configured".to_string(),
            })?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| Error::CredentialsMissing {
                message: e.to_string(),
            })?;

        Ok(Self {
            client: Client::new(&config),
        })
    }
}

/// Region the ambient AWS configuration resolves to, if any.
///
/// Profile files and the SDK's environment handling both feed into this, the
/// same sources a session would consult when no region is forced.
pub async fn ambient_region(profile: Option<&str>) -> Option<String> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    let config = loader.load().await;
    config.region().map(ToString::to_string)
}

/// Translate a raw SDK failure into the crate taxonomy.
///
/// Service-reported errors keep their code and message; the already-exists
/// code becomes the recoverable variant. Anything without a service response
/// (dispatch, timeout, response parsing) lands in `Unexpected`.
fn decode<E>(entity: IamEntity, name: &str, err: SdkError<E>) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match err.as_service_error() {
        Some(svc) if svc.code() == Some(ENTITY_ALREADY_EXISTS) => Error::AlreadyExists {
            entity,
            name: name.to_string(),
        },
        Some(svc) => classify(svc.code(), svc.message()),
        None => Error::Unexpected(format!("{}", DisplayErrorContext(&err))),
    }
}

/// Classification for a service-reported error code and message.
fn classify(code: Option<&str>, message: Option<&str>) -> Error {
    Error::Service {
        code: code.unwrap_or("Unknown").to_string(),
        message: message.unwrap_or("no message from service").to_string(),
    }
}

#[async_trait]
impl IamClient for AwsIamClient {
    async fn create_group(&self, group_name: &str) -> Result<()> {
        self.client
            .create_group()
            .group_name(group_name)
            .send()
            .await
            .map_err(|e| decode(IamEntity::Group, group_name, e))?;
        Ok(())
    }

    async fn attach_group_policy(&self, group_name: &str, policy_arn: &str) -> Result<()> {
        self.client
            .attach_group_policy()
            .group_name(group_name)
            .policy_arn(policy_arn)
            .send()
            .await
            .map_err(|e| decode(IamEntity::Group, group_name, e))?;
        Ok(())
    }

    async fn create_user(&self, user_name: &str) -> Result<()> {
        self.client
            .create_user()
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| decode(IamEntity::User, user_name, e))?;
        Ok(())
    }

    async fn add_user_to_group(&self, user_name: &str, group_name: &str) -> Result<()> {
        self.client
            .add_user_to_group()
            .user_name(user_name)
            .group_name(group_name)
            .send()
            .await
            .map_err(|e| decode(IamEntity::User, user_name, e))?;
        Ok(())
    }

    async fn create_access_key(&self, user_name: &str) -> Result<AccessKeyPair> {
        let resp = self
            .client
            .create_access_key()
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| decode(IamEntity::User, user_name, e))?;

        let key = resp.access_key().ok_or_else(|| {
            Error::Unexpected("access key creation returned no key material".to_string())
        })?;
        let access_key_id = key.access_key_id().to_string();
        let secret_access_key = key.secret_access_key().to_string();

        Ok(AccessKeyPair {
            access_key_id,
            secret_access_key,
        })
    }
}
