//! IAM service client boundary.
//!
//! The provisioning sequence drives the [`IamClient`] capability instead of a
//! concrete SDK client. The AWS adapter lives in [`aws`]; tests substitute an
//! in-memory fake.
//!
//! ## Authentication
//!
//! The AWS adapter loads credentials from the standard AWS credential chain:
//!
//! 1. Environment variables (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`)
//! 2. AWS credentials file (`~/.aws/credentials`), honoring `AWS_PROFILE`
//! 3. IAM instance profile / task role when running on AWS compute

pub mod aws;

use async_trait::async_trait;

use crate::error::Result;

pub use aws::AwsIamClient;

/// A freshly minted long-lived credential for an IAM user.
///
/// The secret is only ever held in memory and emitted once; nothing persists
/// it between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKeyPair {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Capability set the provisioner needs from the identity service.
///
/// Every method is one remote call. Implementations translate service
/// failures into the crate error taxonomy before returning, so callers never
/// inspect raw error codes.
#[async_trait]
pub trait IamClient: Send + Sync {
    /// Create a group with the given name.
    async fn create_group(&self, group_name: &str) -> Result<()>;

    /// Attach a managed policy to a group. Re-attaching an already-attached
    /// policy is a service-level no-op.
    async fn attach_group_policy(&self, group_name: &str, policy_arn: &str) -> Result<()>;

    /// Create a user with the given name.
    async fn create_user(&self, user_name: &str) -> Result<()>;

    /// Add a user to a group. The service tolerates duplicate membership.
    async fn add_user_to_group(&self, user_name: &str, group_name: &str) -> Result<()>;

    /// Mint a new access key pair for the user. Never idempotent: each call
    /// creates another key, up to the service's per-user limit.
    async fn create_access_key(&self, user_name: &str) -> Result<AccessKeyPair>;
}
