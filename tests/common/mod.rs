//! Shared test fixtures for Iamforge integration tests.
//!
//! Provides an in-memory recording IAM client so the provisioning sequence
//! can be exercised without credentials or network access.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use iamforge::error::{Error, IamEntity, Result};
use iamforge::iam::{AccessKeyPair, IamClient};

/// One recorded call against the fake service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IamCall {
    CreateGroup(String),
    AttachGroupPolicy { group: String, policy_arn: String },
    CreateUser(String),
    AddUserToGroup { user: String, group: String },
    CreateAccessKey(String),
}

/// In-memory stand-in for the IAM service.
///
/// Records every call in order, tracks which groups and users exist (created
/// or pre-seeded), and can be told to fail a named operation once with a
/// specific error.
pub struct FakeIamClient {
    calls: RwLock<Vec<IamCall>>,
    groups: RwLock<Vec<String>>,
    users: RwLock<Vec<String>>,
    failures: RwLock<HashMap<&'static str, Error>>,
    keys_minted: AtomicU32,
}

impl Default for FakeIamClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeIamClient {
    /// Create a fake service with no pre-existing entities.
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            groups: RwLock::new(Vec::new()),
            users: RwLock::new(Vec::new()),
            failures: RwLock::new(HashMap::new()),
            keys_minted: AtomicU32::new(0),
        }
    }

    /// Pre-seed a group as already existing.
    pub fn seed_group(&self, name: &str) {
        self.groups.write().push(name.to_string());
    }

    /// Pre-seed a user as already existing.
    pub fn seed_user(&self, name: &str) {
        self.users.write().push(name.to_string());
    }

    /// Fail the named operation once with the given error.
    pub fn fail_with(&self, operation: &'static str, err: Error) {
        self.failures.write().insert(operation, err);
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<IamCall> {
        self.calls.read().clone()
    }

    /// Number of access keys minted so far.
    pub fn keys_minted(&self) -> u32 {
        self.keys_minted.load(Ordering::SeqCst)
    }

    /// Whether the group exists on the fake service.
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.read().iter().any(|g| g == name)
    }

    /// Whether the user exists on the fake service.
    pub fn has_user(&self, name: &str) -> bool {
        self.users.read().iter().any(|u| u == name)
    }

    fn take_failure(&self, operation: &'static str) -> Option<Error> {
        self.failures.write().remove(operation)
    }
}

#[async_trait]
impl IamClient for FakeIamClient {
    async fn create_group(&self, group_name: &str) -> Result<()> {
        self.calls
            .write()
            .push(IamCall::CreateGroup(group_name.to_string()));
        if let Some(err) = self.take_failure("create_group") {
            return Err(err);
        }
        if self.has_group(group_name) {
            return Err(Error::AlreadyExists {
                entity: IamEntity::Group,
                name: group_name.to_string(),
            });
        }
        self.groups.write().push(group_name.to_string());
        Ok(())
    }

    async fn attach_group_policy(&self, group_name: &str, policy_arn: &str) -> Result<()> {
        self.calls.write().push(IamCall::AttachGroupPolicy {
            group: group_name.to_string(),
            policy_arn: policy_arn.to_string(),
        });
        if let Some(err) = self.take_failure("attach_group_policy") {
            return Err(err);
        }
        Ok(())
    }

    async fn create_user(&self, user_name: &str) -> Result<()> {
        self.calls
            .write()
            .push(IamCall::CreateUser(user_name.to_string()));
        if let Some(err) = self.take_failure("create_user") {
            return Err(err);
        }
        if self.has_user(user_name) {
            return Err(Error::AlreadyExists {
                entity: IamEntity::User,
                name: user_name.to_string(),
            });
        }
        self.users.write().push(user_name.to_string());
        Ok(())
    }

    async fn add_user_to_group(&self, user_name: &str, group_name: &str) -> Result<()> {
        self.calls.write().push(IamCall::AddUserToGroup {
            user: user_name.to_string(),
            group: group_name.to_string(),
        });
        if let Some(err) = self.take_failure("add_user_to_group") {
            return Err(err);
        }
        Ok(())
    }

    async fn create_access_key(&self, user_name: &str) -> Result<AccessKeyPair> {
        self.calls
            .write()
            .push(IamCall::CreateAccessKey(user_name.to_string()));
        if let Some(err) = self.take_failure("create_access_key") {
            return Err(err);
        }
        let n = self.keys_minted.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AccessKeyPair {
            access_key_id: format!("AKIAFAKE{n:08}"),
            secret_access_key: format!("fake-secret-{n:08}"),
        })
    }
}
