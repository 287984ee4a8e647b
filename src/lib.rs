//! # Iamforge - IAM Credential Provisioning for CI/CD
//!
//! Iamforge is a one-shot provisioning tool that creates an AWS IAM group,
//! attaches the partition-appropriate `AdministratorAccess` policy, creates a
//! user, joins the user to the group, and mints an access key pair. The run
//! ends with a JSON document shaped for a GitHub environment importer, so the
//! fresh credentials can be dropped straight into a CI/CD pipeline.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                CLI Interface                  │
//! │   (clap parsing, dialoguer prompts, gate)     │
//! └───────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │                 Provisioner                   │
//! │   (input resolution + the five-step run)      │
//! └───────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │              IamClient boundary               │
//! │   (capability trait + AWS SDK adapter with    │
//! │    tagged error decoding)                     │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The provisioning sequence never talks to the SDK directly; it drives the
//! [`iam::IamClient`] capability, which makes the core testable against an
//! in-memory fake without touching real credentials.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use iamforge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> iamforge::Result<()> {
//!     let request = ProvisioningRequest::new(
//!         "ci-group".to_string(),
//!         "ci-bot".to_string(),
//!         "staging".to_string(),
//!         "eu-west-1".to_string(),
//!         "default".to_string(),
//!     );
//!
//!     let client = AwsIamClient::connect(None, &request.region).await?;
//!     let doc = iamforge::provision::run(&request, &client).await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&doc)?);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod iam;
pub mod output;
pub mod provision;

pub use error::{Error, Result};

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::error::{Error, IamEntity, Result};
    pub use crate::iam::{AccessKeyPair, AwsIamClient, IamClient};
    pub use crate::provision::{
        policy_arn_for_region, resolve_profile, resolve_region, EnvironmentDoc, EnvironmentEntry,
        ProvisioningRequest, DEFAULT_GROUP_NAME, DEFAULT_REGION, DEFAULT_USER_NAME,
    };
}
