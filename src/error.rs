//! Error types for Iamforge.
//!
//! Raw SDK failures are decoded into this taxonomy at the service-client
//! boundary; the provisioning sequence only ever sees these variants.

use std::fmt;
use thiserror::Error;

/// Result type alias for Iamforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of IAM entity a provisioning step operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IamEntity {
    Group,
    User,
}

impl fmt::Display for IamEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IamEntity::Group => write!(f, "group"),
            IamEntity::User => write!(f, "user"),
        }
    }
}

/// The main error type for Iamforge.
#[derive(Error, Debug)]
pub enum Error {
    /// The service reported that the entity already exists.
    ///
    /// Recovered by the provisioner for group and user creation; fatal
    /// anywhere else.
    #[error("IAM {entity} '{name}' already exists")]
    AlreadyExists {
        /// Entity kind the creation call targeted
        entity: IamEntity,
        /// Name of the existing entity
        name: String,
    },

    /// No usable AWS credentials could be resolved.
    #[error("AWS credentials not found: {message}")]
    CredentialsMissing {
        /// What the credential chain reported
        message: String,
    },

    /// Any other failure reported by the IAM service.
    #[error("IAM service error [{code}]: {message}")]
    Service {
        /// Service error code, `Unknown` when the response carried none
        code: String,
        /// Service-provided message
        message: String,
    },

    /// Anything that is not a classified service response.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Whether this is the recoverable already-exists condition.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExists { .. })
    }
}
