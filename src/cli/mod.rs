//! CLI module for Iamforge
//!
//! Argument parsing for the one-shot provisioning run, plus the interactive
//! prompt session.

pub mod interactive;

use clap::Parser;
use iamforge::provision::{DEFAULT_GROUP_NAME, DEFAULT_USER_NAME};

/// Iamforge - provision AWS IAM credentials for CI/CD pipelines
///
/// Creates an IAM group with AdministratorAccess, an IAM user in that group,
/// and a fresh access key pair, then prints a GitHub environment document.
#[derive(Parser, Debug, Clone)]
#[command(name = "iamforge")]
#[command(author = "Iamforge Contributors")]
#[command(version)]
#[command(about = "Provision an IAM group, user, and access keys for CI/CD", long_about = None)]
pub struct Cli {
    /// IAM group name
    #[arg(default_value = DEFAULT_GROUP_NAME)]
    pub group_name: String,

    /// IAM user name
    #[arg(default_value = DEFAULT_USER_NAME)]
    pub user_name: String,

    /// Environment scope (e.g. staging, prod); prompts when omitted
    pub environment_scope: Option<String>,

    /// AWS profile to use (defaults to the ambient session)
    #[arg(long)]
    pub profile: Option<String>,

    /// AWS region (defaults to the session, then AWS_DEFAULT_REGION)
    #[arg(long)]
    pub region: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Prompt for group, user, and environment even when provided
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the effective verbosity level (0-4)
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(4)
    }

    /// Whether prompt mode is in effect for input gathering
    pub fn wants_prompts(&self) -> bool {
        self.interactive || self.environment_scope.is_none()
    }
}
