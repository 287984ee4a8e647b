//! Iamforge - provision AWS IAM credentials for CI/CD pipelines
//!
//! This is the main entry point for the Iamforge CLI.

mod cli;

use anyhow::Result;
use cli::interactive::InteractiveSession;
use cli::Cli;
use iamforge::error::Error;
use iamforge::iam::aws::{ambient_region, AwsIamClient};
use iamforge::output;
use iamforge::provision::{self, resolve_profile, resolve_region, ProvisioningRequest};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(cli.verbosity());

    if cli.no_color {
        colored::control::set_override(false);
    }

    let exit_code = run(cli).await?;
    std::process::exit(exit_code);
}

/// Initialize logging based on verbosity level
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(verbosity >= 3))
        .with(env_filter)
        .init();
}

/// Drive one provisioning run and return the process exit code.
async fn run(cli: Cli) -> Result<i32> {
    // Gather inputs, prompting when forced or when the scope is missing.
    let (group_name, user_name, environment_scope) = if cli.wants_prompts() {
        let session = InteractiveSession::new();
        session.show_banner();
        (
            session.prompt_group_name()?,
            session.prompt_user_name()?,
            session.prompt_environment_scope()?,
        )
    } else {
        let scope = cli.environment_scope.clone().unwrap_or_default();
        (cli.group_name.clone(), cli.user_name.clone(), scope)
    };

    let session_region = ambient_region(cli.profile.as_deref()).await;
    let env_region = std::env::var("AWS_DEFAULT_REGION").ok();
    let region = resolve_region(
        cli.region.as_deref(),
        session_region.as_deref(),
        env_region.as_deref(),
    );

    let env_profile = std::env::var("AWS_PROFILE").ok();
    let profile = resolve_profile(cli.profile.as_deref(), env_profile.as_deref(), None);

    let request = ProvisioningRequest::new(group_name, user_name, environment_scope, region, profile);

    output::step(&format!(
        "Initializing AWS IAM operations (profile: {}, region: {})",
        request.profile, request.region
    ));

    if !gate_allows(cli.yes, || {
        InteractiveSession::new().confirm_provisioning(&request)
    })? {
        output::cancelled();
        return Ok(0);
    }

    let client = match AwsIamClient::connect(cli.profile.as_deref(), &request.region).await {
        Ok(client) => client,
        Err(err) => return Ok(report_failure(&err)),
    };

    match provision::run(&request, &client).await {
        Ok(doc) => {
            output::success_banner();
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(0)
        }
        Err(err) => Ok(report_failure(&err)),
    }
}

/// Decide whether provisioning may proceed.
///
/// The confirmation closure only runs when it has not been skipped; declining
/// means no creation call is ever made.
fn gate_allows(skip_confirmation: bool, confirm: impl FnOnce() -> Result<bool>) -> Result<bool> {
    if skip_confirmation {
        return Ok(true);
    }
    confirm()
}

/// Map a classified error onto stderr output and the process exit code.
fn report_failure(err: &Error) -> i32 {
    match err {
        Error::CredentialsMissing { message } => {
            output::failed(&format!(
                "AWS credentials not found ({message}). Configure credentials or set AWS_PROFILE."
            ));
        }
        Error::Service { code, message } => {
            output::failed(&format!("AWS error [{code}]: {message}"));
        }
        other => output::failed(&other.to_string()),
    }
    1
}
