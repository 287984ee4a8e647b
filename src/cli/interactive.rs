//! Interactive prompts for provisioning runs using dialoguer.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use iamforge::provision::{ProvisioningRequest, DEFAULT_GROUP_NAME, DEFAULT_USER_NAME};

/// Interactive session state
pub struct InteractiveSession {
    term: Term,
    theme: ColorfulTheme,
}

impl Default for InteractiveSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveSession {
    /// Create a new interactive session
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }

    /// Display the prompt-mode banner
    pub fn show_banner(&self) {
        println!();
        println!("{}", "AWS IAM User Creator".bright_blue().bold());
        println!("{}", "=".repeat(40).bright_blue());
    }

    /// Prompt for the group name, falling back to the default
    pub fn prompt_group_name(&self) -> Result<String> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt("IAM group name")
            .default(DEFAULT_GROUP_NAME.to_string())
            .interact_on(&self.term)?)
    }

    /// Prompt for the user name, falling back to the default
    pub fn prompt_user_name(&self) -> Result<String> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt("IAM user name")
            .default(DEFAULT_USER_NAME.to_string())
            .interact_on(&self.term)?)
    }

    /// Prompt for the environment scope, re-asking until non-empty
    pub fn prompt_environment_scope(&self) -> Result<String> {
        loop {
            let scope: String = Input::with_theme(&self.theme)
                .with_prompt("Environment scope (e.g. staging, prod)")
                .allow_empty(true)
                .interact_on(&self.term)?;
            let scope = scope.trim().to_string();
            if !scope.is_empty() {
                return Ok(scope);
            }
            println!("{}", "Environment scope cannot be empty.".yellow());
        }
    }

    /// Render the review panel and ask for explicit approval
    pub fn confirm_provisioning(&self, request: &ProvisioningRequest) -> Result<bool> {
        let bar = "=".repeat(70);
        println!("\n{}", bar.bright_black());
        println!(
            "{}",
            "Review the IAM resources to be created".bright_white().bold()
        );
        println!("{}", bar.bright_black());
        println!("AWS Profile:   {}", request.profile.cyan());
        println!("AWS Region:    {}", request.region.cyan());
        println!("Group Name:    {}", request.group_name.cyan());
        println!("User Name:     {}", request.user_name.cyan());
        println!("Environment:   {}", request.environment_scope.cyan());
        println!("Policy ARN:    {}", request.policy_arn.cyan());
        println!("{}", bar.bright_black());
        println!(
            "{}",
            "The user will hold full administrative permissions."
                .yellow()
                .bold()
        );

        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Create these IAM resources?")
            .default(false)
            .interact_on(&self.term)?)
    }
}
