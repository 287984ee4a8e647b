//! Progress reporting for provisioning runs

use colored::Colorize;

/// Print the step about to run
pub fn step(msg: &str) {
    println!("{}", msg);
}

/// Print a completed creation
pub fn created(msg: &str) {
    println!("{}: {}", "ok".green(), msg);
}

/// Print an entity that was already in place
pub fn exists(msg: &str) {
    println!("{}: {}", "warning".yellow(), msg);
}

/// Print a fatal failure
pub fn failed(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print the success banner shown before the emitted document
pub fn success_banner() {
    println!("\n{}", "=".repeat(70).bright_black());
    println!("{}", "SUCCESS! IAM resources created.".green().bold());
    println!("{}", "=".repeat(70).bright_black());
    println!("GitHub Environment JSON:");
}

/// Print the cancellation notice for a declined run
pub fn cancelled() {
    println!("{}", "Operation cancelled by user.".yellow());
}
