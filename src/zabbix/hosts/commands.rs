//! Host command handlers

use log::debug;

use crate::cli::AddHostArgs;
use crate::ui::{create_spinner, finish_spinner};

use super::models::HostCreationResult;
use super::provisioner::Provisioner;

/// Run the add-host command
///
/// Unlike bulk mode, a failure here is returned to the caller and ends the
/// process with a non-zero exit status.
pub async fn run_add_host_command(
    provisioner: &Provisioner<'_>,
    args: &AddHostArgs,
    quiet: bool,
) -> Result<HostCreationResult, Box<dyn std::error::Error>> {
    let request = args.to_request();
    debug!(
        "add-host '{}' groups={:?} templates={:?}",
        request.hostname, request.groups, request.templates
    );

    let spinner = create_spinner(&format!("Adding host '{}'...", request.hostname), quiet);
    let outcome = provisioner.create_host(&request).await;
    finish_spinner(spinner);

    let result = outcome?;
    for warning in &result.warnings {
        eprintln!("Warning: {}", warning);
    }
    println!(
        "✓ Host '{}' added (ID: {})",
        result.hostname,
        result.host_id.as_deref().unwrap_or("-")
    );
    Ok(result)
}
