//! zbxctl - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use zbxctl::ui::{create_spinner, finish_spinner};
use zbxctl::{
    run_add_host_command, run_bulk_add_command, Cli, Command, ConnectionSettings, Provisioner,
    SettingsStore, ZabbixClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting zbxctl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = match &cli.config {
        Some(path) => SettingsStore::with_path(path.clone()),
        None => SettingsStore::new(),
    };
    let file = store.load()?;
    let settings = ConnectionSettings::resolve(&cli.overrides(), &file, !cli.quiet)?;
    debug!("Connection settings: {:?}", settings);

    let client = ZabbixClient::new(&settings.url, &settings.client_options())?;

    let spinner = create_spinner(
        &format!("Logging in to {} as '{}'...", settings.url, settings.username),
        cli.quiet,
    );
    let login = client.login(&settings.username, &settings.password).await;
    finish_spinner(spinner);
    let session = login?;

    let provisioner = Provisioner::new(&client, session).with_name_policy(cli.name_policy());

    match &cli.command {
        Command::AddHost(args) => {
            run_add_host_command(&provisioner, args, cli.quiet).await?;
        }
        Command::BulkAdd(args) => {
            let report = run_bulk_add_command(&provisioner, args).await?;
            if report.error_count() > 0 {
                info!("Completed with {} failed host(s)", report.error_count());
            } else {
                info!("Completed successfully");
            }
        }
    }

    Ok(())
}
