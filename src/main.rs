use clap::Parser;
use discogs_launch::utils::{logger, validation::Validate};
use discogs_launch::{CliConfig, Launcher, TokioRunner};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting discogs-launch");
    if config.verbose {
        tracing::debug!(
            program = %config.program,
            alerter_type = %config.alerter_type,
            list_id = %config.list_id,
            "Resolved configuration"
        );
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let launcher = Launcher::new(TokioRunner::new());

    match launcher.run(&config).await {
        Ok(outcome) => {
            // From here the exit status belongs to the external program.
            std::process::exit(outcome.launcher_code());
        }
        Err(e) => {
            tracing::error!("Handoff failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
