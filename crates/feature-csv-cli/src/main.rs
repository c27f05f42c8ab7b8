//! Converter binary turning Gherkin feature files into test-case CSV.

use clap::Parser;
use tracing::info;

use feature_csv_cli::cli::{Cli, Outcome, run};
use feature_csv_cli::config::CliConfig;
use feature_csv_cli::error::CliError;
use feature_csv_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let fallback = CliConfig::default();
            init_logging(&fallback);
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "starting featurecsv");

    let result = cli.command().and_then(|command| run(&command, &config));
    match result {
        Ok(Outcome::Written) => {}
        Ok(Outcome::NoTestCases) => std::process::exit(1),
        Err(e) => {
            let message = format!("{e:#}");
            tracing::error!(error = %message, "conversion failed");
            std::process::exit(1);
        }
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level, cli.format))
}
