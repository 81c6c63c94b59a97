use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::extractor::extract_data;
use crate::transformer::process_data;
use crate::writer::write_table;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the command-line definition.
pub fn build_command() -> Command {
    Command::new("secop-cli")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("cli")
                .about("Extract, process and write the contract table")
                .after_help("The application token is read from the variable named by --token-env.\nExample:\n  SOCRATA_APP_TOKEN=... secop-cli cli -o data/secop/contracts.csv -f csv")
                .arg(
                    Arg::new("endpoint")
                        .long("endpoint")
                        .help("Socrata host (https:// is assumed when no scheme is given)")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("dataset")
                        .short('d')
                        .long("dataset")
                        .help("Dataset identifier (four-by-four, e.g. xvdy-vvsk)")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("token_env")
                        .long("token-env")
                        .help("Environment variable holding the application token")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Destination file for the processed table")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format: 'parquet' or 'csv'")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

/// Applies `cli` subcommand flags over the default configuration.
pub fn config_from_matches(sub: &ArgMatches) -> AppResult<ResolvedConfig> {
    let mut config = ResolvedConfig::default();
    if let Some(endpoint) = sub.get_one::<String>("endpoint") {
        config.endpoint = endpoint.clone();
    }
    if let Some(dataset) = sub.get_one::<String>("dataset") {
        config.dataset_id = dataset.clone();
    }
    if let Some(token_env) = sub.get_one::<String>("token_env") {
        config.token_env = token_env.clone();
    }
    if let Some(output) = sub.get_one::<PathBuf>("output") {
        config.output_path = output.clone();
    }
    if let Some(format) = sub.get_one::<String>("format") {
        config.output_format = format.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Parses command-line arguments and runs the pipeline.
///
/// This function handles two subcommands:
/// - `cli`: flags over the default configuration
/// - `toml`: values from a TOML configuration file
///
/// Both run the same workflow: extract the contract table, process it, and write it
/// to the configured output. Without a subcommand the help text is printed.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, or if extraction, processing or
/// writing fails.
pub async fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("cli", sub)) => {
            let config = config_from_matches(sub)?;
            run_workflow(&config).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .ok_or_else(|| AppError::InvalidInput("Config path is required".into()))?;

            let config = ResolvedConfig::from_toml_file(config_path)?;
            run_workflow(&config).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

/// Extracts, processes and writes the contract table described by `config`.
pub async fn run_workflow(config: &ResolvedConfig) -> AppResult<()> {
    print_extraction_info(config);
    let format = config.format()?;

    let raw = extract_data(config).await?;
    let mut processed = process_data(raw)?;
    write_table(&mut processed, &config.output_path, format)?;

    info!(
        contracts = processed.height(),
        output = %config.output_path.display(),
        "All operations completed successfully"
    );
    Ok(())
}

fn print_extraction_info(config: &ResolvedConfig) {
    info!(
        endpoint = config.endpoint.as_str(),
        dataset = config.dataset_id.as_str(),
        token_env = config.token_env.as_str(),
        "Starting extraction"
    );
}
