//! Fedi extractor: pull fediverse handles out of a document into a CSV list

use clap::Parser;
use colored::Colorize;
use fedi_extractor::cli::{self, Cli};
use fedi_extractor::config::Config;
use fedi_extractor::error::{FediExtractorError, Result};
use fedi_extractor::extractor::HandleExtractor;
use fedi_extractor::input::file_detector::SUPPORTED_EXTENSIONS;
use fedi_extractor::input::manager::InputManager;
use fedi_extractor::output::csv_writer;
use log::{error, info};
use std::process;

fn main() {
    // Parse CLI arguments (clap reports missing or extra arguments itself
    // and exits with a usage message)
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = run(cli, config) {
        error!("{}", e);
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    cli::validate_file_extension(&cli.input_file, SUPPORTED_EXTENSIONS)
        .map_err(FediExtractorError::UnsupportedFormat)?;

    info!("Extracting text from {}", cli.input_file.display());
    let mut input_manager = InputManager::new().with_cache(config.processing.enable_caching);
    let text = input_manager.extract_text(&cli.input_file)?;
    info!("Loaded {} characters", text.len());

    let extractor = HandleExtractor::new();
    let handles = extractor.extract(&text);
    info!("Found {} unique handles", handles.len());

    // No output file is touched until extraction has fully succeeded
    let output_path = cli
        .output
        .unwrap_or_else(|| config.output.default_path.clone());
    csv_writer::write_handle_list(&output_path, &cli.listname, &handles)?;

    println!(
        "{} {} handles from {} saved to {}",
        "✓".green().bold(),
        handles.len(),
        cli.input_file.display(),
        output_path.display()
    );

    Ok(())
}
