use anyhow::Context;
use clap::Parser;
use gradebook::app::repl;
use gradebook::utils::logger;
use gradebook::{CliConfig, LocalStorage, RosterEngine};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting gradebook CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let path = match &config.input {
        Some(path) => path.clone(),
        None => repl::prompt_filename(&mut input, &mut output)
            .context("failed to read filename from stdin")?,
    };

    let engine = RosterEngine::new(LocalStorage::new(), config);
    let outcome = match engine.load_roster(&path) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Failed to load roster: {}", e);
            println!("Error: Could not open file {}", path);
            std::process::exit(1);
        }
    };

    repl::print_diagnostics(&outcome.diagnostics, &mut output)
        .context("failed to report diagnostics")?;
    repl::run_query_loop(&outcome.roster, &mut input, &mut output).context("query loop failed")?;
    repl::print_course_summary(&outcome.roster, &mut output)
        .context("failed to print course summary")?;

    Ok(())
}
