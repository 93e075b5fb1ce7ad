use eight_puzzle::config::{Cli, Config};
use eight_puzzle::error::PuzzleError;
use eight_puzzle::problem::Problem;
use eight_puzzle::scenario::{inversions, load_initial};
use eight_puzzle::{runner, stat};

use anyhow::Context;
use clap::Parser;
use std::io;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)
            .with_context(|| format!("error reading config file: {config_file}"))?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        info!("No config file specified, using default config");
        Config::default()
    }
    .override_from_command_line(&cli)?;
    config.validate()?;

    let initial = match load_initial(&config) {
        Ok(state) => state,
        Err(err @ (PuzzleError::InputFormat | PuzzleError::Unsolvable)) => {
            error!("rejected initial state: {err}");
            println!("{err}");
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };
    info!("initial state {initial} with {} inversions", inversions(&initial));

    let problem = Problem::new(initial);
    let stats = runner::run_all(&problem, &config, &mut io::stdout().lock())?;

    if let Some(output_path) = config.output_path.as_ref() {
        stat::write_csv(&stats, &initial, output_path)
            .with_context(|| format!("error writing statistics to {output_path}"))?;
        info!("statistics appended to {output_path}");
    }

    Ok(())
}
