use std::{io::Write, process::ExitCode};

use api_types::group::GroupSnapshot;
use clap::Parser;

use cli::{Cli, Command};
use error::{AppError, Result};
use render::Renderer;
use settings::Settings;

mod cli;
mod error;
mod render;
mod settings;
mod snapshot;

fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let path = cli.command.snapshot();
    tracing::info!("reading snapshot {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    let snapshot: GroupSnapshot = serde_json::from_str(&raw)?;
    let group = snapshot::load_group(&snapshot)?;

    let renderer = Renderer::new(settings);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Balances(_) => renderer.balances(&mut out, &group.balances()?)?,
        Command::Settle(_) => renderer.settlements(&mut out, &group.settlements()?)?,
        Command::Report(_) => renderer.report(&mut out, &group.summary()?)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("conto: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "conto={level},engine={level}",
            level = settings.level
        ))
        .init();

    match run(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Engine(err)) if !err.is_validation() => {
            tracing::error!("computation aborted, no result produced: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
