//! Coin Runner entry point
//!
//! Runs every level of a level set headlessly, with nobody at the controls,
//! and reports how each one ends.
//!
//! Usage: `coin-runner <levels.json> [settings.json]`

use std::path::Path;
use std::process::ExitCode;

use coin_runner::sim::{LevelParser, LevelStatus, run_until_finished};
use coin_runner::{Campaign, Settings};

fn run(levels_path: &Path, settings_path: Option<&Path>) -> coin_runner::Result<()> {
    let settings = match settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let campaign = Campaign::load(levels_path)?;
    let mut parser = LevelParser::with_seed(settings.seed);

    for (index, plan) in campaign.plans().iter().enumerate() {
        let mut level = parser.parse(plan.as_slice());
        let report = run_until_finished(&mut level, settings.dt, settings.max_ticks);
        let outcome = match report.status {
            LevelStatus::Won => "won",
            LevelStatus::Lost => "lost",
            LevelStatus::Playing => "undecided",
        };
        log::info!(
            "Level {}/{}: {} after {} ticks",
            index + 1,
            campaign.len(),
            outcome,
            report.ticks
        );
        println!("level {}: {} ({} ticks)", index + 1, outcome, report.ticks);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Coin Runner (headless) starting...");

    let args: Vec<String> = std::env::args().collect();
    let Some(levels_path) = args.get(1) else {
        eprintln!("usage: coin-runner <levels.json> [settings.json]");
        return ExitCode::FAILURE;
    };
    let settings_path = args.get(2).map(Path::new);

    match run(Path::new(levels_path), settings_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
