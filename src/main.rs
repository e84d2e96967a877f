use clap::Parser;
use lcm_lib::cli::{Cli, Commands};
use lcm_lib::config::SimulationConfig;
use lcm_lib::io::event_stream::SimEvent;
use lcm_lib::io::{bin, ensure_data_directories, json};
use lcm_lib::scheduler::Scheduler;
use log::{error, info};
use std::process::ExitCode;
use std::sync::mpsc;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, out_dir, seed } => run(&config, &out_dir, seed),
    }
}

fn run(config_path: &std::path::Path, out_dir: &std::path::Path, seed_override: Option<u64>) -> ExitCode {
    let mut config = match SimulationConfig::load_from_path(config_path) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(seed) = seed_override {
        config.seed = seed;
    }
    if let Err(err) = config.validate() {
        error!("invalid configuration: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = std::fs::create_dir_all(out_dir) {
        error!("failed to create output directory {}: {err}", out_dir.display());
        return ExitCode::FAILURE;
    }
    if let Err(err) = std::env::set_current_dir(out_dir) {
        error!("failed to enter output directory {}: {err}", out_dir.display());
        return ExitCode::FAILURE;
    }
    if let Err(err) = ensure_data_directories() {
        error!("failed to create data directories: {err}");
        return ExitCode::FAILURE;
    }

    let (tx, rx) = mpsc::channel();
    let log_handle = std::thread::spawn(move || {
        while let Ok(event) = rx.recv() {
            match event {
                SimEvent::Start { seed } => info!("simulation started, seed={seed}"),
                SimEvent::Data(snapshot) => {
                    info!("snapshot t={:.5} robots={}", snapshot.time, snapshot.robots.len())
                }
                SimEvent::Sec(report) => info!("final SEC report: {} entries", report.len()),
                SimEvent::End => info!("simulation ended"),
            }
        }
    });

    let mut scheduler = Scheduler::new(&config, Some(tx));
    scheduler.run();
    drop(log_handle.join());

    let stem = format!("seed-{}", config.seed);
    if let Err(err) = bin::save_file(&stem, &scheduler.history) {
        error!("failed to persist run as bincode: {err}");
    }
    if let Err(err) = json::export_json(&stem, &scheduler.history) {
        error!("failed to persist run as json: {err}");
    }

    info!("wrote run output under {}", out_dir.display());
    ExitCode::SUCCESS
}
