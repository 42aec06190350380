use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use log::{error, info};
use spectra_lab::{load_grayscale, LabConfig, Pipeline, PngRenderer};

fn main() -> ExitCode {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match LabConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{:#}", e);
                return ExitCode::from(1);
            }
        },
        None => LabConfig::default(),
    };

    let _logger = match common::setup_logging(&config.log_level, &config.log_dir) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(1);
        }
    };

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Returns whether every output was written.
fn run(config: &LabConfig) -> anyhow::Result<bool> {
    info!("Loading {}", config.input.display());
    let image = load_grayscale(&config.input).context("Cannot read the input image")?;

    let report = Pipeline::new(config, &PngRenderer)
        .run(&image)
        .context("Spectral analysis failed")?;

    for (path, reason) in &report.failed {
        error!("Not written: {} ({})", path.display(), reason);
    }
    Ok(report.is_success())
}
