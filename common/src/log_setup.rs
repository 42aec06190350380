use std::path::Path;

use anyhow::Context;
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

/// Starts logging to rotating files under `log_dir`, mirrored to the console.
///
/// Everything goes to stdout, warnings and errors additionally to stderr.
/// The returned handle must be kept alive for as long as file logging is wanted.
pub fn setup_logging(base_level: &str, log_dir: &Path) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_str(base_level)
        .with_context(|| format!("invalid log level '{}'", base_level))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("spectra"),
        )
        .duplicate_to_stderr(Duplicate::Warn)
        .duplicate_to_stdout(Duplicate::All)
        .rotate(
            Criterion::Size(1024 * 1024), //1MB
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()
        .context("logger initialization failed")?;

    Ok(handle)
}
