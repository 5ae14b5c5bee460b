use anyhow::Context;
use log::LevelFilter;
use simplelog::WriteLogger;
use std::path::Path;

/// Send log messages at or above `level` to the end of the file at `path`,
/// creating it and its parent directories as needed
pub(crate) fn init(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to install logger")?;
    Ok(())
}
