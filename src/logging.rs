use std::str::FromStr;
use std::time::SystemTime;

use log::LevelFilter;

use crate::config::LogConfig;

/// installs the global logger. Lines look like `[2024-01-01T00:00:00Z INFO cache_warmup::warmup] message`.
///
/// an unknown level in the config falls back to `info`
pub fn init_logger(config: &LogConfig) -> Result<(), fern::InitError> {
    let level = LevelFilter::from_str(&config.level).unwrap_or(LevelFilter::Info);
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());
    if let Some(file) = &config.file {
        dispatch = dispatch.chain(fern::log_file(file)?);
    }
    dispatch.apply()?;
    Ok(())
}
