use anyhow::{Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Environment variable holding the log level (`off`, `error` ... `trace`).
pub const LOG_ENV: &str = "MARQUEE_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Installs a stderr logger with the level taken from [`LOG_ENV`].
pub fn init_from_env() -> Result<()> {
    let raw = std::env::var(LOG_ENV).ok();
    let parsed = raw.as_deref().and_then(parse_level);
    init(parsed.unwrap_or(DEFAULT_LEVEL))?;

    if let (Some(raw), None) = (&raw, parsed) {
        log::warn!("ignoring invalid {LOG_ENV} value {raw:?}");
    }

    Ok(())
}

fn init(level: LevelFilter) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::BrightBlack);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to install logger")
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("TRACE"), Some(LevelFilter::Trace));
        assert_eq!(parse_level(" off "), Some(LevelFilter::Off));
    }

    #[test]
    fn unknown_levels_are_rejected() {
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level(""), None);
    }
}
