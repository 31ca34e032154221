use std::fs::{self, File};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing::Level;

/// Sends JSON log lines to `output_path`. The terminal belongs to the UI,
/// so without a log file nothing is installed and events are discarded.
pub fn init_file_logging(output_path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_max_level(parse_level(level))
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}

/// Unknown level names fall back to `info`.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level(" trace "), Level::TRACE);
    }

    #[test]
    fn unknown_level_is_info() {
        assert_eq!(parse_level("chatty"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }
}
