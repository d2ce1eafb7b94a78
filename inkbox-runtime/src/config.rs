use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::session::DEFAULT_SETTLE;

/// Process-wide settings, built once in `main` and handed to whatever needs them
#[derive(Clone, Debug)]
pub struct Config {
    pub verbosity: LevelFilter,
    /// Where font faces are looked up by file name
    pub fonts_dir: PathBuf,
    /// Pause after each frame so the panel can finish refreshing
    pub settle: Duration,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            verbosity: LevelFilter::Debug,
            fonts_dir: PathBuf::from("fonts"),
            settle: DEFAULT_SETTLE,
        }
    }
}

/// Installs the global logger at `config.verbosity`; `RUST_LOG` still takes precedence
pub fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.verbosity)
        .parse_default_env()
        .init();
}
