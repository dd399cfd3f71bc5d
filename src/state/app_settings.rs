use crate::cli::TeamArgs;
use log::LevelFilter;
use std::path::PathBuf;

/// Runtime settings. Everything comes from the command line.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub cache_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl AppSettings {
    pub fn from_cli(args: &TeamArgs, verbose: u8) -> Self {
        Self {
            cache_dir: args.cache_dir.clone(),
            log_level: level_for(verbose),
        }
    }

    pub fn apply_log_level(&self) {
        apply_log_level(self.log_level);
    }
}

/// `-v` steps up from warnings.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn apply_log_level(level: LevelFilter) {
    log::set_max_level(level);
    tui_logger::set_default_level(level);
}
